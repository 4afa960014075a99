// SPDX-License-Identifier: MPL-2.0
//! Image drawn with a translate-then-scale transform.
//!
//! Layout reserves the image's fitted size at rest; zooming and panning only
//! change how it is drawn, so the lightbox frame never reflows. Drawing is
//! clipped to the widget bounds.

use crate::media::ImageSize;
use crate::site::Filter;
use crate::ui::modal::Transform;
use iced::advanced::image::{self as advanced_image, Renderer as _};
use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer::{self, Renderer as _};
use iced::advanced::widget::{self, Widget};
use iced::widget::image::Handle;
use iced::{mouse, Element, Length, Rectangle, Size, Theme};

/// Aspect ratio assumed until the natural size is known.
const FALLBACK_ASPECT: f32 = 3.0 / 4.0;

pub struct TransformedImage {
    handle: Handle,
    natural_size: Option<ImageSize>,
    transform: Transform,
    filter: Filter,
}

impl TransformedImage {
    pub fn new(handle: Handle, natural_size: Option<ImageSize>, transform: Transform) -> Self {
        Self {
            handle,
            natural_size,
            transform,
            filter: Filter::Linear,
        }
    }

    #[must_use]
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }
}

/// Largest size with the image's aspect ratio that fits `max`, never
/// upscaling past the natural size.
fn fitted_size(natural: Option<ImageSize>, max: Size) -> Size {
    let Some(natural) = natural.filter(|s| s.width > 0 && s.height > 0) else {
        let width = max.width;
        return Size::new(width, (width * FALLBACK_ASPECT).min(max.height));
    };
    let (w, h) = (natural.width as f32, natural.height as f32);
    let scale = (max.width / w).min(max.height / h).min(1.0);
    Size::new(w * scale, h * scale)
}

/// Where the image lands inside `bounds` once `transform` is applied.
/// Scaling is about the center of the resting rectangle.
fn transformed_bounds(bounds: Rectangle, transform: Transform) -> Rectangle {
    let width = bounds.width * transform.scale;
    let height = bounds.height * transform.scale;
    let center = bounds.center();
    Rectangle {
        x: center.x - width / 2.0 + transform.offset.x,
        y: center.y - height / 2.0 + transform.offset.y,
        width,
        height,
    }
}

impl<Message> Widget<Message, Theme, iced::Renderer> for TransformedImage {
    fn size(&self) -> Size<Length> {
        Size::new(Length::Shrink, Length::Shrink)
    }

    fn layout(
        &mut self,
        _tree: &mut widget::Tree,
        _renderer: &iced::Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        layout::Node::new(fitted_size(self.natural_size, limits.max()))
    }

    fn draw(
        &self,
        _tree: &widget::Tree,
        renderer: &mut iced::Renderer,
        _theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let image_bounds = transformed_bounds(bounds, self.transform);
        let filter_method = match self.filter {
            Filter::Linear => advanced_image::FilterMethod::Linear,
            Filter::Nearest => advanced_image::FilterMethod::Nearest,
        };

        renderer.with_layer(bounds, |renderer| {
            let image = advanced_image::Image::<Handle> {
                handle: self.handle.clone(),
                filter_method,
                rotation: iced::Radians(0.0),
                opacity: 1.0,
                snap: true,
                border_radius: iced::border::Radius::default(),
            };
            renderer.draw_image(image, image_bounds, bounds);
        });
    }
}

impl<'a, Message: 'a> From<TransformedImage> for Element<'a, Message> {
    fn from(widget: TransformedImage) -> Self {
        Element::new(widget)
    }
}
