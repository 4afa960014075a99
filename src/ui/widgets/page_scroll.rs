// SPDX-License-Identifier: MPL-2.0
//! The page's vertical scroll area.
//!
//! While frozen, wheel input never reaches the scrollable, so the page keeps
//! its position under an open lightbox or drawer. The lightbox still sees the
//! wheel through the window event subscription.

use iced::advanced::layout::{self, Layout};
use iced::advanced::widget::{self, Widget};
use iced::advanced::{renderer, Clipboard, Shell};
use iced::widget::scrollable;
use iced::{mouse, Element, Event, Length, Rectangle, Renderer, Size, Theme};

pub struct PageScroll<'a, Message> {
    area: Element<'a, Message>,
    frozen: bool,
}

/// Scrollable page `content` filling the remaining height.
pub fn page_scroll<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    frozen: bool,
) -> PageScroll<'a, Message> {
    PageScroll {
        area: scrollable(content).height(Length::Fill).into(),
        frozen,
    }
}

/// Whether `event` is kept from the page while `frozen`.
fn swallows(event: &Event, frozen: bool) -> bool {
    frozen && matches!(event, Event::Mouse(mouse::Event::WheelScrolled { .. }))
}

impl<Message> Widget<Message, Theme, Renderer> for PageScroll<'_, Message> {
    fn size(&self) -> Size<Length> {
        self.area.as_widget().size()
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.area)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.area]);
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let [area] = tree.children.as_mut_slice() else {
            return layout::Node::new(Size::ZERO);
        };
        self.area.as_widget_mut().layout(area, renderer, limits)
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        if swallows(event, self.frozen) {
            return;
        }
        if let [area] = tree.children.as_mut_slice() {
            self.area.as_widget_mut().update(
                area, event, layout, cursor, renderer, clipboard, shell, viewport,
            );
        }
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        if let [area] = tree.children.as_slice() {
            self.area
                .as_widget()
                .draw(area, renderer, theme, style, layout, cursor, viewport);
        }
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        match tree.children.as_slice() {
            [area] => self
                .area
                .as_widget()
                .mouse_interaction(area, layout, cursor, viewport, renderer),
            _ => mouse::Interaction::None,
        }
    }
}

impl<'a, Message: 'a> From<PageScroll<'a, Message>> for Element<'a, Message> {
    fn from(page: PageScroll<'a, Message>) -> Self {
        Element::new(page)
    }
}
