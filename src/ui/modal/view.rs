// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay rendering.
//!
//! Layers, outermost first: backdrop, content frame, image. Each layer
//! reports its own clicks so a click on the content never reaches the
//! backdrop.

use super::{ClickTarget, CursorHint, Message, ModalFixture, ViewerState};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use crate::ui::widgets::TransformedImage;
use iced::widget::{button, container, image, mouse_area, opaque, tooltip, Column, Row, Space, Text};
use iced::{alignment, mouse, Element, Length};

pub(super) fn overlay<'a>(
    state: &'a ViewerState,
    fixture: &'a ModalFixture,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let close = tooltip(
        button(Text::new(fixture.close_label.as_str()))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::button::close)
            .on_press(Message::Close),
        Text::new(i18n.tr("modal-close")),
        tooltip::Position::Left,
    );
    let close_row = Row::new()
        .push(Space::new().width(Length::Fill))
        .push(close);

    let image_layer = state.current_image().map(|source| {
        let picture = TransformedImage::new(
            image::Handle::from_path(source),
            state.natural_size(),
            state.transform(),
        )
        .filter(fixture.filter);
        mouse_area(picture)
            .on_press(Message::ImagePressed)
            .on_release(Message::ImageClicked)
            .interaction(interaction(state.cursor()))
    });

    let mut body = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(close_row);
    if let Some(image_layer) = image_layer {
        body = body.push(image_layer);
    }
    if let Some(caption) = state.current_caption() {
        body = body.push(Text::new(caption).size(fixture.caption_size));
    }

    let mut frame = container(body)
        .padding(fixture.content_padding)
        .style(styles::container::lightbox_content);
    if let Some(max_width) = state.content_max_width() {
        frame = frame.max_width(max_width + 2.0 * fixture.content_padding);
    }
    let content =
        mouse_area(frame).on_press(Message::BackdropClicked(ClickTarget::Content));

    let backdrop = container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::backdrop(fixture.backdrop_opacity));

    opaque(mouse_area(backdrop).on_press(Message::BackdropClicked(ClickTarget::Backdrop)))
}

fn interaction(hint: CursorHint) -> mouse::Interaction {
    match hint {
        CursorHint::ZoomIn => mouse::Interaction::ZoomIn,
        CursorHint::Grab => mouse::Interaction::Grab,
        CursorHint::Grabbing => mouse::Interaction::Grabbing,
    }
}
