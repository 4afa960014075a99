// SPDX-License-Identifier: MPL-2.0
//! Empty state view displayed when no site is opened.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    OpenSiteRequested,
}

/// Renders the empty state with a button that opens a folder picker.
/// `error_key` is shown when a previous attempt failed.
pub fn view<'a>(i18n: &'a I18n, error_key: Option<&'a str>) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("empty-state-title"))
        .size(typography::TITLE_LG)
        .color(palette::GRAY_400);

    let subtitle = Text::new(i18n.tr("empty-state-subtitle"))
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let open_button = button(Text::new(i18n.tr("empty-state-button")))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::OpenSiteRequested);

    let mut content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(subtitle)
        .push(open_button);

    if let Some(key) = error_key {
        content = content.push(
            Container::new(Text::new(i18n.tr(key)).size(typography::BODY))
                .padding(spacing::SM)
                .style(styles::container::error_banner),
        );
    }

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// Asks the user for a site folder.
pub async fn pick_site_folder() -> Option<std::path::PathBuf> {
    rfd::AsyncFileDialog::new()
        .pick_folder()
        .await
        .map(|handle| handle.path().to_path_buf())
}
