// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Wide windows show the sidebar beside the page. At or below the narrow
//! breakpoint the sidebar becomes a drawer opened from a top bar. The open
//! lightbox is stacked over everything.

use super::{App, Message};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::widgets::page_scroll;
use crate::ui::{empty_state, sidebar, styles};
use iced::widget::{container, stack, Column, Row, Stack, Text};
use iced::{alignment, Element, Length};

impl App {
    pub(super) fn render(&self) -> Element<'_, Message> {
        if self.site_root.is_none() {
            return empty_state::view(&self.i18n, self.open_error).map(Message::EmptyState);
        }

        let ctx = sidebar::ViewContext {
            i18n: &self.i18n,
            theme_mode: self.theme_mode,
            current: self.location.as_ref(),
        };

        let frozen = self.has_open_viewer() || self.sidebar.locks_scroll();
        let content = page_scroll(self.view_content(), frozen);

        let layout: Element<'_, Message> = if self.sidebar.is_narrow() {
            let column = Column::new()
                .push(sidebar::view_top_bar(&ctx).map(Message::Sidebar))
                .push(content);
            let mut layers = Stack::new()
                .width(Length::Fill)
                .height(Length::Fill)
                .push(column);
            if self.sidebar.is_drawer_open() {
                layers = layers
                    .push(sidebar::view_drawer_overlay().map(Message::Sidebar))
                    .push(sidebar::view_panel(&self.sidebar, &ctx).map(Message::Sidebar));
            }
            layers.into()
        } else {
            Row::new()
                .push(sidebar::view_panel(&self.sidebar, &ctx).map(Message::Sidebar))
                .push(content)
                .into()
        };

        match self.page.as_ref().and_then(|page| page.overlay(&self.i18n)) {
            Some(overlay) => stack![layout, overlay.map(Message::Page)].into(),
            None => layout,
        }
    }

    fn view_content(&self) -> Element<'_, Message> {
        if let Some(err) = &self.page_error {
            return centered(
                container(Text::new(self.i18n.tr(err.i18n_key())).size(typography::BODY))
                    .padding(spacing::SM)
                    .style(styles::container::error_banner)
                    .into(),
            );
        }
        match &self.page {
            Some(page) if !self.loading => page.view(&self.i18n).map(Message::Page),
            _ => centered(Text::new(self.i18n.tr("page-loading")).into()),
        }
    }
}

fn centered(content: Element<'_, Message>) -> Element<'_, Message> {
    container(content)
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .into()
}
