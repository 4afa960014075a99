// SPDX-License-Identifier: MPL-2.0
//! Site sidebar: home link, project links, theme toggle and the mobile
//! drawer.
//!
//! The partial arrives asynchronously after the page. The drawer's open flag
//! is kept independently of the links, so toggling before the partial loads
//! still takes effect once it does.

use crate::config::NARROW_LAYOUT_MAX_WIDTH;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::site::{self, PageLocation, ResolvedLink, ResolvedSidebar, SidebarPartial};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, container, mouse_area, tooltip, Column, Row, Space, Text};
use iced::{Element, Length, Task};
use std::path::PathBuf;

const MENU_GLYPH: &str = "☰";

/// Contextual data needed to render the sidebar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
    pub current: Option<&'a PageLocation>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Loaded {
        location: PageLocation,
        result: Result<SidebarPartial, Error>,
    },
    ToggleDrawer,
    OverlayPressed,
    LinkPressed(PageLocation),
    ToggleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Navigate(PageLocation),
    ToggleTheme,
}

#[derive(Debug, Default)]
pub struct State {
    links: Option<ResolvedSidebar>,
    /// Page the links were (or are being) resolved for.
    location: Option<PageLocation>,
    drawer_open: bool,
    narrow: bool,
}

impl State {
    #[must_use]
    pub fn links(&self) -> Option<&ResolvedSidebar> {
        self.links.as_ref()
    }

    #[must_use]
    pub fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    #[must_use]
    pub fn is_narrow(&self) -> bool {
        self.narrow
    }

    /// Whether the page behind the sidebar must not scroll.
    #[must_use]
    pub fn locks_scroll(&self) -> bool {
        self.narrow && self.drawer_open
    }

    /// Starts loading the partial for `location`, replacing links shown for
    /// any previous page.
    pub fn load(&mut self, site_root: PathBuf, location: PageLocation) -> Task<Message> {
        self.location = Some(location.clone());
        self.links = None;
        let loc = location.clone();
        Task::perform(site::load_sidebar(site_root, location), move |result| {
            Message::Loaded {
                location: loc.clone(),
                result,
            }
        })
    }

    pub fn set_window_width(&mut self, width: f32) {
        let narrow = width <= NARROW_LAYOUT_MAX_WIDTH;
        if self.narrow && !narrow {
            self.drawer_open = false;
        }
        self.narrow = narrow;
    }

    pub fn set_drawer_open(&mut self, open: bool) {
        self.drawer_open = open;
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Loaded { location, result } => {
                if self.location.as_ref() != Some(&location) {
                    tracing::debug!(page = %location, "ignoring sidebar for a page no longer shown");
                    return Event::None;
                }
                match result {
                    Ok(partial) => {
                        self.links = Some(ResolvedSidebar::rewrite(&partial, &location));
                    }
                    Err(err) => {
                        tracing::error!(page = %location, %err, "sidebar load failed");
                    }
                }
                Event::None
            }
            Message::ToggleDrawer => {
                if self.narrow {
                    self.drawer_open = !self.drawer_open;
                }
                Event::None
            }
            Message::OverlayPressed => {
                if self.narrow {
                    self.drawer_open = false;
                }
                Event::None
            }
            Message::LinkPressed(target) => {
                if self.narrow {
                    self.drawer_open = false;
                }
                Event::Navigate(target)
            }
            Message::ToggleTheme => Event::ToggleTheme,
        }
    }
}

/// The sidebar panel: links and the theme toggle.
pub fn view_panel<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::XS).padding(spacing::MD);

    if let Some(links) = &state.links {
        let current = ctx.current;
        column = column
            .push(link_button(&links.home, current, typography::TITLE_SM))
            .push(Space::new().height(Length::Fixed(spacing::SM)));
        for link in &links.projects {
            column = column.push(link_button(link, current, typography::BODY));
        }
    }

    column = column
        .push(Space::new().height(Length::Fill))
        .push(theme_toggle(ctx));

    container(column.height(Length::Fill))
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .style(styles::container::sidebar)
        .into()
}

/// Top bar of the narrow layout.
pub fn view_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let menu = tooltip(
        button(Text::new(MENU_GLYPH).size(typography::TITLE_SM))
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .style(styles::button::icon)
            .on_press(Message::ToggleDrawer),
        Text::new(ctx.i18n.tr("menu-toggle")),
        tooltip::Position::Bottom,
    );
    Row::new()
        .padding(spacing::XS)
        .spacing(spacing::XS)
        .push(menu)
        .push(Space::new().width(Length::Fill))
        .push(theme_toggle(ctx))
        .into()
}

/// Dimmed layer behind the open drawer; pressing it closes the drawer.
pub fn view_drawer_overlay<'a>() -> Element<'a, Message> {
    mouse_area(
        container(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::drawer_overlay),
    )
    .on_press(Message::OverlayPressed)
    .into()
}

fn link_button<'a>(
    link: &'a ResolvedLink,
    current: Option<&PageLocation>,
    size: f32,
) -> Element<'a, Message> {
    let active = current.is_some_and(|current| ResolvedSidebar::is_active(link, current));
    button(Text::new(link.label.as_str()).size(size))
        .width(Length::Fill)
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::nav_link(active))
        .on_press(Message::LinkPressed(link.target.clone()))
        .into()
}

fn theme_toggle<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let label = ctx.i18n.tr(ctx.theme_mode.toggle_tooltip_key());
    tooltip(
        button(Text::new(ctx.theme_mode.toggle_glyph()).size(typography::TITLE_SM))
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .style(styles::button::icon)
            .on_press(Message::ToggleTheme),
        Text::new(label),
        tooltip::Position::Top,
    )
    .into()
}
