// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page, sidebar and
//! lightboxes.
//!
//! The `App` struct wires together the domains (site content, localization,
//! settings) and translates messages into side effects like page loading or
//! config persistence.

mod message;
pub mod paths;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config, ViewerSettings};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::DimensionCache;
use crate::site::PageLocation;
use crate::ui::page;
use crate::ui::sidebar;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    viewer_settings: ViewerSettings,
    site_root: Option<PathBuf>,
    /// Page most recently requested; late results for other pages are dropped.
    location: Option<PageLocation>,
    page: Option<page::State>,
    page_error: Option<Error>,
    loading: bool,
    sidebar: sidebar::State,
    theme_mode: ThemeMode,
    dimension_cache: DimensionCache,
    window_size: Size,
    /// i18n key shown on the empty state after a failed open.
    open_error: Option<&'static str>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("site_root", &self.site_root)
            .field("location", &self.location)
            .field("theme_mode", &self.theme_mode)
            .field("loading", &self.loading)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires the boot function to be Fn; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let config = Config::default();
        let mut sidebar = sidebar::State::default();
        sidebar.set_window_width(WINDOW_DEFAULT_WIDTH as f32);
        Self {
            i18n: I18n::default(),
            viewer_settings: config.viewer_settings(),
            config,
            site_root: None,
            location: None,
            page: None,
            page_error: None,
            loading: false,
            sidebar,
            theme_mode: ThemeMode::Dark,
            dimension_cache: DimensionCache::default(),
            window_size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
            open_error: None,
        }
    }
}

impl App {
    /// Initializes application state and kicks off loading the start page
    /// when a site directory was given.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(key) = config_warning {
            tracing::warn!(key = %key, "using default settings");
        }

        let mut app = App {
            i18n: I18n::new(flags.lang.clone(), &config),
            viewer_settings: config.viewer_settings(),
            theme_mode: ThemeMode::resolve(config.general.theme),
            config,
            ..Self::default()
        };
        tracing::debug!(locale = %app.i18n.current_locale(), theme = ?app.theme_mode, "app initialized");

        let task = match flags.site_dir.as_deref().map(PathBuf::from) {
            Some(root) if root.is_dir() => app.open_site(root, flags.start_location()),
            Some(root) => {
                tracing::error!(site = %root.display(), "site directory not found");
                app.open_error = Some("error-io");
                Task::none()
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        match &self.page {
            Some(page) => self
                .i18n
                .tr_with_args("window-title-page", &[("page", page.title())]),
            None => self.i18n.tr("window-title"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.handle(message)
    }

    fn view(&self) -> Element<'_, Message> {
        self.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::{parse_page, LoadedPage, SidebarPartial};
    use crate::ui::{modal, sidebar};
    use std::path::Path;

    const PAGE: &str = r#"
title = "Alpha"

[[sections]]
images = [{ src = "img/a.png", caption = "A" }]
modal = { backdrop = {}, content = {}, image = {}, caption = {}, close = {} }
"#;

    fn app() -> App {
        App {
            i18n: I18n::new(Some("en-US".to_string()), &Config::default()),
            ..App::default()
        }
    }

    fn app_with_site() -> App {
        let mut app = app();
        app.site_root = Some(PathBuf::from("/site"));
        app
    }

    fn loaded(location: &PageLocation) -> LoadedPage {
        LoadedPage {
            location: location.clone(),
            path: location.to_path(Path::new("/site")),
            page: parse_page(Path::new("alpha.toml"), PAGE).expect("parse"),
        }
    }

    fn open_first_image(app: &mut App) {
        let _ = app.update(Message::Page(page::Message::Viewer {
            section: 0,
            message: modal::Message::Open {
                source: PathBuf::from("/site/pages/projects/img/a.png"),
                caption: Some("A".into()),
            },
        }));
    }

    #[test]
    fn title_shows_app_name_without_page() {
        assert_eq!(app().title(), "Folio");
    }

    #[test]
    fn navigate_without_site_is_a_no_op() {
        let mut app = app();
        let _ = app.navigate(PageLocation::home());
        assert!(app.location.is_none());
    }

    #[test]
    fn page_loaded_for_current_location_is_shown() {
        let mut app = app_with_site();
        let location = PageLocation::project("alpha.toml");
        let _ = app.navigate(location.clone());
        assert!(app.loading);

        let _ = app.update(Message::PageLoaded {
            location: location.clone(),
            result: Ok(loaded(&location)),
        });

        assert!(!app.loading);
        assert_eq!(app.title(), "Alpha · Folio");
    }

    #[test]
    fn superseded_page_result_is_dropped() {
        let mut app = app_with_site();
        let first = PageLocation::project("alpha.toml");
        let second = PageLocation::project("beta.toml");
        let _ = app.navigate(first.clone());
        let _ = app.navigate(second.clone());

        let _ = app.update(Message::PageLoaded {
            location: first.clone(),
            result: Ok(loaded(&first)),
        });

        assert!(app.page.is_none());
        assert!(app.loading);
    }

    #[test]
    fn page_error_is_kept_for_display() {
        let mut app = app_with_site();
        let location = PageLocation::home();
        let _ = app.navigate(location.clone());

        let _ = app.update(Message::PageLoaded {
            location,
            result: Err(Error::Io("missing".into())),
        });

        assert!(matches!(app.page_error, Some(Error::Io(_))));
    }

    #[test]
    fn wheel_zooms_only_with_open_viewer() {
        let mut app = app_with_site();
        let location = PageLocation::project("alpha.toml");
        let _ = app.navigate(location.clone());
        let _ = app.update(Message::PageLoaded {
            location: location.clone(),
            result: Ok(loaded(&location)),
        });

        let _ = app.update(Message::WheelScrolled(1.0));
        let zoom = |app: &App| {
            app.page
                .as_ref()
                .and_then(|page| page.viewer(0))
                .map(|viewer| viewer.state().zoom())
        };
        assert_eq!(zoom(&app), Some(1.0));

        open_first_image(&mut app);
        let _ = app.update(Message::WheelScrolled(1.0));
        assert!(zoom(&app).is_some_and(|z| z > 1.0));

        let _ = app.update(Message::EscapePressed);
        assert!(!app.has_open_viewer());
    }

    #[test]
    fn theme_toggle_flips_and_records_mode() {
        let mut app = App::default();
        let before = app.theme_mode;

        let _ = app.update(Message::Sidebar(sidebar::Message::ToggleTheme));

        assert_eq!(app.theme_mode, before.toggled());
        assert_eq!(app.config.general.theme, Some(before.toggled()));
    }

    #[test]
    fn sidebar_link_navigates() {
        let mut app = app_with_site();
        app.location = Some(PageLocation::home());
        let _ = app.update(Message::Sidebar(sidebar::Message::Loaded {
            location: PageLocation::home(),
            result: Ok(SidebarPartial {
                title: "Home".into(),
                links: Vec::new(),
            }),
        }));

        let target = PageLocation::project("beta.toml");
        let _ = app.update(Message::Sidebar(sidebar::Message::LinkPressed(target.clone())));

        assert_eq!(app.location, Some(target));
    }

    #[test]
    fn resize_to_narrow_switches_layout() {
        let mut app = App::default();
        let _ = app.update(Message::WindowResized(Size::new(800.0, 600.0)));
        assert!(app.sidebar.is_narrow());
        let _ = app.update(Message::WindowResized(Size::new(1400.0, 600.0)));
        assert!(!app.sidebar.is_narrow());
    }
}
