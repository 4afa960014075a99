// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::site::{LoadedPage, PageLocation};
use crate::ui::{empty_state, page, sidebar};
use iced::{Point, Size};
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Page(page::Message),
    Sidebar(sidebar::Message),
    EmptyState(empty_state::Message),
    PageLoaded {
        location: PageLocation,
        result: Result<LoadedPage, Error>,
    },
    /// Result from the open folder dialog.
    SiteFolderPicked(Option<PathBuf>),
    WindowResized(Size),
    /// Vertical wheel delta, positive away from the user.
    WheelScrolled(f32),
    CursorMoved(Point),
    LeftButtonReleased,
    EscapePressed,
}

/// Runtime flags passed from `main.rs` to the application.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP47 form (e.g. `en-US`, `ko`).
    pub lang: Option<String>,
    /// Site directory to open at startup.
    pub site_dir: Option<String>,
    /// Page to show first: a project file name or a site-relative path.
    pub page: Option<String>,
    /// Optional config directory override.
    pub config_dir: Option<String>,
}

impl Flags {
    /// The first page to show.
    #[must_use]
    pub fn start_location(&self) -> PageLocation {
        match self.page.as_deref() {
            None => PageLocation::home(),
            Some(page) if page.contains('/') => PageLocation::parse(page).unwrap_or_else(|| {
                tracing::warn!(page, "start page is outside the site, showing home");
                PageLocation::home()
            }),
            Some(file) => PageLocation::project(file),
        }
    }
}
