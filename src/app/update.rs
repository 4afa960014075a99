// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{persistence, App, Message};
use crate::site::{self, PageLocation};
use crate::ui::state::WheelDirection;
use crate::ui::{empty_state, modal, page, sidebar};
use iced::Task;
use std::path::PathBuf;

impl App {
    pub(super) fn handle(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Page(message) => self.with_page(|page, cache| page.update(message, cache)),
            Message::Sidebar(message) => self.handle_sidebar(message),
            Message::EmptyState(empty_state::Message::OpenSiteRequested) => {
                Task::perform(empty_state::pick_site_folder(), Message::SiteFolderPicked)
            }
            Message::SiteFolderPicked(Some(path)) => self.open_site(path, PageLocation::home()),
            Message::SiteFolderPicked(None) => Task::none(),
            Message::PageLoaded { location, result } => {
                if self.location.as_ref() != Some(&location) {
                    tracing::debug!(page = %location, "ignoring page that is no longer requested");
                    return Task::none();
                }
                self.loading = false;
                match result {
                    Ok(loaded) => {
                        self.page_error = None;
                        self.page = Some(page::State::new(
                            loaded,
                            self.viewer_settings,
                            self.window_size.width,
                        ));
                    }
                    Err(err) => {
                        tracing::error!(page = %location, %err, "page load failed");
                        self.page = None;
                        self.page_error = Some(err);
                    }
                }
                Task::none()
            }
            Message::WindowResized(size) => {
                self.window_size = size;
                self.sidebar.set_window_width(size.width);
                self.broadcast(&modal::Message::ViewportResized(size.width))
            }
            Message::WheelScrolled(delta_y) => match WheelDirection::from_delta_y(delta_y) {
                Some(direction) if self.has_open_viewer() => {
                    self.broadcast(&modal::Message::Wheel(direction))
                }
                _ => Task::none(),
            },
            Message::CursorMoved(position) => {
                self.broadcast(&modal::Message::PointerMoved(position))
            }
            Message::LeftButtonReleased => self.broadcast(&modal::Message::PointerReleased),
            Message::EscapePressed => {
                if self.has_open_viewer() {
                    self.broadcast(&modal::Message::Escape)
                } else {
                    if self.sidebar.locks_scroll() {
                        self.sidebar.set_drawer_open(false);
                    }
                    Task::none()
                }
            }
        }
    }

    fn handle_sidebar(&mut self, message: sidebar::Message) -> Task<Message> {
        match self.sidebar.update(message) {
            sidebar::Event::None => Task::none(),
            sidebar::Event::Navigate(location) => self.navigate(location),
            sidebar::Event::ToggleTheme => {
                self.theme_mode = self.theme_mode.toggled();
                tracing::info!(theme = ?self.theme_mode, "theme changed");
                persistence::persist_theme(&mut self.config, self.theme_mode);
                Task::none()
            }
        }
    }

    /// Switches to a new site and shows `location` in it.
    pub(super) fn open_site(&mut self, root: PathBuf, location: PageLocation) -> Task<Message> {
        tracing::info!(site = %root.display(), "opening site");
        self.site_root = Some(root);
        self.page = None;
        self.navigate(location)
    }

    /// Loads the page at `location` and the sidebar for it. Results for a
    /// location superseded in the meantime are dropped.
    pub(super) fn navigate(&mut self, location: PageLocation) -> Task<Message> {
        let Some(root) = self.site_root.clone() else {
            return Task::none();
        };
        tracing::debug!(page = %location, "navigating");
        self.location = Some(location.clone());
        self.loading = true;
        self.page_error = None;

        let loc = location.clone();
        let page_task = Task::perform(site::load_page(root.clone(), location.clone()), move |result| {
            Message::PageLoaded {
                location: loc.clone(),
                result,
            }
        });
        let sidebar_task = self.sidebar.load(root, location).map(Message::Sidebar);
        Task::batch([page_task, sidebar_task])
    }

    fn broadcast(&mut self, message: &modal::Message) -> Task<Message> {
        self.with_page(|page, cache| page.broadcast(message, cache))
    }

    fn with_page(
        &mut self,
        f: impl FnOnce(&mut page::State, &mut crate::media::DimensionCache) -> Task<page::Message>,
    ) -> Task<Message> {
        match self.page.as_mut() {
            Some(page) => f(page, &mut self.dimension_cache).map(Message::Page),
            None => Task::none(),
        }
    }

    pub(super) fn has_open_viewer(&self) -> bool {
        self.page.as_ref().is_some_and(page::State::has_open_viewer)
    }
}
