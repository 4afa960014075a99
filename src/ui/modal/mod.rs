// SPDX-License-Identifier: MPL-2.0
//! Image lightbox with wheel zoom and drag panning.
//!
//! [`ViewerState`] holds the state machine; [`Viewer`] adapts it to Iced
//! messages, runs the one-shot dimension probe and renders the overlay.

pub mod fixture;
pub mod state;
mod view;

pub use fixture::{MissingParts, ModalFixture};
pub use state::{
    ClickTarget, CursorHint, ImageClick, LoadTicket, OpenOutcome, Transform, ViewerState,
};

use crate::config::ViewerSettings;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::{dimensions, DimensionCache, ImageSize};
use crate::ui::state::WheelDirection;
use iced::{Element, Point, Task};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Message {
    Open {
        source: PathBuf,
        caption: Option<String>,
    },
    Close,
    Wheel(WheelDirection),
    PointerMoved(Point),
    /// Left button pressed over the image.
    ImagePressed,
    /// Left button released anywhere.
    PointerReleased,
    /// Left button released over the image.
    ImageClicked,
    BackdropClicked(ClickTarget),
    Escape,
    ViewportResized(f32),
    DimensionsLoaded {
        ticket: LoadTicket,
        source: PathBuf,
        result: Result<ImageSize, Error>,
    },
}

/// One lightbox instance and its presentation.
#[derive(Debug, Clone)]
pub struct Viewer {
    state: ViewerState,
    fixture: ModalFixture,
    /// Last window cursor position, unknown until the first move.
    cursor: Option<Point>,
}

impl Viewer {
    #[must_use]
    pub fn new(fixture: ModalFixture, settings: ViewerSettings, viewport_width: f32) -> Self {
        Self {
            state: ViewerState::new(settings, viewport_width),
            fixture,
            cursor: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    #[must_use]
    pub fn fixture(&self) -> &ModalFixture {
        &self.fixture
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn update(&mut self, message: Message, cache: &mut DimensionCache) -> Task<Message> {
        match message {
            Message::Open { source, caption } => {
                let known = cache.get(&source);
                tracing::debug!(source = %source.display(), cached = known.is_some(), "opening lightbox");
                match self.state.open(source.clone(), caption, known) {
                    OpenOutcome::Ready => Task::none(),
                    OpenOutcome::NeedsProbe(ticket) => Task::perform(
                        dimensions::probe_async(source.clone()),
                        move |result| Message::DimensionsLoaded {
                            ticket,
                            source: source.clone(),
                            result,
                        },
                    ),
                }
            }
            Message::Close => {
                self.state.close();
                Task::none()
            }
            Message::Wheel(direction) => {
                if self.state.on_wheel(direction) {
                    tracing::trace!(transform = %self.state.transform(), "zoom changed");
                }
                Task::none()
            }
            Message::PointerMoved(position) => {
                self.cursor = Some(position);
                self.state.on_pointer_move(position);
                Task::none()
            }
            Message::ImagePressed => {
                match self.cursor {
                    Some(position) => {
                        self.state.on_pointer_down(position);
                    }
                    None => tracing::trace!("press before any cursor position, drag not started"),
                }
                Task::none()
            }
            Message::PointerReleased => {
                self.state.on_pointer_up();
                Task::none()
            }
            Message::ImageClicked => {
                if self.state.on_image_click() == ImageClick::Reset {
                    tracing::trace!("lightbox zoom reset by click");
                }
                Task::none()
            }
            Message::BackdropClicked(target) => {
                self.state.on_backdrop_click(target);
                Task::none()
            }
            Message::Escape => {
                self.state.on_key_escape();
                Task::none()
            }
            Message::ViewportResized(width) => {
                self.state.on_viewport_resize(width);
                Task::none()
            }
            Message::DimensionsLoaded {
                ticket,
                source,
                result,
            } => {
                match result {
                    Ok(size) => {
                        cache.insert(source, size);
                        self.state.dimensions_loaded(ticket, size);
                    }
                    Err(err) => {
                        // The image still shows, only the width bound is missing.
                        tracing::warn!(source = %source.display(), %err, "could not read image size");
                    }
                }
                Task::none()
            }
        }
    }

    /// The overlay, or `None` while closed.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Option<Element<'a, Message>> {
        self.state
            .is_open()
            .then(|| view::overlay(&self.state, &self.fixture, i18n))
    }
}
