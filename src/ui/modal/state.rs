// SPDX-License-Identifier: MPL-2.0
//! Lightbox state machine.
//!
//! `Closed --open--> Open --close / Escape / backdrop click--> Closed`.
//! While open, zoom and pan are tracked by [`ZoomState`] and a pixel offset;
//! both are identity at the resting zoom. Everything the view needs
//! (transform, cursor, width bound) is derived from this state on demand.

use crate::config::ViewerSettings;
use crate::media::ImageSize;
use crate::ui::state::{DragState, WheelDirection, ZoomState};
use iced::{Point, Vector};
use std::fmt;
use std::path::{Path, PathBuf};

/// Identifies one `open` call. A dimension probe started by an older `open`
/// carries an older ticket and is ignored when it completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// What the caller must do after [`ViewerState::open`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// The natural size was known and the width bound is set.
    Ready,
    /// The natural size must be probed; report it with this ticket.
    NeedsProbe(LoadTicket),
}

/// Which part of the lightbox received a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Backdrop,
    Content,
    Image,
}

/// How a click on the image was interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageClick {
    /// Release at the end of a drag; consumed without effect.
    DragTail,
    /// Zoom and pan returned to identity.
    Reset,
}

/// Pointer affordance over the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorHint {
    ZoomIn,
    Grab,
    Grabbing,
}

impl CursorHint {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CursorHint::ZoomIn => "zoom-in",
            CursorHint::Grab => "grab",
            CursorHint::Grabbing => "grabbing",
        }
    }
}

/// Translate-then-scale transform applied to the image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub offset: Vector,
    pub scale: f32,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        offset: Vector::ZERO,
        scale: 1.0,
    };
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translate({}px, {}px) scale({})",
            self.offset.x, self.offset.y, self.scale
        )
    }
}

#[derive(Debug, Clone)]
pub struct ViewerState {
    settings: ViewerSettings,
    is_open: bool,
    zoom: ZoomState,
    offset: Vector,
    drag: DragState,
    current_image: Option<PathBuf>,
    current_caption: Option<String>,
    natural_size: Option<ImageSize>,
    content_max_width: Option<f32>,
    viewport_width: f32,
    ticket: u64,
}

impl ViewerState {
    #[must_use]
    pub fn new(settings: ViewerSettings, viewport_width: f32) -> Self {
        Self {
            settings,
            is_open: false,
            zoom: ZoomState::new(&settings),
            offset: Vector::ZERO,
            drag: DragState::new(settings.drag_threshold_px),
            current_image: None,
            current_caption: None,
            natural_size: None,
            content_max_width: None,
            viewport_width,
            ticket: 0,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.zoom.factor()
    }

    #[must_use]
    pub fn offset(&self) -> Vector {
        self.offset
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging
    }

    #[must_use]
    pub fn drag_moved(&self) -> bool {
        self.drag.moved
    }

    #[must_use]
    pub fn current_image(&self) -> Option<&Path> {
        self.current_image.as_deref()
    }

    #[must_use]
    pub fn current_caption(&self) -> Option<&str> {
        self.current_caption.as_deref()
    }

    #[must_use]
    pub fn natural_size(&self) -> Option<ImageSize> {
        self.natural_size
    }

    /// Width bound of the content container, `None` while unknown.
    #[must_use]
    pub fn content_max_width(&self) -> Option<f32> {
        self.content_max_width
    }

    #[must_use]
    pub fn transform(&self) -> Transform {
        Transform {
            offset: self.offset,
            scale: self.zoom.factor(),
        }
    }

    #[must_use]
    pub fn cursor(&self) -> CursorHint {
        if self.drag.is_dragging {
            CursorHint::Grabbing
        } else if self.zoom.is_at_rest() {
            CursorHint::ZoomIn
        } else {
            CursorHint::Grab
        }
    }

    /// Shows `source`. Any previous session is discarded, including a probe
    /// still in flight for it.
    pub fn open(
        &mut self,
        source: PathBuf,
        caption: Option<String>,
        known_size: Option<ImageSize>,
    ) -> OpenOutcome {
        self.reset_interaction();
        self.ticket = self.ticket.wrapping_add(1);
        self.current_image = Some(source);
        self.current_caption = caption;
        self.is_open = true;
        self.natural_size = known_size;
        self.content_max_width = None;

        if known_size.is_some() {
            self.recompute_width_bound();
            OpenOutcome::Ready
        } else {
            OpenOutcome::NeedsProbe(LoadTicket(self.ticket))
        }
    }

    pub fn close(&mut self) {
        self.is_open = false;
        self.reset_interaction();
        self.ticket = self.ticket.wrapping_add(1);
        self.content_max_width = None;
    }

    /// Applies one wheel notch. Returns `true` when the transform changed.
    pub fn on_wheel(&mut self, direction: WheelDirection) -> bool {
        if !self.is_open {
            return false;
        }
        let changed = self.zoom.apply_wheel(direction);
        if self.zoom.is_at_rest() {
            self.offset = Vector::ZERO;
            self.drag.stop();
        }
        changed
    }

    /// Starts a pan. Ignored at the resting zoom.
    pub fn on_pointer_down(&mut self, position: Point) -> bool {
        if !self.is_open || self.zoom.is_at_rest() {
            return false;
        }
        self.drag.start(position, self.offset);
        true
    }

    /// Follows the pointer while panning. Returns `true` when the offset moved.
    pub fn on_pointer_move(&mut self, position: Point) -> bool {
        match self.drag.update(position) {
            Some(offset) => {
                self.offset = offset;
                true
            }
            None => false,
        }
    }

    pub fn on_pointer_up(&mut self) -> bool {
        if !self.drag.is_dragging {
            return false;
        }
        self.drag.stop();
        true
    }

    /// A click on the image. Never propagates to the backdrop.
    pub fn on_image_click(&mut self) -> ImageClick {
        if self.drag.take_moved() {
            return ImageClick::DragTail;
        }
        self.zoom.reset();
        self.offset = Vector::ZERO;
        ImageClick::Reset
    }

    /// Closes only when the backdrop itself was clicked. Returns `true` if
    /// the lightbox closed.
    pub fn on_backdrop_click(&mut self, target: ClickTarget) -> bool {
        if !self.is_open || target != ClickTarget::Backdrop {
            return false;
        }
        self.close();
        true
    }

    pub fn on_key_escape(&mut self) -> bool {
        if !self.is_open {
            return false;
        }
        self.close();
        true
    }

    pub fn on_viewport_resize(&mut self, width: f32) {
        self.viewport_width = width;
        if self.is_open {
            self.recompute_width_bound();
        }
    }

    /// Completion of the size probe started by [`ViewerState::open`].
    /// Returns `false` when the completion is stale.
    pub fn dimensions_loaded(&mut self, ticket: LoadTicket, size: ImageSize) -> bool {
        if !self.is_open || ticket.0 != self.ticket {
            tracing::debug!(
                ticket = ticket.0,
                current = self.ticket,
                "ignoring stale image dimensions"
            );
            return false;
        }
        self.natural_size = Some(size);
        self.recompute_width_bound();
        true
    }

    fn reset_interaction(&mut self) {
        self.zoom.reset();
        self.offset = Vector::ZERO;
        self.drag.reset();
    }

    fn recompute_width_bound(&mut self) {
        self.content_max_width = self.natural_size.map(|size| {
            (size.width as f32).min(self.settings.width_ratio * self.viewport_width)
        });
    }
}
