// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles press-and-drag panning of a zoomed image, and remembers whether
//! the pointer travelled far enough for the gesture to count as a drag
//! rather than a click.

use crate::config::DEFAULT_DRAG_THRESHOLD_PX;
use iced::{Point, Vector};

/// Manages grab-and-drag state
#[derive(Debug, Clone)]
pub struct DragState {
    /// Whether a drag operation is currently active
    pub is_dragging: bool,

    /// Whether the current (or just-finished) drag moved past the threshold.
    /// Once set it stays set until explicitly taken.
    pub moved: bool,

    /// Position where the drag started
    pub start_position: Option<Point>,

    /// Pan offset when the drag started
    pub start_offset: Option<Vector>,

    threshold: f32,
}

impl Default for DragState {
    fn default() -> Self {
        Self::new(DEFAULT_DRAG_THRESHOLD_PX)
    }
}

impl DragState {
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        Self {
            is_dragging: false,
            moved: false,
            start_position: None,
            start_offset: None,
            threshold,
        }
    }

    /// Starts a drag operation
    pub fn start(&mut self, position: Point, offset: Vector) {
        self.is_dragging = true;
        self.moved = false;
        self.start_position = Some(position);
        self.start_offset = Some(offset);
    }

    /// Stops the drag operation. The `moved` flag survives so the click
    /// that follows the release can inspect it.
    pub fn stop(&mut self) {
        self.is_dragging = false;
        self.start_position = None;
        self.start_offset = None;
    }

    /// Clears everything, including `moved`.
    pub fn reset(&mut self) {
        self.stop();
        self.moved = false;
    }

    /// Returns the `moved` flag and clears it.
    pub fn take_moved(&mut self) -> bool {
        std::mem::take(&mut self.moved)
    }

    /// Computes the pan offset for the cursor position and updates `moved`.
    ///
    /// The offset follows the cursor: moving right by 10px moves the image
    /// right by 10px.
    pub fn update(&mut self, current_position: Point) -> Option<Vector> {
        if !self.is_dragging {
            return None;
        }

        let start_pos = self.start_position?;
        let start_offset = self.start_offset?;

        let delta = current_position - start_pos;
        if !self.moved && delta.x.hypot(delta.y) > self.threshold {
            self.moved = true;
        }

        Some(start_offset + delta)
    }
}
