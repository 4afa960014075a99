// SPDX-License-Identifier: MPL-2.0
//! Reusable interaction state for the lightbox: wheel zoom and drag panning.

pub mod drag;
pub mod zoom;

pub use drag::DragState;
pub use zoom::{WheelDirection, ZoomState};
