// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Zoom**: Lightbox magnification bounds and wheel step
//! - **Drag**: Click-versus-drag discrimination
//! - **Layout**: Lightbox width bound and narrow-window breakpoint

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Magnification at rest. The lightbox never zooms out below this.
pub const MIN_ZOOM: f32 = 1.0;

/// Largest magnification reachable with the wheel.
pub const MAX_ZOOM: f32 = 3.0;

/// Relative zoom change per wheel notch (0.15 = ×1.15 / ÷1.15).
pub const DEFAULT_ZOOM_STEP: f32 = 0.15;

/// Smallest accepted zoom step.
pub const MIN_ZOOM_STEP: f32 = 0.01;

/// Largest accepted zoom step.
pub const MAX_ZOOM_STEP: f32 = 1.0;

/// Upper limit accepted for a configured `max_zoom`.
pub const MAX_ZOOM_CEILING: f32 = 10.0;

// ==========================================================================
// Drag Defaults
// ==========================================================================

/// Pointer displacement (pixels) above which a press-release pair is a drag.
pub const DEFAULT_DRAG_THRESHOLD_PX: f32 = 5.0;

/// Largest accepted drag threshold.
pub const MAX_DRAG_THRESHOLD_PX: f32 = 50.0;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Fraction of the window width the lightbox content may occupy.
pub const DEFAULT_VIEWPORT_WIDTH_RATIO: f32 = 0.9;

/// Smallest accepted width ratio.
pub const MIN_VIEWPORT_WIDTH_RATIO: f32 = 0.1;

/// Windows this wide or narrower use the drawer sidebar.
pub const NARROW_LAYOUT_MAX_WIDTH: f32 = 1024.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_ZOOM > 0.0);
    assert!(MAX_ZOOM > MIN_ZOOM);
    assert!(MAX_ZOOM_CEILING >= MAX_ZOOM);
    assert!(MIN_ZOOM_STEP > 0.0);
    assert!(MAX_ZOOM_STEP > MIN_ZOOM_STEP);
    assert!(DEFAULT_ZOOM_STEP >= MIN_ZOOM_STEP);
    assert!(DEFAULT_ZOOM_STEP <= MAX_ZOOM_STEP);

    assert!(DEFAULT_DRAG_THRESHOLD_PX >= 0.0);
    assert!(DEFAULT_DRAG_THRESHOLD_PX <= MAX_DRAG_THRESHOLD_PX);

    assert!(DEFAULT_VIEWPORT_WIDTH_RATIO > MIN_VIEWPORT_WIDTH_RATIO);
    assert!(DEFAULT_VIEWPORT_WIDTH_RATIO <= 1.0);
    assert!(NARROW_LAYOUT_MAX_WIDTH > 0.0);
};
