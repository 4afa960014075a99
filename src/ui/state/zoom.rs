// SPDX-License-Identifier: MPL-2.0
//! Zoom state management
//!
//! Multiplicative wheel zoom clamped between a minimum (the resting
//! magnification) and a maximum.

use crate::config::{ViewerSettings, WheelPolarity};

/// Values closer than this to the minimum are treated as the minimum, so
/// accumulated rounding from repeated ×/÷ steps cannot strand the image a
/// hair above rest.
const REST_SNAP_EPSILON: f32 = 1e-4;

/// Direction of a wheel notch relative to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDirection {
    /// Scrolled away from the user ("up").
    Away,
    /// Scrolled toward the user ("down").
    Toward,
}

impl WheelDirection {
    /// Classifies an Iced wheel delta. Positive `y` is away from the user.
    /// Returns `None` for a purely horizontal scroll.
    #[must_use]
    pub fn from_delta_y(delta_y: f32) -> Option<Self> {
        if delta_y > 0.0 {
            Some(WheelDirection::Away)
        } else if delta_y < 0.0 {
            Some(WheelDirection::Toward)
        } else {
            None
        }
    }

    fn zooms_in(self, polarity: WheelPolarity) -> bool {
        match (self, polarity) {
            (WheelDirection::Away, WheelPolarity::Natural)
            | (WheelDirection::Toward, WheelPolarity::Inverted) => true,
            (WheelDirection::Toward, WheelPolarity::Natural)
            | (WheelDirection::Away, WheelPolarity::Inverted) => false,
        }
    }
}

/// Current magnification plus the rules for changing it.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomState {
    factor: f32,
    min: f32,
    max: f32,
    step: f32,
    polarity: WheelPolarity,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self::new(&ViewerSettings::default())
    }
}

impl ZoomState {
    #[must_use]
    pub fn new(settings: &ViewerSettings) -> Self {
        Self {
            factor: settings.min_zoom,
            min: settings.min_zoom,
            max: settings.max_zoom.max(settings.min_zoom),
            step: settings.step_factor(),
            polarity: settings.wheel_polarity,
        }
    }

    /// Current magnification.
    #[must_use]
    pub fn factor(&self) -> f32 {
        self.factor
    }

    /// Whether the image is at its resting magnification.
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.factor == self.min
    }

    /// Returns to the resting magnification.
    pub fn reset(&mut self) {
        self.factor = self.min;
    }

    /// Applies one wheel notch. Returns `true` if the factor changed.
    pub fn apply_wheel(&mut self, direction: WheelDirection) -> bool {
        let previous = self.factor;
        let next = if direction.zooms_in(self.polarity) {
            self.factor * self.step
        } else {
            self.factor / self.step
        };
        self.factor = self.clamp(next);
        self.factor != previous
    }

    fn clamp(&self, value: f32) -> f32 {
        let clamped = value.clamp(self.min, self.max);
        if clamped - self.min < REST_SNAP_EPSILON {
            self.min
        } else {
            clamped
        }
    }
}
