// SPDX-License-Identifier: MPL-2.0
//! Light/dark theme selection and the theme toggle button.
//!
//! The saved choice wins; without one the system preference is used.

use iced::Theme;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    /// Resolves the startup theme from the saved choice, falling back to the
    /// system preference. Detection failures resolve to dark.
    #[must_use]
    pub fn resolve(saved: Option<ThemeMode>) -> Self {
        saved.unwrap_or_else(Self::from_system)
    }

    #[must_use]
    pub fn from_system() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => ThemeMode::Light,
            Ok(_) => ThemeMode::Dark,
            Err(err) => {
                tracing::debug!(?err, "system theme detection failed");
                ThemeMode::Dark
            }
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    /// Glyph shown on the toggle button. It depicts the mode the button
    /// switches to.
    #[must_use]
    pub fn toggle_glyph(self) -> &'static str {
        match self {
            ThemeMode::Dark => "☼",
            ThemeMode::Light => "◑",
        }
    }

    /// i18n key of the toggle button tooltip.
    #[must_use]
    pub fn toggle_tooltip_key(self) -> &'static str {
        match self {
            ThemeMode::Dark => "theme-toggle-to-light",
            ThemeMode::Light => "theme-toggle-to-dark",
        }
    }

    #[must_use]
    pub fn iced_theme(self) -> Theme {
        match self {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
        }
    }
}
