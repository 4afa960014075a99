// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent `.ftl` files embedded at build time.
//!
//! # Locale resolution
//!
//! 1. `--lang` CLI flag
//! 2. `[general] language` in the config file
//! 3. Operating system locale
//! 4. `en-US`

pub mod fluent;
