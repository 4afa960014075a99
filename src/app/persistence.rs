// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! Only the theme choice is written back; everything else in
//! `settings.toml` is user-edited.

use crate::config::{self, Config};
use crate::ui::theming::ThemeMode;

/// Records `mode` in `config` and writes it to disk.
///
/// Guarded during tests to keep isolation: unit tests exercise the logic by
/// calling the function directly rather than through the update loop.
pub fn persist_theme(config: &mut Config, mode: ThemeMode) {
    config.general.theme = Some(mode);

    if cfg!(test) {
        return;
    }

    if let Err(err) = config::save(config) {
        tracing::error!(%err, "failed to save theme preference");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persist_theme_records_mode() {
        let mut config = Config::default();
        persist_theme(&mut config, ThemeMode::Light);
        assert_eq!(config.general.theme, Some(ThemeMode::Light));
    }
}
