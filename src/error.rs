// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Errors are cloneable so they can travel inside Iced messages.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// A site page or partial could not be parsed.
    #[error("Site Error: {path}: {message}")]
    Site { path: PathBuf, message: String },

    #[error("Image Error: {0}")]
    Image(String),
}

impl Error {
    /// Returns the i18n message key used when the error is shown to the user.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::Site { .. } => "error-site",
            Error::Image(_) => "error-image",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{err}"), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn site_error_names_the_file() {
        let err = Error::Site {
            path: PathBuf::from("pages/projects/a.toml"),
            message: "missing field `title`".into(),
        };
        let text = format!("{err}");
        assert!(text.contains("a.toml"));
        assert!(text.contains("missing field"));
    }

    #[test]
    fn i18n_keys_are_distinct() {
        let keys = [
            Error::Io(String::new()).i18n_key(),
            Error::Config(String::new()).i18n_key(),
            Error::Site {
                path: PathBuf::new(),
                message: String::new(),
            }
            .i18n_key(),
            Error::Image(String::new()).i18n_key(),
        ];
        for (i, a) in keys.iter().enumerate() {
            for b in &keys[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
