// SPDX-License-Identifier: MPL-2.0
//! Lightbox markup validation.
//!
//! A section's `modal` table must declare all five parts. Incomplete markup
//! disables the lightbox for that section only.

use crate::site::{Filter, ModalMarkup};
use crate::ui::design_tokens::{opacity, spacing, typography};
use std::fmt;

pub const DEFAULT_CLOSE_LABEL: &str = "×";

/// Resolved lightbox presentation for one section.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalFixture {
    pub backdrop_opacity: f32,
    pub content_padding: f32,
    pub filter: Filter,
    pub caption_size: f32,
    pub close_label: String,
}

/// The parts absent from a section's markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingParts(pub Vec<&'static str>);

impl fmt::Display for MissingParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}

impl ModalFixture {
    pub fn resolve(markup: &ModalMarkup) -> Result<Self, MissingParts> {
        let missing: Vec<&'static str> = [
            ("backdrop", markup.backdrop.is_none()),
            ("content", markup.content.is_none()),
            ("image", markup.image.is_none()),
            ("caption", markup.caption.is_none()),
            ("close", markup.close.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, absent)| absent.then_some(name))
        .collect();

        let (Some(backdrop), Some(content), Some(image), Some(caption), Some(close)) = (
            &markup.backdrop,
            &markup.content,
            &markup.image,
            &markup.caption,
            &markup.close,
        ) else {
            return Err(MissingParts(missing));
        };

        Ok(Self {
            backdrop_opacity: backdrop
                .opacity
                .unwrap_or(opacity::OVERLAY_STRONG)
                .clamp(0.0, 1.0),
            content_padding: content.padding.unwrap_or(spacing::MD).max(0.0),
            filter: image.filter,
            caption_size: caption.size.unwrap_or(typography::BODY).max(1.0),
            close_label: close
                .label
                .clone()
                .filter(|label| !label.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_CLOSE_LABEL.to_string()),
        })
    }

    /// Like [`ModalFixture::resolve`], logging and discarding incomplete
    /// markup.
    #[must_use]
    pub fn wire(markup: Option<&ModalMarkup>, section: &str) -> Option<Self> {
        let markup = markup?;
        match Self::resolve(markup) {
            Ok(fixture) => Some(fixture),
            Err(missing) => {
                tracing::warn!(section, %missing, "lightbox markup incomplete, viewer not wired");
                None
            }
        }
    }
}
