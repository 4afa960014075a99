// SPDX-License-Identifier: MPL-2.0
//! Image metadata needed by the lightbox.
//!
//! Thumbnails and the lightbox render straight from file paths; the only
//! thing decoded ahead of time is an image's natural size, which bounds the
//! lightbox width.

pub mod dimensions;

pub use dimensions::{DimensionCache, ImageSize};
