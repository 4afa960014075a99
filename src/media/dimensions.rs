// SPDX-License-Identifier: MPL-2.0
//! Natural image size probing with a small LRU cache.

use crate::error::{Error, Result};
use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// Number of image sizes remembered across lightbox openings.
pub const DEFAULT_CACHE_CAPACITY: NonZeroUsize = match NonZeroUsize::new(256) {
    Some(n) => n,
    None => unreachable!(),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

/// Reads the image header to get its natural size without decoding pixels.
pub fn probe(path: &Path) -> Result<ImageSize> {
    let (width, height) = image_rs::image_dimensions(path)?;
    Ok(ImageSize { width, height })
}

/// Runs [`probe`] on the blocking thread pool.
pub async fn probe_async(path: PathBuf) -> Result<ImageSize> {
    tokio::task::spawn_blocking(move || probe(&path))
        .await
        .map_err(|err| Error::Image(format!("dimension probe task failed: {err}")))?
}

/// Sizes of images seen recently, keyed by path.
#[derive(Debug)]
pub struct DimensionCache {
    entries: LruCache<PathBuf, ImageSize>,
}

impl Default for DimensionCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl DimensionCache {
    #[must_use]
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            entries: LruCache::new(capacity),
        }
    }

    pub fn get(&mut self, path: &Path) -> Option<ImageSize> {
        self.entries.get(path).copied()
    }

    pub fn insert(&mut self, path: PathBuf, size: ImageSize) {
        self.entries.put(path, size);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
