// SPDX-License-Identifier: MPL-2.0
//! Fixture helpers shared by integration tests.

use std::fs;
use std::path::Path;

/// Writes `content` to `root/relative`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("failed to create fixture directory");
    }
    fs::write(path, content).expect("failed to write fixture file");
}

/// Writes a blank PNG of the given size to `root/relative`.
pub fn write_png(root: &Path, relative: &str, width: u32, height: u32) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("failed to create fixture directory");
    }
    image_rs::RgbaImage::new(width, height)
        .save(path)
        .expect("failed to write fixture image");
}
