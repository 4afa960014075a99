// SPDX-License-Identifier: MPL-2.0
//! Site content: pages, gallery sections and the sidebar partial.
//!
//! Pages are TOML files. A project page looks like:
//!
//! ```toml
//! title = "Alpha"
//! summary = "A small robot arm."
//!
//! [[sections]]
//! heading = "Build"
//! images = [
//!     { src = "img/arm.jpg", caption = "First prototype" },
//!     { src = "img/wiring.png" },
//! ]
//! modal = { backdrop = {}, content = {}, image = {}, caption = {}, close = { label = "×" } }
//! ```

pub mod links;

pub use links::{PageLocation, ResolvedLink, ResolvedSidebar};

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Page {
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// A block of text and thumbnails. Sections with a `modal` table host a
/// lightbox for their thumbnails.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Section {
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub images: Vec<Thumbnail>,
    #[serde(default)]
    pub modal: Option<ModalMarkup>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Thumbnail {
    /// Image path relative to the page file.
    pub src: String,
    #[serde(default)]
    pub caption: Option<String>,
}

/// Lightbox markup declared by a section. Each part must be present for the
/// lightbox to be wired.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct ModalMarkup {
    #[serde(default)]
    pub backdrop: Option<BackdropPart>,
    #[serde(default)]
    pub content: Option<ContentPart>,
    #[serde(default)]
    pub image: Option<ImagePart>,
    #[serde(default)]
    pub caption: Option<CaptionPart>,
    #[serde(default)]
    pub close: Option<ClosePart>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct BackdropPart {
    /// Backdrop opacity override (0.0–1.0).
    #[serde(default)]
    pub opacity: Option<f32>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct ContentPart {
    #[serde(default)]
    pub padding: Option<f32>,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    Linear,
    Nearest,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct ImagePart {
    /// Sampling used when the image is scaled. `nearest` suits pixel art.
    #[serde(default)]
    pub filter: Filter,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct CaptionPart {
    #[serde(default)]
    pub size: Option<f32>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct ClosePart {
    #[serde(default)]
    pub label: Option<String>,
}

/// The shared sidebar: a home link titled `title` and project links.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SidebarPartial {
    pub title: String,
    #[serde(default)]
    pub links: Vec<SidebarLink>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SidebarLink {
    pub label: String,
    /// Project file name. Preferred over `page` and `href`.
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub href: Option<String>,
}

/// A page together with where it was loaded from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedPage {
    pub location: PageLocation,
    pub path: PathBuf,
    pub page: Page,
}

impl LoadedPage {
    /// Absolute path of a thumbnail image, resolved against the page file.
    #[must_use]
    pub fn image_path(&self, thumbnail: &Thumbnail) -> PathBuf {
        self.path
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(&thumbnail.src)
    }
}

fn parse<T: for<'de> Deserialize<'de>>(path: &Path, content: &str) -> Result<T> {
    toml::from_str(content).map_err(|err| Error::Site {
        path: path.to_path_buf(),
        message: err.message().to_string(),
    })
}

/// Parses a page from its TOML text.
pub fn parse_page(path: &Path, content: &str) -> Result<Page> {
    parse(path, content)
}

/// Parses the sidebar partial from its TOML text.
pub fn parse_sidebar(path: &Path, content: &str) -> Result<SidebarPartial> {
    parse(path, content)
}

/// Reads and parses the page at `location`.
pub async fn load_page(site_root: PathBuf, location: PageLocation) -> Result<LoadedPage> {
    let path = location.to_path(&site_root);
    let content = tokio::fs::read_to_string(&path).await?;
    let page = parse_page(&path, &content)?;
    tracing::debug!(page = %location, sections = page.sections.len(), "page loaded");
    Ok(LoadedPage {
        location,
        path,
        page,
    })
}

/// Reads the sidebar partial, locating it relative to `current`.
pub async fn load_sidebar(site_root: PathBuf, current: PageLocation) -> Result<SidebarPartial> {
    let href = current.sidebar_partial_href();
    let location = current.resolve(&href).ok_or_else(|| Error::Site {
        path: PathBuf::from(&href),
        message: "sidebar partial is outside the site".to_string(),
    })?;
    let path = location.to_path(&site_root);
    let content = tokio::fs::read_to_string(&path).await?;
    parse_sidebar(&path, &content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::write_file;
    use tempfile::tempdir;

    const ALPHA: &str = r#"
title = "Alpha"
summary = "A small robot arm."

[[sections]]
heading = "Build"
images = [
    { src = "img/arm.jpg", caption = "First prototype" },
    { src = "img/wiring.png" },
]
modal = { backdrop = {}, content = {}, image = { filter = "nearest" }, caption = {}, close = { label = "×" } }

[[sections]]
body = "Text only."
"#;

    #[test]
    fn parse_page_reads_sections_and_modal() {
        let page = parse_page(Path::new("alpha.toml"), ALPHA).expect("parse");

        assert_eq!(page.title, "Alpha");
        assert_eq!(page.sections.len(), 2);
        let first = &page.sections[0];
        assert_eq!(first.images.len(), 2);
        assert_eq!(first.images[0].caption.as_deref(), Some("First prototype"));
        assert!(first.images[1].caption.is_none());
        let modal = first.modal.as_ref().expect("modal markup");
        assert_eq!(modal.image.as_ref().map(|i| i.filter), Some(Filter::Nearest));
        assert_eq!(
            modal.close.as_ref().and_then(|c| c.label.as_deref()),
            Some("×")
        );
        assert!(page.sections[1].modal.is_none());
    }

    #[test]
    fn parse_page_error_names_the_file() {
        let err = parse_page(Path::new("broken.toml"), "summary = 3").unwrap_err();
        match err {
            Error::Site { path, .. } => assert_eq!(path, Path::new("broken.toml")),
            other => panic!("expected Site error, got {other:?}"),
        }
    }

    #[test]
    fn image_path_is_relative_to_page_file() {
        let loaded = LoadedPage {
            location: PageLocation::project("alpha.toml"),
            path: PathBuf::from("/site/pages/projects/alpha.toml"),
            page: parse_page(Path::new("alpha.toml"), ALPHA).expect("parse"),
        };
        let thumb = &loaded.page.sections[0].images[0];
        assert_eq!(
            loaded.image_path(thumb),
            Path::new("/site/pages/projects/img/arm.jpg")
        );
    }

    #[tokio::test]
    async fn load_page_and_sidebar_from_disk() {
        let dir = tempdir().expect("temp dir");
        write_file(dir.path(), "pages/projects/alpha.toml", ALPHA);
        write_file(
            dir.path(),
            "pages/partials/sidebar.toml",
            "title = \"Home\"\n[[links]]\nlabel = \"Alpha\"\nfile = \"alpha.toml\"\n",
        );

        let location = PageLocation::project("alpha.toml");
        let loaded = load_page(dir.path().to_path_buf(), location.clone())
            .await
            .expect("load page");
        assert_eq!(loaded.page.title, "Alpha");

        let sidebar = load_sidebar(dir.path().to_path_buf(), location)
            .await
            .expect("load sidebar");
        assert_eq!(sidebar.links.len(), 1);
    }

    #[tokio::test]
    async fn missing_page_is_an_io_error() {
        let dir = tempdir().expect("temp dir");
        let result = load_page(dir.path().to_path_buf(), PageLocation::home()).await;
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
