// SPDX-License-Identifier: MPL-2.0
//! Page locations and sidebar link rewriting.
//!
//! A site is laid out like a static website:
//!
//! ```text
//! index.toml
//! pages/partials/sidebar.toml
//! pages/projects/<file>.toml
//! ```
//!
//! The sidebar partial is shared by every page, so its links are rewritten
//! relative to the page that embeds it: project pages reach the root through
//! `../../`, the home page reaches it directly.

use super::{SidebarLink, SidebarPartial};
use std::fmt;
use std::path::{Path, PathBuf};

pub const HOME_PAGE: &str = "index.toml";
pub const PROJECTS_DIR: &str = "pages/projects/";
pub const PARTIALS_DIR: &str = "pages/partials/";
pub const SIDEBAR_FILE: &str = "sidebar.toml";

/// A page inside the site, as a `/`-separated path relative to the site root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageLocation(String);

impl PageLocation {
    #[must_use]
    pub fn home() -> Self {
        Self(HOME_PAGE.to_string())
    }

    /// A project page by file name (`"alpha.toml"`).
    #[must_use]
    pub fn project(file: &str) -> Self {
        Self(format!("{PROJECTS_DIR}{file}"))
    }

    /// Builds a location from a root-relative path, normalizing `.` and `..`.
    /// Returns `None` when the path escapes the site root or is empty.
    #[must_use]
    pub fn parse(relative: &str) -> Option<Self> {
        normalize(relative.split('/')).map(Self)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_project_page(&self) -> bool {
        self.0.contains(PROJECTS_DIR)
    }

    /// Directory part of the location, without trailing slash (`""` at root).
    #[must_use]
    pub fn dir(&self) -> &str {
        self.0.rsplit_once('/').map_or("", |(dir, _)| dir)
    }

    /// Last path segment.
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    /// Prefix leading from this page back to the site root.
    #[must_use]
    pub fn root_prefix(&self) -> &'static str {
        if self.is_project_page() {
            "../../"
        } else {
            ""
        }
    }

    /// Href of the sidebar partial, relative to this page.
    #[must_use]
    pub fn sidebar_partial_href(&self) -> String {
        if self.is_project_page() {
            format!("../partials/{SIDEBAR_FILE}")
        } else {
            format!("{PARTIALS_DIR}{SIDEBAR_FILE}")
        }
    }

    /// Resolves an href written relative to this page.
    #[must_use]
    pub fn resolve(&self, href: &str) -> Option<PageLocation> {
        let dir = self.dir();
        let segments = dir
            .split('/')
            .filter(|s| !s.is_empty())
            .chain(href.split('/'));
        normalize(segments).map(PageLocation)
    }

    /// Absolute path of this page under `site_root`.
    #[must_use]
    pub fn to_path(&self, site_root: &Path) -> PathBuf {
        self.0
            .split('/')
            .fold(site_root.to_path_buf(), |path, segment| path.join(segment))
    }
}

impl fmt::Display for PageLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn normalize<'a>(segments: impl Iterator<Item = &'a str>) -> Option<String> {
    let mut stack: Vec<&str> = Vec::new();
    for segment in segments {
        match segment {
            "" | "." => {}
            ".." => {
                stack.pop()?;
            }
            other => stack.push(other),
        }
    }
    if stack.is_empty() {
        None
    } else {
        Some(stack.join("/"))
    }
}

/// A sidebar link after rewriting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLink {
    pub label: String,
    /// Href relative to the page the sidebar is shown on.
    pub href: String,
    pub target: PageLocation,
}

/// The sidebar partial with every link rewritten for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSidebar {
    pub home: ResolvedLink,
    pub projects: Vec<ResolvedLink>,
}

impl ResolvedSidebar {
    /// Rewrites the partial's links relative to `current`.
    ///
    /// Project links use the explicit `file`, falling back to the last
    /// segment of `page` then `href`. Links that yield no file are dropped.
    #[must_use]
    pub fn rewrite(partial: &SidebarPartial, current: &PageLocation) -> Self {
        let root = current.root_prefix();

        let home_href = format!("{root}{HOME_PAGE}");
        let home = ResolvedLink {
            label: partial.title.clone(),
            target: current
                .resolve(&home_href)
                .unwrap_or_else(PageLocation::home),
            href: home_href,
        };

        let projects = partial
            .links
            .iter()
            .filter_map(|link| {
                let Some(file) = link_file(link) else {
                    tracing::debug!(label = %link.label, "dropping sidebar link without a file");
                    return None;
                };
                let href = format!("{root}{PROJECTS_DIR}{file}");
                let target = current.resolve(&href)?;
                Some(ResolvedLink {
                    label: link.label.clone(),
                    href,
                    target,
                })
            })
            .collect();

        Self { home, projects }
    }

    /// Whether `link` points at the page currently shown.
    #[must_use]
    pub fn is_active(link: &ResolvedLink, current: &PageLocation) -> bool {
        link.target == *current
    }
}

/// File name a sidebar link points at.
#[must_use]
pub fn link_file(link: &SidebarLink) -> Option<&str> {
    if let Some(file) = link.file.as_deref().filter(|f| !f.is_empty()) {
        return Some(file);
    }
    let source = link.page.as_deref().or(link.href.as_deref()).unwrap_or("");
    source.rsplit('/').next().filter(|f| !f.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(label: &str, file: Option<&str>, page: Option<&str>, href: Option<&str>) -> SidebarLink {
        SidebarLink {
            label: label.to_string(),
            file: file.map(str::to_string),
            page: page.map(str::to_string),
            href: href.map(str::to_string),
        }
    }

    fn partial() -> SidebarPartial {
        SidebarPartial {
            title: "Home".to_string(),
            links: vec![
                link("Alpha", Some("alpha.toml"), None, None),
                link("Beta", None, Some("/spa/projects/beta.toml"), None),
                link("Gamma", None, None, Some("old/gamma.toml")),
                link("Broken", None, None, Some("nowhere/")),
            ],
        }
    }

    #[test]
    fn home_and_project_locations() {
        assert!(!PageLocation::home().is_project_page());
        let alpha = PageLocation::project("alpha.toml");
        assert!(alpha.is_project_page());
        assert_eq!(alpha.as_str(), "pages/projects/alpha.toml");
        assert_eq!(alpha.dir(), "pages/projects");
        assert_eq!(alpha.file_name(), "alpha.toml");
    }

    #[test]
    fn sidebar_partial_href_depends_on_page_depth() {
        assert_eq!(
            PageLocation::home().sidebar_partial_href(),
            "pages/partials/sidebar.toml"
        );
        let project = PageLocation::project("alpha.toml");
        assert_eq!(project.sidebar_partial_href(), "../partials/sidebar.toml");
        assert_eq!(
            project.resolve(&project.sidebar_partial_href()),
            PageLocation::parse("pages/partials/sidebar.toml")
        );
    }

    #[test]
    fn resolve_rejects_escaping_root() {
        assert!(PageLocation::home().resolve("../index.toml").is_none());
        assert!(PageLocation::parse("..").is_none());
    }

    #[test]
    fn link_file_prefers_explicit_file() {
        assert_eq!(
            link_file(&link("x", Some("a.toml"), Some("b.toml"), None)),
            Some("a.toml")
        );
        assert_eq!(
            link_file(&link("x", None, Some("p/b.toml"), Some("h/c.toml"))),
            Some("b.toml")
        );
        assert_eq!(link_file(&link("x", None, None, Some("h/c.toml"))), Some("c.toml"));
        assert_eq!(link_file(&link("x", None, None, None)), None);
    }

    #[test]
    fn rewrite_from_home_page() {
        let sidebar = ResolvedSidebar::rewrite(&partial(), &PageLocation::home());

        assert_eq!(sidebar.home.href, "index.toml");
        assert_eq!(sidebar.home.target, PageLocation::home());
        let hrefs: Vec<_> = sidebar.projects.iter().map(|l| l.href.as_str()).collect();
        assert_eq!(
            hrefs,
            [
                "pages/projects/alpha.toml",
                "pages/projects/beta.toml",
                "pages/projects/gamma.toml"
            ]
        );
    }

    #[test]
    fn rewrite_from_project_page_climbs_to_root() {
        let current = PageLocation::project("beta.toml");
        let sidebar = ResolvedSidebar::rewrite(&partial(), &current);

        assert_eq!(sidebar.home.href, "../../index.toml");
        assert_eq!(sidebar.home.target, PageLocation::home());
        assert_eq!(sidebar.projects[0].href, "../../pages/projects/alpha.toml");
        assert_eq!(sidebar.projects[0].target, PageLocation::project("alpha.toml"));
    }

    #[test]
    fn active_link_matches_current_page() {
        let current = PageLocation::project("beta.toml");
        let sidebar = ResolvedSidebar::rewrite(&partial(), &current);

        let active: Vec<_> = sidebar
            .projects
            .iter()
            .filter(|l| ResolvedSidebar::is_active(l, &current))
            .map(|l| l.label.as_str())
            .collect();
        assert_eq!(active, ["Beta"]);
        assert!(!ResolvedSidebar::is_active(&sidebar.home, &current));
    }

    #[test]
    fn to_path_joins_segments() {
        let root = Path::new("/site");
        assert_eq!(
            PageLocation::project("a.toml").to_path(root),
            Path::new("/site/pages/projects/a.toml")
        );
    }
}
