// SPDX-License-Identifier: MPL-2.0
//! `folio` is a desktop viewer for a small portfolio site, built with the
//! Iced GUI framework.
//!
//! A site is a directory of TOML pages and images. Folio renders the pages
//! with a sidebar of projects, a light/dark theme toggle and an image
//! lightbox supporting wheel zoom and drag panning.

#![doc(html_root_url = "https://docs.rs/folio/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod site;
pub mod ui;

#[cfg(test)]
mod test_utils;
