// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`page`] - A site page with its thumbnail galleries
//! - [`modal`] - Image lightbox with wheel zoom and drag panning
//! - [`sidebar`] - Project links, theme toggle and the mobile drawer
//! - [`empty_state`] - Shown until a site folder is opened
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Reusable interaction state (zoom, drag)
//! - [`widgets`] - Custom Iced widgets
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark theme mode management

pub mod design_tokens;
pub mod empty_state;
pub mod modal;
pub mod page;
pub mod sidebar;
pub mod state;
pub mod styles;
pub mod theming;
pub mod widgets;
