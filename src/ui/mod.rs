// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! owns a `State`, consumes a `Message` and renders from a `ViewContext`.
//!
//! # Screens
//!
//! - [`gallery`] - Product image carousel
//! - [`subscription`] - Purchase card with plan and flavor selection
//! - [`settings`] - Language, theme and data source overview
//!
//! # Shared Infrastructure
//!
//! - [`lifecycle`] - Mount ids and abort-on-drop fetch guards
//! - [`remote_image`] - Per-component image download cache
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`navbar`] - Navigation bar

pub mod design_tokens;
pub mod gallery;
pub mod lifecycle;
pub mod navbar;
pub mod remote_image;
pub mod settings;
pub mod styles;
pub mod subscription;
pub mod theming;
