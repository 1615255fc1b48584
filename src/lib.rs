// SPDX-License-Identifier: MPL-2.0
//! `shopfront` is a product page built with the Iced GUI framework.
//!
//! It shows an image carousel next to a subscription purchase card, both
//! filled from remote JSON endpoints, with Fluent localization and persisted
//! user preferences.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
