// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module wraps external I/O so the UI components only deal with
//! domain types and `Result`s.
//!
//! # Available Adapters
//!
//! - [`http`]: one-shot JSON and image downloads via `reqwest`

pub mod http;

pub use http::{fetch_bytes, fetch_json, Endpoint};
