// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Endpoints**: Remote data sources used when nothing else is configured
//! - **Gallery**: Carousel thumbnail strip

// ==========================================================================
// Endpoint Defaults
// ==========================================================================

/// Default gallery endpoint (JSON array of `{ url }`).
pub const DEFAULT_GALLERY_URL: &str = "http://localhost:5000/api/products/images";

/// Default subscription endpoint (JSON product description).
pub const DEFAULT_SUBSCRIPTION_URL: &str = "http://localhost:5000/api/products/subscription";

/// Environment variable overriding the gallery endpoint.
pub const ENV_GALLERY_URL: &str = "SHOPFRONT_GALLERY_URL";

/// Environment variable overriding the subscription endpoint.
pub const ENV_SUBSCRIPTION_URL: &str = "SHOPFRONT_SUBSCRIPTION_URL";

// ==========================================================================
// Gallery Defaults
// ==========================================================================

pub use crate::domain::catalog::newtypes::thumbnail_bounds::{
    DEFAULT as DEFAULT_THUMBNAIL_LIMIT, MAX as MAX_THUMBNAIL_LIMIT,
    MIN as MIN_THUMBNAIL_LIMIT,
};
