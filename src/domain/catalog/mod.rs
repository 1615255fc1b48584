// SPDX-License-Identifier: MPL-2.0
//! Catalog domain types: gallery images, purchase plans and flavors.
//!
//! These are plain data records as delivered by the remote endpoints, plus the
//! lookups the presentation layer needs. Decoding is lenient: every field falls
//! back to its default when absent from the payload.

pub mod newtypes;
pub mod types;

pub use newtypes::{FlavorId, PlanId, ThumbnailLimit};
pub use types::{Flavor, ImageRecord, Plan, ProductData};
