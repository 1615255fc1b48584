// SPDX-License-Identifier: MPL-2.0
//! Domain layer - product data and value objects.
//!
//! This module contains pure domain types and lookups. Apart from `serde`
//! derives for decoding it has no dependencies on external crates, so it can
//! be tested without any UI or network.
//!
//! # Modules
//!
//! - [`catalog`]: Product catalog records ([`ImageRecord`](catalog::ImageRecord),
//!   [`ProductData`](catalog::ProductData), [`Plan`](catalog::Plan),
//!   [`Flavor`](catalog::Flavor)) and identifiers ([`PlanId`](catalog::PlanId),
//!   [`FlavorId`](catalog::FlavorId))

pub mod catalog;
