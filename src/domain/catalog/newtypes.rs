// SPDX-License-Identifier: MPL-2.0
//! Catalog newtypes.
//!
//! Identifiers are opaque strings chosen by the backend; wrapping them keeps
//! plan ids and flavor ids from being mixed up at call sites.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// PlanId
// =============================================================================

/// Identifier of a purchase plan.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanId(String);

impl PlanId {
    /// Id of the single-flavor plan. Selecting it clears the second flavor.
    pub const SINGLE: &'static str = "single";
    /// Id of the double-flavor plan. Only this plan shows a second flavor.
    pub const DOUBLE: &'static str = "double";

    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn single() -> Self {
        Self::new(Self::SINGLE)
    }

    #[must_use]
    pub fn double() -> Self {
        Self::new(Self::DOUBLE)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_single(&self) -> bool {
        self.0 == Self::SINGLE
    }

    #[must_use]
    pub fn is_double(&self) -> bool {
        self.0 == Self::DOUBLE
    }

    /// Empty ids count as "no plan" when seeding defaults.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlanId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

// =============================================================================
// FlavorId
// =============================================================================

/// Identifier of a flavor option.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlavorId(String);

impl FlavorId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Empty ids count as "no flavor" when seeding defaults.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FlavorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FlavorId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

// =============================================================================
// ThumbnailLimit
// =============================================================================

/// Thumbnail limit bounds.
pub mod thumbnail_bounds {
    /// Minimum number of thumbnails shown under the carousel.
    pub const MIN: usize = 1;
    /// Maximum number of thumbnails shown under the carousel.
    pub const MAX: usize = 32;
    /// Default thumbnail count (two rows of four).
    pub const DEFAULT: usize = 8;
}

/// Number of thumbnails shown in the gallery strip, always within bounds.
///
/// Dot indicators cover every image; only the thumbnail strip is capped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThumbnailLimit(usize);

impl ThumbnailLimit {
    /// Creates a new limit, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(thumbnail_bounds::MIN, thumbnail_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for ThumbnailLimit {
    fn default() -> Self {
        Self(thumbnail_bounds::DEFAULT)
    }
}
