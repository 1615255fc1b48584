// SPDX-License-Identifier: MPL-2.0
//! Product image carousel with dots and a thumbnail strip.

pub mod carousel;
pub mod component;

pub use carousel::Carousel;
pub use component::{Message, State, ViewContext};
