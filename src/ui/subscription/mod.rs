// SPDX-License-Identifier: MPL-2.0
//! Purchase card: plan radios, flavor pickers and the add-to-cart dialog.

pub mod component;
pub mod format;
pub mod selection;
mod view;

pub use component::{Card, Message, State, ViewContext};
pub use selection::{Confirmation, Selection};
