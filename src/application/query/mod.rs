// SPDX-License-Identifier: MPL-2.0
//! Query services (read-side).
//!
//! These services do not own state; they compute answers from the values
//! they are given.
//!
//! # Available Services
//!
//! - [`navigation`]: Bounds-checked stepping through the catalog

pub mod navigation;

// Re-export main types
pub use navigation::{Direction, NavigationInfo};
