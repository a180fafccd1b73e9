// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components.
//!
//! # Components
//!
//! - [`error_display`] - Consistent error presentation with severity levels
//!   and i18n-provided text

pub mod error_display;
