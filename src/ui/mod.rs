// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! The single gallery screen follows the Elm-style "state down, messages up"
//! pattern.
//!
//! - [`gallery`] - Artwork frame, description card and Previous/Next controls
//! - [`components`] - Reusable UI components (error display)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod components;
pub mod design_tokens;
pub mod gallery;
pub mod styles;
pub mod theming;
