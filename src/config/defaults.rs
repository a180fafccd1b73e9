// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Window**: Initial and minimum window size
//! - **Logging**: Default log level

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width (portrait layout, like a phone gallery).
pub const DEFAULT_WINDOW_WIDTH: f32 = 420.0;

/// Default window height.
pub const DEFAULT_WINDOW_HEIGHT: f32 = 780.0;

/// Minimum window width that still fits both navigation controls.
pub const MIN_WINDOW_WIDTH: f32 = 360.0;

/// Minimum window height that still fits the image and description cards.
pub const MIN_WINDOW_HEIGHT: f32 = 640.0;

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Default log level for the `tracing` subscriber.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_WINDOW_WIDTH > 0.0);
    assert!(MIN_WINDOW_HEIGHT > 0.0);
    assert!(DEFAULT_WINDOW_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(DEFAULT_WINDOW_HEIGHT >= MIN_WINDOW_HEIGHT);
};
