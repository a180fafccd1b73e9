// SPDX-License-Identifier: MPL-2.0
//! Structured logging setup.
//!
//! The gallery logs through `tracing` macros; this module installs the
//! `tracing-subscriber` formatter once, at the level named by the settings profile.

use crate::config::LoggingConfig;
use tracing::Level;

/// Parses a level name (`error`, `warn`, `info`, `debug`, `trace`), case-insensitively.
#[must_use]
pub fn parse_level(level: &str) -> Option<Level> {
    level.trim().parse().ok()
}

/// Installs the global subscriber.
///
/// Unknown level names fall back to `info`. Calling this twice keeps the
/// first subscriber.
pub fn init(config: &LoggingConfig) {
    let level = parse_level(&config.level).unwrap_or(Level::INFO);

    if let Err(err) = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
    {
        eprintln!("Logging already initialized: {err}");
    }
}
