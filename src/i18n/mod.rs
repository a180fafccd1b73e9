// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module resolves the opaque string handles of the catalog (artwork
//! titles) and the UI labels against Fluent string tables embedded in the binary.
//!
//! # Features
//!
//! - Locale resolution from the settings profile, then the OS locale
//! - Language-only matching (`fr-CA` selects the `fr` table)
//! - Fallback to `en-US` when no table matches

pub mod fluent;
