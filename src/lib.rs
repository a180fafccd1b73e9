// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a single-screen artwork gallery built with the Iced GUI framework.
//!
//! It shows one artwork at a time from a bundled catalog, with its localized
//! title, author and release year, and steps through the catalog with
//! Previous/Next controls that disable themselves at either end.

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod app;
pub mod application;
pub mod assets;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod logging;
pub mod ui;
