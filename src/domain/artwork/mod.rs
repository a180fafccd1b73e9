// SPDX-License-Identifier: MPL-2.0
//! Artwork domain module.
//!
//! This module groups the value objects describing one gallery item:
//! - [`ArtworkId`]: 1-based position of an artwork in the catalog
//! - [`ImageRef`] and [`TitleRef`]: opaque handles resolved by the asset table
//!   and the string tables
//! - [`ArtworkRecord`]: the immutable record rendered by the gallery

mod newtypes;
mod types;

pub use newtypes::{ArtworkId, ImageRef, InvalidArtworkId, TitleRef};
pub use types::ArtworkRecord;
