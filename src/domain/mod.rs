// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure gallery types with no GUI toolkit dependency.
//!
//! Only `serde` (for the bundled catalog document) and `chrono` (for release
//! dates) are used here, so every type can be exercised without a window.
//!
//! # Modules
//!
//! - [`artwork`]: Artwork value objects ([`ArtworkId`](artwork::ArtworkId),
//!   [`ImageRef`](artwork::ImageRef), [`TitleRef`](artwork::TitleRef),
//!   [`ArtworkRecord`](artwork::ArtworkRecord))

pub mod artwork;
