// SPDX-License-Identifier: MPL-2.0
//! Asset table resolving opaque image handles to bundled artwork images.
//!
//! Artwork images live under `assets/artworks/` and are embedded at compile
//! time. Each file is registered under its stem, which is the key an
//! [`ImageRef`] carries (`fruit_and_flowers` → `fruit_and_flowers.svg`).
//! Handles are built once so the renderer can cache their rasterization.

use crate::catalog::Catalog;
use crate::domain::artwork::ImageRef;
use crate::error::AssetError;
use iced::widget::svg;
use rust_embed::RustEmbed;
use std::collections::HashMap;

#[derive(RustEmbed)]
#[folder = "assets/artworks/"]
struct ArtworkAsset;

const IMAGE_EXTENSION: &str = ".svg";

#[derive(Debug, Clone, Default)]
pub struct AssetTable {
    images: HashMap<String, svg::Handle>,
}

impl AssetTable {
    /// Registers every image embedded in the binary.
    #[must_use]
    pub fn bundled() -> Self {
        let mut table = Self::default();

        for file in ArtworkAsset::iter() {
            let filename = file.as_ref();
            let Some(stem) = filename.strip_suffix(IMAGE_EXTENSION) else {
                continue;
            };
            if let Some(content) = ArtworkAsset::get(filename) {
                table.insert(stem, content.data);
            }
        }

        table
    }

    /// Registers SVG data under `key`, replacing any previous entry.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        data: impl Into<std::borrow::Cow<'static, [u8]>>,
    ) {
        self.images.insert(key.into(), svg::Handle::from_memory(data));
    }

    /// Returns the handle registered for `image`.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::Missing`] if no image is registered under the key.
    pub fn resolve(&self, image: &ImageRef) -> Result<&svg::Handle, AssetError> {
        self.images
            .get(image.key())
            .ok_or_else(|| AssetError::Missing(image.key().to_string()))
    }

    /// Lists the catalog images this table cannot resolve.
    #[must_use]
    pub fn missing<'a>(&self, catalog: &'a Catalog) -> Vec<&'a ImageRef> {
        catalog
            .iter()
            .map(|record| record.image())
            .filter(|image| !self.images.contains_key(image.key()))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
