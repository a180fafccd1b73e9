// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and launch flags.

use crate::assets::AssetTable;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::Result;
use crate::ui::gallery;

/// Top-level messages consumed by [`super::App::update`].
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
}

/// Everything the application needs at boot, prepared by `main`.
#[derive(Debug, Clone)]
pub struct Flags {
    pub config: Config,
    pub catalog: Catalog,
    pub assets: AssetTable,
}

impl Flags {
    /// Builds flags from the bundled catalog and images.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Catalog`] if the bundled catalog fails validation.
    pub fn bundled(config: Config) -> Result<Self> {
        Ok(Self {
            config,
            catalog: Catalog::bundled()?,
            assets: AssetTable::bundled(),
        })
    }
}
