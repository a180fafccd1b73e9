// SPDX-License-Identifier: MPL-2.0
//! Artwork newtypes.
//!
//! Type-safe wrappers for catalog identifiers and asset handles.

use serde::Deserialize;
use std::fmt;
use std::num::NonZeroU32;

// =============================================================================
// ArtworkId
// =============================================================================

/// Identifier of an artwork, guaranteed to be at least 1.
///
/// Identifiers double as navigation positions: the artwork with id `n` is the
/// `n`-th record of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "u32")]
pub struct ArtworkId(NonZeroU32);

impl ArtworkId {
    /// Identifier of the first artwork of every catalog.
    pub const FIRST: Self = Self(NonZeroU32::MIN);

    /// Creates an identifier, returning `None` for `0`.
    #[must_use]
    pub fn new(value: u32) -> Option<Self> {
        NonZeroU32::new(value).map(Self)
    }

    /// Returns the identifier of the artwork stored at a 0-based position.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        u32::try_from(index)
            .ok()
            .and_then(|i| i.checked_add(1))
            .and_then(Self::new)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0.get()
    }

    /// Returns the 0-based position this identifier designates.
    #[must_use]
    pub fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

impl Default for ArtworkId {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for ArtworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ArtworkId> for u32 {
    fn from(id: ArtworkId) -> Self {
        id.value()
    }
}

/// Error returned when converting `0` into an [`ArtworkId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidArtworkId;

impl fmt::Display for InvalidArtworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "artwork ids start at 1")
    }
}

impl TryFrom<u32> for ArtworkId {
    type Error = InvalidArtworkId;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(InvalidArtworkId)
    }
}

// =============================================================================
// Asset handles
// =============================================================================

/// Opaque handle to an image asset.
///
/// The domain never interprets the key; the asset table maps it to bundled data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.0
    }
}

/// Opaque handle to a localized string (a Fluent message id).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct TitleRef(String);

impl TitleRef {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_not_an_artwork_id() {
        assert_eq!(ArtworkId::new(0), None);
        assert_eq!(ArtworkId::try_from(0), Err(InvalidArtworkId));
    }

    #[test]
    fn first_id_is_one() {
        assert_eq!(ArtworkId::FIRST.value(), 1);
        assert_eq!(ArtworkId::FIRST.index(), 0);
        assert_eq!(ArtworkId::default(), ArtworkId::FIRST);
    }

    #[test]
    fn index_and_from_index_agree() {
        for index in 0..32 {
            let id = ArtworkId::from_index(index).unwrap();
            assert_eq!(id.index(), index);
            assert_eq!(id.value() as usize, index + 1);
        }
    }

    #[test]
    fn from_index_rejects_overflow() {
        assert_eq!(ArtworkId::from_index(u32::MAX as usize), None);
    }

    #[test]
    fn display_shows_raw_value() {
        assert_eq!(ArtworkId::new(3).unwrap().to_string(), "3");
    }

    #[test]
    fn handles_keep_their_key() {
        assert_eq!(ImageRef::new("a_poet_reading").key(), "a_poet_reading");
        assert_eq!(
            TitleRef::new("artwork-a-poet-reading").key(),
            "artwork-a-poet-reading"
        );
    }
}
