// SPDX-License-Identifier: MPL-2.0
//! The artwork catalog: an ordered, read-only collection built once at startup.
//!
//! Records are addressed by their [`ArtworkId`], which is also their position:
//! a valid catalog of `N` artworks holds exactly the ids `1..=N`, in order.
//! [`Catalog::new`] enforces this, so every other component can rely on it.
//!
//! # Examples
//!
//! ```
//! use iced_gallery::catalog::Catalog;
//!
//! let catalog = Catalog::bundled().expect("bundled catalog is valid");
//! let first = catalog.lookup(1).expect("catalogs are never empty");
//!
//! assert_eq!(first.id().value(), 1);
//! assert!(catalog.lookup(0).is_err());
//! ```

use crate::domain::artwork::{ArtworkId, ArtworkRecord};
use crate::error::CatalogError;
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::collections::HashSet;

#[derive(RustEmbed)]
#[folder = "assets/catalog/"]
struct CatalogAsset;

const CATALOG_FILE: &str = "catalog.toml";

/// On-disk shape of the catalog document: a list of `[[artwork]]` tables.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default, rename = "artwork")]
    artworks: Vec<ArtworkRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<ArtworkRecord>,
}

impl Catalog {
    /// Builds a catalog from records in navigation order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Empty`] for an empty list,
    /// [`CatalogError::DuplicateId`] when an id repeats, and
    /// [`CatalogError::OutOfSequence`] when the `i`-th record (0-based) does not
    /// carry id `i + 1`.
    pub fn new(records: Vec<ArtworkRecord>) -> Result<Self, CatalogError> {
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            let id = record.id();
            if !seen.insert(id) {
                return Err(CatalogError::DuplicateId(id.value()));
            }
            if id.index() != index {
                return Err(CatalogError::OutOfSequence {
                    expected: ArtworkId::from_index(index).map_or(0, ArtworkId::value),
                    found: id.value(),
                });
            }
        }

        Ok(Self { records })
    }

    /// Parses and validates a catalog document.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] for malformed TOML or records, and the
    /// validation errors of [`Catalog::new`].
    pub fn from_toml(source: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument =
            toml::from_str(source).map_err(|err| CatalogError::Parse(err.to_string()))?;
        Self::new(document.artworks)
    }

    /// Loads the catalog embedded in the binary.
    ///
    /// # Errors
    ///
    /// Fails if the bundled document is missing, not UTF-8, or invalid.
    pub fn bundled() -> Result<Self, CatalogError> {
        let file = CatalogAsset::get(CATALOG_FILE).ok_or(CatalogError::MissingDocument)?;
        let source =
            std::str::from_utf8(&file.data).map_err(|err| CatalogError::Parse(err.to_string()))?;
        Self::from_toml(source)
    }

    /// Returns the record with the given id.
    ///
    /// Takes a raw integer so that untrusted input (including `0`) is checked
    /// here rather than at every call site.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if `id` is outside `1..=N`.
    pub fn lookup(&self, id: u32) -> Result<&ArtworkRecord, CatalogError> {
        ArtworkId::new(id)
            .and_then(|id| self.records.get(id.index()))
            .ok_or(CatalogError::NotFound(id))
    }

    /// Number of artworks (`N`). Always at least 1.
    #[must_use]
    pub fn size(&self) -> usize {
        self.records.len()
    }

    /// Id of the last artwork.
    #[must_use]
    pub fn last_id(&self) -> ArtworkId {
        self.records
            .last()
            .map_or(ArtworkId::FIRST, ArtworkRecord::id)
    }

    /// Iterates over the records in navigation order.
    pub fn iter(&self) -> impl Iterator<Item = &ArtworkRecord> {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::artwork::{ImageRef, TitleRef};
    use chrono::NaiveDate;

    fn record(id: u32) -> ArtworkRecord {
        ArtworkRecord::new(
            ArtworkId::new(id).unwrap(),
            ImageRef::new(format!("image_{id}")),
            TitleRef::new(format!("title-{id}")),
            format!("Author {id}"),
            NaiveDate::from_ymd_opt(1900 + id as i32, 1, 1).unwrap(),
        )
    }

    #[test]
    fn new_accepts_dense_ids() {
        let catalog = Catalog::new(vec![record(1), record(2), record(3)]).unwrap();
        assert_eq!(catalog.size(), 3);
        assert_eq!(catalog.last_id().value(), 3);
    }

    #[test]
    fn new_rejects_empty_list() {
        assert_eq!(Catalog::new(Vec::new()), Err(CatalogError::Empty));
    }

    #[test]
    fn new_rejects_duplicate_ids() {
        let result = Catalog::new(vec![record(1), record(1)]);
        assert_eq!(result, Err(CatalogError::DuplicateId(1)));
    }

    #[test]
    fn new_rejects_gaps() {
        let result = Catalog::new(vec![record(1), record(3)]);
        assert_eq!(
            result,
            Err(CatalogError::OutOfSequence {
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn new_rejects_catalog_not_starting_at_one() {
        let result = Catalog::new(vec![record(2), record(3)]);
        assert_eq!(
            result,
            Err(CatalogError::OutOfSequence {
                expected: 1,
                found: 2
            })
        );
    }

    #[test]
    fn new_rejects_shuffled_ids() {
        let result = Catalog::new(vec![record(2), record(1)]);
        assert!(matches!(result, Err(CatalogError::OutOfSequence { .. })));
    }

    #[test]
    fn lookup_returns_matching_record() {
        let catalog = Catalog::new(vec![record(1), record(2), record(3)]).unwrap();
        for id in 1..=3 {
            assert_eq!(catalog.lookup(id).unwrap().id().value(), id);
        }
    }

    #[test]
    fn lookup_outside_bounds_is_not_found() {
        let catalog = Catalog::new(vec![record(1), record(2), record(3)]).unwrap();
        assert_eq!(catalog.lookup(0), Err(CatalogError::NotFound(0)));
        assert_eq!(catalog.lookup(4), Err(CatalogError::NotFound(4)));
        assert_eq!(
            catalog.lookup(u32::MAX),
            Err(CatalogError::NotFound(u32::MAX))
        );
    }

    #[test]
    fn iter_preserves_insertion_order() {
        let catalog = Catalog::new(vec![record(1), record(2), record(3)]).unwrap();
        let ids: Vec<u32> = catalog.iter().map(|r| r.id().value()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn from_toml_reports_parse_errors() {
        let result = Catalog::from_toml("[[artwork]]\nid = \"one\"");
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn from_toml_without_artworks_is_empty() {
        assert_eq!(Catalog::from_toml(""), Err(CatalogError::Empty));
    }

    #[test]
    fn bundled_catalog_is_valid() {
        let catalog = Catalog::bundled().unwrap();
        assert_eq!(catalog.size(), 3);

        let first = catalog.lookup(1).unwrap();
        assert_eq!(first.author(), "Romare Bearden");
        assert_eq!(first.release_year(), 1967);

        let second = catalog.lookup(2).unwrap();
        assert_eq!(second.author(), "Master of the Playing Cards");
        assert_eq!(second.release_year(), 1430);

        let third = catalog.lookup(3).unwrap();
        assert_eq!(third.author(), "Roger Fenton");
        assert_eq!(third.release_year(), 1860);
    }
}
