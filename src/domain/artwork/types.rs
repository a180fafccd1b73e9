// SPDX-License-Identifier: MPL-2.0
//! Artwork record type.

use super::{ArtworkId, ImageRef, TitleRef};
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

/// One gallery item. Immutable once constructed.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use iced_gallery::domain::artwork::{ArtworkId, ArtworkRecord, ImageRef, TitleRef};
///
/// let record = ArtworkRecord::new(
///     ArtworkId::FIRST,
///     ImageRef::new("fruit_and_flowers"),
///     TitleRef::new("artwork-fruit-and-flowers"),
///     "Roger Fenton",
///     NaiveDate::from_ymd_opt(1860, 1, 1).unwrap(),
/// );
///
/// assert_eq!(record.release_year(), 1860);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArtworkRecord {
    id: ArtworkId,
    image: ImageRef,
    title: TitleRef,
    author: String,
    release_date: NaiveDate,
}

impl ArtworkRecord {
    #[must_use]
    pub fn new(
        id: ArtworkId,
        image: ImageRef,
        title: TitleRef,
        author: impl Into<String>,
        release_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            image,
            title,
            author: author.into(),
            release_date,
        }
    }

    #[must_use]
    pub fn id(&self) -> ArtworkId {
        self.id
    }

    #[must_use]
    pub fn image(&self) -> &ImageRef {
        &self.image
    }

    #[must_use]
    pub fn title(&self) -> &TitleRef {
        &self.title
    }

    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    #[must_use]
    pub fn release_date(&self) -> NaiveDate {
        self.release_date
    }

    /// Year shown next to the author; the rest of the date is never displayed.
    #[must_use]
    pub fn release_year(&self) -> i32 {
        self.release_date.year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_catalog_entry() {
        let source = r#"
            id = 2
            image = "a_poet_reading"
            title = "artwork-a-poet-reading"
            author = "Master of the Playing Cards"
            release_date = "1430-01-01"
        "#;

        let record: ArtworkRecord = toml::from_str(source).unwrap();

        assert_eq!(record.id().value(), 2);
        assert_eq!(record.image().key(), "a_poet_reading");
        assert_eq!(record.title().key(), "artwork-a-poet-reading");
        assert_eq!(record.author(), "Master of the Playing Cards");
        assert_eq!(record.release_year(), 1430);
    }

    #[test]
    fn rejects_zero_id() {
        let source = r#"
            id = 0
            image = "x"
            title = "y"
            author = "z"
            release_date = "2000-01-01"
        "#;

        assert!(toml::from_str::<ArtworkRecord>(source).is_err());
    }

    #[test]
    fn rejects_malformed_date() {
        let source = r#"
            id = 1
            image = "x"
            title = "y"
            author = "z"
            release_date = "sometime in 1860"
        "#;

        assert!(toml::from_str::<ArtworkRecord>(source).is_err());
    }
}
