// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Config(String),
    Catalog(CatalogError),
    Asset(AssetError),
}

impl Error {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Config(_) => "error-config-invalid",
            Error::Catalog(err) => err.i18n_key(),
            Error::Asset(err) => err.i18n_key(),
        }
    }
}

/// Failures raised while building or querying the artwork catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog document contains no artwork.
    Empty,

    /// Two records carry the same identifier.
    DuplicateId(u32),

    /// A record's identifier does not match its position (ids must be `1..=N`).
    OutOfSequence { expected: u32, found: u32 },

    /// Lookup of an identifier outside `1..=N`.
    NotFound(u32),

    /// The bundled catalog document is missing from the binary.
    MissingDocument,

    /// The catalog document could not be parsed.
    Parse(String),
}

impl CatalogError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            CatalogError::NotFound(_) => "error-artwork-not-found",
            CatalogError::Empty
            | CatalogError::DuplicateId(_)
            | CatalogError::OutOfSequence { .. }
            | CatalogError::MissingDocument
            | CatalogError::Parse(_) => "error-catalog-invalid",
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Empty => write!(f, "Catalog contains no artwork"),
            CatalogError::DuplicateId(id) => write!(f, "Duplicate artwork id: {}", id),
            CatalogError::OutOfSequence { expected, found } => {
                write!(f, "Artwork id out of sequence: expected {}, found {}", expected, found)
            }
            CatalogError::NotFound(id) => write!(f, "No artwork with id {}", id),
            CatalogError::MissingDocument => write!(f, "Bundled catalog document is missing"),
            CatalogError::Parse(msg) => write!(f, "Invalid catalog document: {}", msg),
        }
    }
}

/// Failures raised while resolving an opaque asset handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    /// No bundled image is registered under this key.
    Missing(String),
}

impl AssetError {
    pub fn i18n_key(&self) -> &'static str {
        match self {
            AssetError::Missing(_) => "error-image-missing",
        }
    }
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Missing(key) => write!(f, "Missing image asset: {}", key),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
            Error::Asset(e) => write!(f, "Asset Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        Error::Catalog(err)
    }
}

impl From<AssetError> for Error {
    fn from(err: AssetError) -> Self {
        Error::Asset(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
