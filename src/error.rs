// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Errors never reach the user as panics: the application layer turns them
//! into warning notifications keyed by the i18n ids returned from
//! [`Error::i18n_key`].

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Storage Error: {0}")]
    Storage(String),

    #[error("Catalog Error: {0}")]
    Catalog(CatalogError),
}

/// Specific reasons a project catalog can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The catalog file could not be parsed.
    #[error("malformed catalog: {0}")]
    Malformed(String),

    /// Two records share the same identifier.
    #[error("duplicate project id {0}")]
    DuplicateId(u32),

    /// The embedded catalog asset is missing from the binary.
    #[error("embedded catalog is missing")]
    MissingAsset,
}

impl Error {
    /// Returns the i18n message key used when this error is shown as a notification.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "notification-io-error",
            Error::Config(_) => "notification-config-error",
            Error::Storage(_) => "notification-storage-error",
            Error::Catalog(CatalogError::DuplicateId(_)) => "notification-catalog-duplicate-id",
            Error::Catalog(_) => "notification-catalog-error",
        }
    }
}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        Error::Catalog(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Storage(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
