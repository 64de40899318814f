// SPDX-License-Identifier: MPL-2.0
//! Project catalog loading.
//!
//! The default catalog (`projects.toml`) is embedded in the binary. A
//! catalog file given on the command line replaces it; when that file cannot
//! be used the embedded one is loaded instead and a warning key is returned.

use crate::domain::project::{Category, ProjectId, ProjectRecord, Tag};
use crate::error::{CatalogError, Error, Result};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/catalog/"]
struct CatalogAsset;

/// Name of the embedded catalog file.
pub const CATALOG_FILE: &str = "projects.toml";

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "project")]
    projects: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    id: u32,
    category: String,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    image: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    github: Option<String>,
    #[serde(default)]
    demo: Option<String>,
}

impl CatalogEntry {
    fn into_record(self) -> Result<ProjectRecord> {
        let category: Category = self
            .category
            .parse()
            .map_err(|err: crate::domain::project::ParseCategoryError| {
                CatalogError::Malformed(format!("project {}: {err}", self.id))
            })?;

        Ok(ProjectRecord {
            id: ProjectId::new(self.id),
            category,
            title: self.title,
            description: self.description,
            image: self.image,
            tags: self.tags.into_iter().map(Tag::new).collect(),
            github: self.github.filter(|link| !link.is_empty()),
            demo: self.demo.filter(|link| !link.is_empty()),
        })
    }
}

/// Parses a catalog document, keeping file order.
///
/// # Errors
///
/// Returns [`CatalogError::Malformed`] for invalid TOML or unknown categories
/// and [`CatalogError::DuplicateId`] when two records share an id.
pub fn parse(content: &str) -> Result<Vec<ProjectRecord>> {
    let file: CatalogFile =
        toml::from_str(content).map_err(|err| CatalogError::Malformed(err.to_string()))?;

    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(file.projects.len());
    for entry in file.projects {
        if !seen.insert(entry.id) {
            return Err(CatalogError::DuplicateId(entry.id).into());
        }
        records.push(entry.into_record()?);
    }
    Ok(records)
}

/// Loads the catalog embedded in the binary.
///
/// # Errors
///
/// Returns an error if the asset is missing or invalid.
pub fn load_embedded() -> Result<Vec<ProjectRecord>> {
    let asset = CatalogAsset::get(CATALOG_FILE).ok_or(CatalogError::MissingAsset)?;
    parse(&String::from_utf8_lossy(asset.data.as_ref()))
}

/// Loads a catalog file from disk.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or a catalog error if it
/// is invalid.
pub fn load_from_path(path: &Path) -> Result<Vec<ProjectRecord>> {
    let content = fs::read_to_string(path)?;
    parse(&content)
}

/// Loads the catalog, preferring `override_path` when given.
///
/// Never fails: returns the records and an optional i18n warning key.
#[must_use]
pub fn load(override_path: Option<&Path>) -> (Vec<ProjectRecord>, Option<String>) {
    let mut warning = None;

    if let Some(path) = override_path {
        match load_from_path(path) {
            Ok(records) => {
                tracing::info!(path = %path.display(), count = records.len(), "catalog loaded");
                return (records, None);
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "falling back to embedded catalog");
                warning = Some(err.i18n_key().to_string());
            }
        }
    }

    match load_embedded() {
        Ok(records) => (records, warning),
        Err(err) => {
            tracing::error!(%err, "embedded catalog is unusable");
            let key = warning.unwrap_or_else(|| Error::i18n_key(&err).to_string());
            (Vec::new(), Some(key))
        }
    }
}
