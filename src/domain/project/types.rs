// SPDX-License-Identifier: MPL-2.0
//! Core project types for the domain layer.

use std::fmt;
use std::str::FromStr;

// =============================================================================
// ProjectId
// =============================================================================

/// Unique, stable identifier of a catalog record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProjectId(u32);

impl ProjectId {
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Category
// =============================================================================

/// Coarse classification of a project. Mutually exclusive per record.
///
/// The wildcard "all" is deliberately not a category; it lives in
/// [`CategoryFilter`](crate::domain::gallery::CategoryFilter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Academic,
    Professional,
    Courses,
    Personal,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 4] = [
        Category::Academic,
        Category::Professional,
        Category::Courses,
        Category::Personal,
    ];

    /// Canonical lowercase name, as written in catalog files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Academic => "academic",
            Category::Professional => "professional",
            Category::Courses => "courses",
            Category::Personal => "personal",
        }
    }

    /// Returns the i18n key of the category label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Category::Academic => "category-academic",
            Category::Professional => "category-professional",
            Category::Courses => "category-courses",
            Category::Personal => "category-personal",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError(pub String);

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category '{}'", self.0)
    }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "academic" => Ok(Category::Academic),
            "professional" => Ok(Category::Professional),
            "courses" | "coursework" => Ok(Category::Courses),
            "personal" => Ok(Category::Personal),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

// =============================================================================
// Tag
// =============================================================================

/// Technology or skill label attached to projects. Matching is exact.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(String);

impl Tag {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Tag {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

// =============================================================================
// ProjectRecord
// =============================================================================

/// One immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub category: Category,
    pub title: String,
    pub description: String,
    /// Path or URL of the preview image. Opaque to the domain.
    pub image: String,
    /// Display order only; may be empty.
    pub tags: Vec<Tag>,
    pub github: Option<String>,
    pub demo: Option<String>,
}

impl ProjectRecord {
    /// Returns `true` if any of this record's tags is in `selected`.
    #[must_use]
    pub fn has_any_tag<'a>(&self, mut selected: impl Iterator<Item = &'a Tag>) -> bool {
        selected.any(|tag| self.tags.contains(tag))
    }
}
