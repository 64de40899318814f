// SPDX-License-Identifier: MPL-2.0
//! Gallery filter criteria.
//!
//! Category and tag criteria combine with AND; the selected tags among
//! themselves combine with OR (a record needs only one matching tag).

use crate::domain::project::{Category, ProjectRecord, Tag};
use std::collections::BTreeSet;

// =============================================================================
// Category Filter
// =============================================================================

/// Filter by category, or the wildcard that keeps everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Returns `true` if this filter keeps the given category.
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }

    /// Returns `true` if this filter is active (not `All`).
    #[must_use]
    pub fn is_active(self) -> bool {
        !matches!(self, Self::All)
    }
}

// =============================================================================
// Filter State
// =============================================================================

/// Session-scoped filter criteria and current page.
///
/// Every criteria change resets the page to 1. The page is otherwise only
/// moved through [`FilterState::set_page`], which clamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    category: CategoryFilter,
    tags: BTreeSet<Tag>,
    current_page: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: CategoryFilter::All,
            tags: BTreeSet::new(),
            current_page: 1,
        }
    }
}

impl FilterState {
    /// Creates a filter with no active criteria on page 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    #[must_use]
    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    #[must_use]
    pub fn is_tag_selected(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Returns `true` if the record passes both the category and tag criteria.
    #[must_use]
    pub fn matches(&self, record: &ProjectRecord) -> bool {
        self.category.matches(record.category)
            && (self.tags.is_empty() || record.has_any_tag(self.tags.iter()))
    }

    /// Flips membership of `tag` in the selection and returns to page 1.
    pub fn toggle_tag(&mut self, tag: Tag) {
        if !self.tags.remove(&tag) {
            self.tags.insert(tag);
        }
        self.current_page = 1;
    }

    /// Replaces the category filter and returns to page 1.
    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
        self.current_page = 1;
    }

    /// Clears all criteria and returns to page 1.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Moves to `page`, clamped into `[1, total_pages]`.
    pub fn set_page(&mut self, page: usize, total_pages: usize) {
        self.current_page = super::clamp_page(page, total_pages);
    }

    /// Returns `true` if any criterion is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.category.is_active() || !self.tags.is_empty()
    }

    /// Returns the number of active criteria (category counts once, each tag once).
    #[must_use]
    pub fn active_count(&self) -> usize {
        usize::from(self.category.is_active()) + self.tags.len()
    }
}

// =============================================================================
// Tests
// =============================================================================
