// SPDX-License-Identifier: MPL-2.0
//! Project gallery: filtering and pagination over the catalog.
//!
//! `Gallery` owns the read-only catalog together with the session filter
//! state. Every mutator returns the freshly derived [`GalleryPage`], so
//! callers never need to re-query after a change.

use crate::domain::gallery::{
    page_bounds, total_pages, CategoryFilter, FilterState, PageSize, ViewMode,
};
use crate::domain::project::{Category, ProjectRecord, Tag};

/// Snapshot of the gallery for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryPage<'a> {
    /// Records of the current page, in catalog order.
    pub items: Vec<&'a ProjectRecord>,
    /// 1-based current page.
    pub current_page: usize,
    /// Always at least 1.
    pub total_pages: usize,
    /// Number of records passing the filters, across all pages.
    pub filtered_count: usize,
    /// Number of records in the catalog.
    pub total_count: usize,
}

impl GalleryPage<'_> {
    /// Pagination controls are only shown when there is more than one page.
    #[must_use]
    pub fn shows_pagination(&self) -> bool {
        self.total_pages > 1
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Gallery {
    catalog: Vec<ProjectRecord>,
    filter: FilterState,
    page_size: PageSize,
    view_mode: ViewMode,
}

impl Gallery {
    #[must_use]
    pub fn new(catalog: Vec<ProjectRecord>, page_size: PageSize) -> Self {
        Self {
            catalog,
            filter: FilterState::new(),
            page_size,
            view_mode: ViewMode::default(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &[ProjectRecord] {
        &self.catalog
    }

    #[must_use]
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    #[must_use]
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Changes the layout only; filters and page are kept.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// Changes the page size and keeps the current page in range.
    pub fn set_page_size(&mut self, page_size: PageSize) -> GalleryPage<'_> {
        self.page_size = page_size;
        let total = self.total_pages();
        let page = self.filter.current_page();
        self.filter.set_page(page, total);
        self.page()
    }

    /// Tags offered by the filter bar: every catalog tag, in first-seen order.
    #[must_use]
    pub fn tag_palette(&self) -> Vec<&Tag> {
        let mut palette: Vec<&Tag> = Vec::new();
        for tag in self.catalog.iter().flat_map(|record| record.tags.iter()) {
            if !palette.contains(&tag) {
                palette.push(tag);
            }
        }
        palette
    }

    /// Categories present in the catalog, in [`Category::ALL`] order.
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|category| self.catalog.iter().any(|r| r.category == *category))
            .collect()
    }

    /// Records passing the filters, before pagination.
    pub fn filtered(&self) -> impl Iterator<Item = &ProjectRecord> {
        self.catalog.iter().filter(|record| self.filter.matches(record))
    }

    #[must_use]
    pub fn filtered_count(&self) -> usize {
        self.filtered().count()
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered_count(), self.page_size)
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.filter.current_page()
    }

    /// Records of the current page.
    #[must_use]
    pub fn visible_items(&self) -> Vec<&ProjectRecord> {
        self.page().items
    }

    /// Derives the current page snapshot.
    #[must_use]
    pub fn page(&self) -> GalleryPage<'_> {
        let filtered: Vec<&ProjectRecord> = self.filtered().collect();
        let filtered_count = filtered.len();
        let range = page_bounds(self.filter.current_page(), filtered_count, self.page_size);

        GalleryPage {
            items: filtered[range].to_vec(),
            current_page: self.filter.current_page(),
            total_pages: total_pages(filtered_count, self.page_size),
            filtered_count,
            total_count: self.catalog.len(),
        }
    }

    pub fn toggle_tag(&mut self, tag: Tag) -> GalleryPage<'_> {
        self.filter.toggle_tag(tag);
        self.page()
    }

    pub fn set_category(&mut self, category: CategoryFilter) -> GalleryPage<'_> {
        self.filter.set_category(category);
        self.page()
    }

    pub fn reset(&mut self) -> GalleryPage<'_> {
        self.filter.reset();
        self.page()
    }

    /// Moves to `page`, clamped into the valid range.
    pub fn go_to_page(&mut self, page: usize) -> GalleryPage<'_> {
        let total = self.total_pages();
        self.filter.set_page(page, total);
        self.page()
    }

    /// Advances one page; stays on the last page.
    pub fn next_page(&mut self) -> GalleryPage<'_> {
        let next = self.filter.current_page().saturating_add(1);
        self.go_to_page(next)
    }

    /// Goes back one page; stays on the first page.
    pub fn previous_page(&mut self) -> GalleryPage<'_> {
        let previous = self.filter.current_page().saturating_sub(1);
        self.go_to_page(previous)
    }
}
