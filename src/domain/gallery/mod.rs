// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types: filter criteria, pagination math and display mode.
//!
//! # Available Types
//!
//! - [`CategoryFilter`]: Wildcard or single-category filter
//! - [`FilterState`]: Session filter criteria plus the current page (OR tag logic)
//! - [`PageSize`]: Validated number of records per page
//! - [`ViewMode`]: Grid or list presentation

pub mod filter;
pub mod newtypes;
pub mod pagination;

pub use filter::{CategoryFilter, FilterState};
pub use newtypes::PageSize;
pub use pagination::{clamp_page, page_bounds, total_pages};

/// How the gallery lays out its cards. Purely presentational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}
