// SPDX-License-Identifier: MPL-2.0
//! Project domain types.
//!
//! A project is one immutable entry of the portfolio catalog. These types are
//! independent of the catalog file format and of any presentation concern.

pub mod types;

pub use types::{Category, ParseCategoryError, ProjectId, ProjectRecord, Tag};
