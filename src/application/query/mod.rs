// SPDX-License-Identifier: MPL-2.0
//! Query services over domain data.
//!
//! # Available Services
//!
//! - [`gallery`]: Catalog filtering and pagination (`Gallery`)

pub mod gallery;

pub use gallery::{Gallery, GalleryPage};
