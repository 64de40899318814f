// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`, plus loaders for data files.
//!
//! # Available Adapters
//!
//! - [`storage`]: JSON file preference storage (implements [`PreferenceStorage`])
//! - [`catalog`]: Embedded/on-disk project catalog loading
//!
//! [`PreferenceStorage`]: crate::application::port::PreferenceStorage

pub mod catalog;
pub mod storage;

pub use storage::FileStorage;
