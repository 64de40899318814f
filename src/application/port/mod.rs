// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! These traits use only domain and std types so that the application layer
//! stays independent of where data actually lives.
//!
//! # Available Ports
//!
//! - [`storage`]: String key/value preference storage

pub mod storage;

pub use storage::{MemoryStorage, PreferenceStorage, StorageError};
