// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core portfolio logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and rules.
//! It has no dependencies on external crates (except `std`) so that the
//! gallery and overlay behavior can be tested without a GUI.
//!
//! # Modules
//!
//! - [`project`]: Catalog records ([`ProjectRecord`](project::ProjectRecord),
//!   [`Category`](project::Category), [`Tag`](project::Tag))
//! - [`gallery`]: Filter criteria and pagination ([`FilterState`](gallery::FilterState),
//!   [`PageSize`](gallery::PageSize))
//! - [`modal`]: Image preview overlay state machine ([`ModalViewer`](modal::ModalViewer))

pub mod gallery;
pub mod modal;
pub mod project;
