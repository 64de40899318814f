// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a personal portfolio built with the Iced GUI framework.
//!
//! A single scrolling page with a hero banner, an about section, a
//! filterable and paginated project gallery with an image preview overlay,
//! and contact links. The dark/light display mode is persisted between runs.
//!
//! # Layers
//!
//! - [`domain`] - Project records, filter and pagination math, modal state machine
//! - [`application`] - Storage port, display preference, gallery query service
//! - [`infrastructure`] - File-backed storage and catalog loading
//! - [`app`] - Iced application wiring
//! - [`ui`] - Views and styles

#![doc(html_root_url = "https://docs.rs/iced_folio/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
