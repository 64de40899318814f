// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! All visible copy (hero, about, contact, navigation and gallery labels)
//! comes from Fluent `.ftl` files embedded in the binary.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Runtime language switching
//! - Named arguments for formatted strings (page counters, copyright year)

pub mod fluent;
