// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Views follow the Elm-style "state down, messages up" pattern: each
//! component renders from borrowed state and returns its own message type,
//! which the application maps into its top-level message.
//!
//! - [`navbar`] - Brand, section links, mobile menu and theme toggle
//! - [`sections`] - Hero, About, Projects and Contact
//! - [`modal`] - Image preview overlay
//! - [`notifications`] - Toast notifications
//! - [`styles`] - Button and container styles
//! - [`design_tokens`] - Colors, spacing, sizing
//! - [`theming`] - Light and dark color schemes

pub mod design_tokens;
pub mod modal;
pub mod navbar;
pub mod notifications;
pub mod sections;
pub mod styles;
pub mod theming;
