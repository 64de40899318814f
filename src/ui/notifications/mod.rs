// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Problems the user should know about but that never stop the application
//! (unreadable preferences, a rejected catalog, a link that failed to open)
//! are reported as toasts keyed by i18n message ids.
//!
//! - [`notification`] - `Notification` and `Severity`
//! - [`manager`] - visible slots, FIFO queue and expiry
//! - [`toast`] - rendering

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, MAX_VISIBLE};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
