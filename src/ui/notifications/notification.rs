// SPDX-License-Identifier: MPL-2.0
//! Notification data and severity levels.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Severity level; drives the accent color and how long the toast stays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Info,
    /// Shown for recoverable startup and persistence problems.
    Warning,
    /// Stays until dismissed.
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Short glyph shown at the start of the toast.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Info => "i",
            Severity::Warning | Severity::Error => "!",
        }
    }

    /// `None` means the toast must be dismissed by hand.
    #[must_use]
    pub fn auto_dismiss_duration(self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(6)),
            Severity::Error => None,
        }
    }
}

/// A toast message, stored as an i18n key and resolved when rendered.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message_key: String,
    message_args: Vec<(String, String)>,
    created_at: Instant,
}

impl Notification {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            created_at: Instant::now(),
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Adds a Fluent argument used when the message is resolved.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    /// Two notifications say the same thing when key and arguments match.
    #[must_use]
    pub fn same_message(&self, other: &Notification) -> bool {
        self.message_key == other.message_key && self.message_args == other.message_args
    }

    #[must_use]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.severity
            .auto_dismiss_duration()
            .is_some_and(|ttl| now.saturating_duration_since(self.created_at) >= ttl)
    }

    pub(super) fn restart_timer(&mut self, now: Instant) {
        self.created_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        assert_ne!(
            Notification::success("a").id(),
            Notification::success("a").id()
        );
    }

    #[test]
    fn errors_never_expire() {
        let notification = Notification::error("notification-io-error");
        let far_future = Instant::now() + Duration::from_secs(3600);
        assert!(!notification.is_expired_at(far_future));
    }

    #[test]
    fn warnings_outlive_successes() {
        let success = Severity::Success.auto_dismiss_duration().unwrap();
        let warning = Severity::Warning.auto_dismiss_duration().unwrap();
        assert!(warning > success);
    }

    #[test]
    fn warning_expires_after_its_duration() {
        let notification = Notification::warning("notification-storage-read-error");
        let ttl = Severity::Warning.auto_dismiss_duration().unwrap();
        assert!(!notification.is_expired_at(Instant::now()));
        assert!(notification.is_expired_at(Instant::now() + ttl));
    }

    #[test]
    fn same_message_compares_key_and_args() {
        let a = Notification::warning("k").with_arg("n", "1");
        let b = Notification::error("k").with_arg("n", "1");
        let c = Notification::warning("k").with_arg("n", "2");
        assert!(a.same_message(&b));
        assert!(!a.same_message(&c));
    }
}
