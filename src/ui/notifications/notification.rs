// SPDX-License-Identifier: MPL-2.0
//! A single toast: severity, message key and an optional technical detail.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Identifies a toast so a late dismiss click cannot close its successor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Accent color of the toast border and glyph.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Info => "ℹ",
            Severity::Warning | Severity::Error => "⚠",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    /// Fluent key, resolved when the toast is drawn.
    message_key: String,
    /// Untranslated error text shown under the message.
    detail: Option<String>,
    shown_at: Instant,
}

impl Notification {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            message_key: message_key.into(),
            detail: None,
            shown_at: Instant::now(),
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

    /// Attaches the error text of a failed action.
    #[must_use]
    pub fn with_detail(self, detail: impl Into<String>) -> Self {
        Self {
            detail: Some(detail.into()),
            ..self
        }
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
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    #[must_use]
    pub fn shown_at(&self) -> Instant {
        self.shown_at
    }

    #[must_use]
    pub fn is_expired(&self, lifetime: Duration, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= lifetime
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_toast_gets_its_own_id() {
        let first = Notification::success("notification-link-copied");
        let second = Notification::success("notification-link-copied");
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn severities_are_told_apart() {
        assert_ne!(Severity::Success.color(), Severity::Error.color());
        assert_ne!(Severity::Info.color(), Severity::Warning.color());
        assert_eq!(Severity::Warning.glyph(), Severity::Error.glyph());
    }

    #[test]
    fn detail_is_optional() {
        let plain = Notification::error("notification-print-failed");
        assert_eq!(plain.detail(), None);
        let detailed = plain.with_detail("Print Error: no browser");
        assert_eq!(detailed.detail(), Some("Print Error: no browser"));
        assert_eq!(detailed.message_key(), "notification-print-failed");
    }

    #[test]
    fn expires_after_lifetime() {
        let toast = Notification::info("notification-pdf-unavailable");
        let lifetime = Duration::from_secs(3);
        assert!(!toast.is_expired(lifetime, toast.shown_at()));
        assert!(toast.is_expired(lifetime, toast.shown_at() + lifetime));
    }
}
