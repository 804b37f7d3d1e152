// SPDX-License-Identifier: MPL-2.0
//! The notification slot and its auto-dismiss timer.

use super::notification::{Notification, NotificationId};
use crate::config::DEFAULT_NOTIFICATION_SECS;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub enum Message {
    /// The close button of a toast was pressed.
    Dismiss(NotificationId),
}

/// Holds at most one visible notification.
#[derive(Debug)]
pub struct Manager {
    current: Option<Notification>,
    lifetime: Duration,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new(Duration::from_secs(u64::from(DEFAULT_NOTIFICATION_SECS)))
    }
}

impl Manager {
    #[must_use]
    pub fn new(lifetime: Duration) -> Self {
        Self {
            current: None,
            lifetime,
        }
    }

    /// Shows `notification` in place of whatever is visible.
    pub fn push(&mut self, notification: Notification) {
        match notification.detail() {
            Some(detail) => tracing::debug!(
                key = notification.message_key(),
                severity = ?notification.severity(),
                detail,
                "notification shown"
            ),
            None => tracing::debug!(
                key = notification.message_key(),
                severity = ?notification.severity(),
                "notification shown"
            ),
        }
        self.current = Some(notification);
    }

    /// Closes the toast `id` if it is still the visible one.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let visible = self.current.as_ref().is_some_and(|n| n.id() == id);
        if visible {
            self.current = None;
        }
        visible
    }

    /// Drops the visible toast once its lifetime has run out at `now`.
    pub fn tick(&mut self, now: Instant) {
        let lifetime = self.lifetime;
        if self
            .current
            .as_ref()
            .is_some_and(|n| n.is_expired(lifetime, now))
        {
            self.current = None;
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn has_notification(&self) -> bool {
        self.current.is_some()
    }

    #[must_use]
    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }
}
