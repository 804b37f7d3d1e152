// SPDX-License-Identifier: MPL-2.0
//! Toast notification for user feedback.
//!
//! There is a single notification slot: showing a notification replaces the
//! visible one. It dismisses itself after the configured duration (3 seconds
//! by default) or when its close button is pressed.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` owning the slot and its timer
//! - [`toast`] - Toast widget rendering the visible notification
//!
//! Message keys are resolved through i18n at render time, so a language
//! switch also applies to a notification already on screen.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
