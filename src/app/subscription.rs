// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native events are routed to the input table, the swipe detector or the
//! window size. Keys captured by a focused widget (the location field or the
//! contact form) never reach the input table.

use super::Message;
use crate::input;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Tick period while a section is fading in.
const ANIMATION_TICK: Duration = Duration::from_millis(16);

/// Tick period while only a notification waits to expire.
const NOTIFICATION_TICK: Duration = Duration::from_millis(100);

/// Routes keyboard, mouse, touch and window events.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        match &event {
            event::Event::Window(iced::window::Event::Resized(size)) => {
                return Some(Message::WindowResized(*size));
            }
            event::Event::Touch(touch) => return Some(Message::Touch(*touch)),
            _ => {}
        }

        match status {
            event::Status::Ignored => input::resolve_event(&event).map(Message::Input),
            event::Status::Captured => None,
        }
    })
}

/// Periodic tick, only while something time-based is on screen.
pub fn create_tick_subscription(has_notification: bool, animating: bool) -> Subscription<Message> {
    if animating {
        time::every(ANIMATION_TICK).map(Message::Tick)
    } else if has_notification {
        time::every(NOTIFICATION_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
