// SPDX-License-Identifier: MPL-2.0
//! Keyboard, mouse and touch bindings.
//!
//! Bindings are a static table from triggers to [`Action`]s. The table knows
//! nothing about the navigator; the application maps each action onto the
//! brochure operations.

use crate::config::SWIPE_THRESHOLD;
use iced::keyboard::{self, key::Named, Key, Modifiers};
use iced::{mouse, touch};

/// Something the user asked for through an input binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    NextPage,
    PreviousPage,
    /// Closes the modal and the navigation menu.
    CloseOverlays,
    HistoryBack,
    HistoryForward,
    ZoomIn,
    ZoomOut,
    ZoomReset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trigger {
    Named(Named),
    Character(&'static str),
    Mouse(mouse::Button),
}

#[derive(Debug, Clone, Copy)]
struct Binding {
    trigger: Trigger,
    alt: bool,
    action: Action,
}

const fn bind(trigger: Trigger, action: Action) -> Binding {
    Binding {
        trigger,
        alt: false,
        action,
    }
}

const fn bind_alt(trigger: Trigger, action: Action) -> Binding {
    Binding {
        trigger,
        alt: true,
        action,
    }
}

const BINDINGS: &[Binding] = &[
    bind(Trigger::Named(Named::ArrowRight), Action::NextPage),
    bind(Trigger::Named(Named::ArrowLeft), Action::PreviousPage),
    bind(Trigger::Named(Named::Escape), Action::CloseOverlays),
    bind_alt(Trigger::Named(Named::ArrowLeft), Action::HistoryBack),
    bind_alt(Trigger::Named(Named::ArrowRight), Action::HistoryForward),
    bind(Trigger::Mouse(mouse::Button::Back), Action::HistoryBack),
    bind(Trigger::Mouse(mouse::Button::Forward), Action::HistoryForward),
    bind(Trigger::Character("+"), Action::ZoomIn),
    bind(Trigger::Character("="), Action::ZoomIn),
    bind(Trigger::Character("-"), Action::ZoomOut),
    bind(Trigger::Character("0"), Action::ZoomReset),
];

/// Resolves a key press to its bound action.
///
/// Shift is ignored (`+` needs it on most layouts). Presses with the
/// command modifier are never bound.
#[must_use]
pub fn resolve_key(key: &Key, modifiers: Modifiers) -> Option<Action> {
    if modifiers.command() {
        return None;
    }
    let trigger = match key {
        Key::Named(named) => Trigger::Named(*named),
        Key::Character(c) => {
            let c = c.as_str();
            return BINDINGS
                .iter()
                .find(|b| {
                    matches!(b.trigger, Trigger::Character(bound) if bound == c)
                        && b.alt == modifiers.alt()
                })
                .map(|b| b.action);
        }
        Key::Unidentified => return None,
    };
    lookup(trigger, modifiers.alt())
}

/// Resolves a mouse button press to its bound action.
#[must_use]
pub fn resolve_button(button: mouse::Button) -> Option<Action> {
    lookup(Trigger::Mouse(button), false)
}

/// Resolves a raw window event, ignoring everything that is not bound.
#[must_use]
pub fn resolve_event(event: &iced::Event) -> Option<Action> {
    match event {
        iced::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            resolve_key(key, *modifiers)
        }
        iced::Event::Mouse(mouse::Event::ButtonPressed(button)) => resolve_button(*button),
        _ => None,
    }
}

fn lookup(trigger: Trigger, alt: bool) -> Option<Action> {
    BINDINGS
        .iter()
        .find(|b| b.trigger == trigger && b.alt == alt)
        .map(|b| b.action)
}

/// Maps a horizontal swipe to a page action.
///
/// Travel must exceed the threshold; a leftward swipe turns to the next page.
#[must_use]
pub fn swipe_action(start_x: f32, end_x: f32) -> Option<Action> {
    let travel = start_x - end_x;
    if travel > SWIPE_THRESHOLD {
        Some(Action::NextPage)
    } else if travel < -SWIPE_THRESHOLD {
        Some(Action::PreviousPage)
    } else {
        None
    }
}

/// Outcome of a touch gesture that started on the main image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Swipe(Action),
    Tap,
}

/// Tracks one finger across a touch gesture.
///
/// Only gestures whose press landed on the main image count; the image
/// reports that press through [`Swipe::press_on_image`].
#[derive(Debug, Default, Clone)]
pub struct Swipe {
    start: Option<(touch::Finger, f32)>,
    on_image: bool,
}

impl Swipe {
    /// Marks the current press as landing on the main image.
    pub fn press_on_image(&mut self) {
        self.on_image = true;
    }

    /// Handles a release over the main image.
    ///
    /// Returns `true` for a plain click that also pressed on the image. A
    /// release during a touch gesture returns `false`; the gesture settles
    /// when the finger lifts.
    pub fn release_on_image(&mut self) -> bool {
        if self.start.is_some() {
            false
        } else {
            std::mem::take(&mut self.on_image)
        }
    }

    /// Feeds a touch event; returns the gesture once the finger lifts.
    pub fn handle(&mut self, event: &touch::Event) -> Option<Gesture> {
        match *event {
            touch::Event::FingerPressed { id, position } => {
                if self.start.is_none() {
                    self.start = Some((id, position.x));
                }
                None
            }
            touch::Event::FingerLifted { id, position } => match self.start {
                Some((finger, start_x)) if finger == id => {
                    self.start = None;
                    if !std::mem::take(&mut self.on_image) {
                        return None;
                    }
                    Some(swipe_action(start_x, position.x).map_or(Gesture::Tap, Gesture::Swipe))
                }
                _ => None,
            },
            touch::Event::FingerLost { id, .. } => {
                if self.start.is_some_and(|(finger, _)| finger == id) {
                    self.start = None;
                    self.on_image = false;
                }
                None
            }
            touch::Event::FingerMoved { .. } => None,
        }
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Point;

    fn character(c: &str) -> Key {
        Key::Character(c.into())
    }

    #[test]
    fn arrows_navigate_pages() {
        let right = Key::Named(Named::ArrowRight);
        let left = Key::Named(Named::ArrowLeft);
        assert_eq!(resolve_key(&right, Modifiers::empty()), Some(Action::NextPage));
        assert_eq!(resolve_key(&left, Modifiers::empty()), Some(Action::PreviousPage));
    }

    #[test]
    fn alt_arrows_traverse_history() {
        let left = Key::Named(Named::ArrowLeft);
        let right = Key::Named(Named::ArrowRight);
        assert_eq!(resolve_key(&left, Modifiers::ALT), Some(Action::HistoryBack));
        assert_eq!(resolve_key(&right, Modifiers::ALT), Some(Action::HistoryForward));
    }

    #[test]
    fn escape_closes_overlays() {
        let escape = Key::Named(Named::Escape);
        assert_eq!(resolve_key(&escape, Modifiers::empty()), Some(Action::CloseOverlays));
    }

    #[test]
    fn zoom_keys_ignore_shift() {
        assert_eq!(resolve_key(&character("+"), Modifiers::SHIFT), Some(Action::ZoomIn));
        assert_eq!(resolve_key(&character("="), Modifiers::empty()), Some(Action::ZoomIn));
        assert_eq!(resolve_key(&character("-"), Modifiers::empty()), Some(Action::ZoomOut));
        assert_eq!(resolve_key(&character("0"), Modifiers::empty()), Some(Action::ZoomReset));
    }

    #[test]
    fn command_chords_are_unbound() {
        assert_eq!(resolve_key(&character("0"), Modifiers::COMMAND), None);
        assert_eq!(resolve_key(&Key::Named(Named::ArrowRight), Modifiers::COMMAND), None);
    }

    #[test]
    fn unbound_keys_resolve_to_nothing() {
        assert_eq!(resolve_key(&character("q"), Modifiers::empty()), None);
        assert_eq!(resolve_key(&Key::Named(Named::Space), Modifiers::empty()), None);
    }

    #[test]
    fn mouse_side_buttons_traverse_history() {
        assert_eq!(resolve_button(mouse::Button::Back), Some(Action::HistoryBack));
        assert_eq!(resolve_button(mouse::Button::Forward), Some(Action::HistoryForward));
        assert_eq!(resolve_button(mouse::Button::Left), None);
    }

    #[test]
    fn swipe_needs_more_than_threshold() {
        assert_eq!(swipe_action(100.0, 50.0), None);
        assert_eq!(swipe_action(100.0, 49.0), Some(Action::NextPage));
        assert_eq!(swipe_action(50.0, 101.0), Some(Action::PreviousPage));
    }

    #[test]
    fn swipe_tracks_a_single_finger() {
        let mut swipe = Swipe::default();
        let first = touch::Finger(1);
        let second = touch::Finger(2);

        swipe.press_on_image();
        swipe.handle(&touch::Event::FingerPressed {
            id: first,
            position: Point::new(300.0, 10.0),
        });
        swipe.handle(&touch::Event::FingerPressed {
            id: second,
            position: Point::new(0.0, 10.0),
        });
        assert_eq!(
            swipe.handle(&touch::Event::FingerLifted {
                id: second,
                position: Point::new(400.0, 10.0),
            }),
            None
        );
        assert_eq!(
            swipe.handle(&touch::Event::FingerLifted {
                id: first,
                position: Point::new(200.0, 10.0),
            }),
            Some(Gesture::Swipe(Action::NextPage))
        );
        assert!(!swipe.is_tracking());
    }

    #[test]
    fn gestures_off_the_image_are_ignored() {
        let mut swipe = Swipe::default();
        let finger = touch::Finger(3);
        swipe.handle(&touch::Event::FingerPressed {
            id: finger,
            position: Point::new(300.0, 10.0),
        });
        assert_eq!(
            swipe.handle(&touch::Event::FingerLifted {
                id: finger,
                position: Point::new(100.0, 10.0),
            }),
            None
        );
    }

    #[test]
    fn short_touch_on_image_is_a_tap() {
        let mut swipe = Swipe::default();
        let finger = touch::Finger(4);
        swipe.press_on_image();
        swipe.handle(&touch::Event::FingerPressed {
            id: finger,
            position: Point::new(300.0, 10.0),
        });
        assert!(!swipe.release_on_image());
        assert_eq!(
            swipe.handle(&touch::Event::FingerLifted {
                id: finger,
                position: Point::new(290.0, 12.0),
            }),
            Some(Gesture::Tap)
        );
    }

    #[test]
    fn mouse_click_needs_press_and_release_on_image() {
        let mut swipe = Swipe::default();
        assert!(!swipe.release_on_image());
        swipe.press_on_image();
        assert!(swipe.release_on_image());
        assert!(!swipe.release_on_image());
    }

    #[test]
    fn lost_finger_cancels_swipe() {
        let mut swipe = Swipe::default();
        let finger = touch::Finger(7);
        swipe.press_on_image();
        swipe.handle(&touch::Event::FingerPressed {
            id: finger,
            position: Point::new(300.0, 0.0),
        });
        swipe.handle(&touch::Event::FingerLost {
            id: finger,
            position: Point::new(0.0, 0.0),
        });
        assert!(!swipe.is_tracking());
        assert!(!swipe.release_on_image());
    }
}
