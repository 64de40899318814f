// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts are only reported when no widget captured the key.
//! Window resizes are always reported so the navbar can switch layouts.

use super::message::Shortcut;
use super::Message;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Interval of the notification tick.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if let event::Event::Window(window::Event::Resized(size)) = &event {
            return Some(Message::WindowResized(size.width));
        }

        match (event, status) {
            (
                event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }),
                event::Status::Ignored,
            ) => shortcut_for(&key).map(Message::Shortcut),
            _ => None,
        }
    })
}

/// Maps a key to its shortcut, if any.
#[must_use]
pub fn shortcut_for(key: &Key) -> Option<Shortcut> {
    match key {
        Key::Named(Named::Escape) => Some(Shortcut::CloseModal),
        Key::Named(Named::ArrowLeft) => Some(Shortcut::PreviousPage),
        Key::Named(Named::ArrowRight) => Some(Shortcut::NextPage),
        _ => None,
    }
}

/// Periodic tick driving notification auto-dismiss. Only active while
/// notifications exist.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_escape_are_shortcuts() {
        assert_eq!(
            shortcut_for(&Key::Named(Named::Escape)),
            Some(Shortcut::CloseModal)
        );
        assert_eq!(
            shortcut_for(&Key::Named(Named::ArrowLeft)),
            Some(Shortcut::PreviousPage)
        );
        assert_eq!(
            shortcut_for(&Key::Named(Named::ArrowRight)),
            Some(Shortcut::NextPage)
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(shortcut_for(&Key::Named(Named::Enter)), None);
        assert_eq!(shortcut_for(&Key::Character("a".into())), None);
    }
}
