// SPDX-License-Identifier: MPL-2.0
//! Keyboard routing for the application.
//!
//! Left/Right arrows produce the same navigation messages as the on-screen
//! controls, so the gallery applies the same enablement rules to both.

use super::Message;
use crate::application::query::navigation::Direction;
use crate::ui::gallery;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, window, Event, Subscription};

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(route_event)
}

fn route_event(event: Event, status: event::Status, _window: window::Id) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }

    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            direction_for_key(&key, modifiers)
                .map(|direction| Message::Gallery(gallery::Message::Navigate(direction)))
        }
        _ => None,
    }
}

/// Maps an unmodified arrow key to a navigation direction.
pub fn direction_for_key(key: &Key, modifiers: keyboard::Modifiers) -> Option<Direction> {
    if modifiers.control() || modifiers.alt() || modifiers.logo() {
        return None;
    }

    match key {
        Key::Named(Named::ArrowLeft) => Some(Direction::Previous),
        Key::Named(Named::ArrowRight) => Some(Direction::Next),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys_map_to_directions() {
        let none = keyboard::Modifiers::empty();
        assert_eq!(
            direction_for_key(&Key::Named(Named::ArrowLeft), none),
            Some(Direction::Previous)
        );
        assert_eq!(
            direction_for_key(&Key::Named(Named::ArrowRight), none),
            Some(Direction::Next)
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        let none = keyboard::Modifiers::empty();
        assert_eq!(direction_for_key(&Key::Named(Named::ArrowUp), none), None);
        assert_eq!(direction_for_key(&Key::Character("n".into()), none), None);
    }

    #[test]
    fn modified_arrows_are_ignored() {
        assert_eq!(
            direction_for_key(&Key::Named(Named::ArrowRight), keyboard::Modifiers::CTRL),
            None
        );
        assert_eq!(
            direction_for_key(&Key::Named(Named::ArrowLeft), keyboard::Modifiers::SHIFT),
            Some(Direction::Previous)
        );
    }
}
