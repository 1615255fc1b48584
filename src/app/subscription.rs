// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts only apply to the product screen:
//! - Left/Right arrows cycle the gallery while no dialog is open
//! - Escape closes the confirmation dialog

use super::{Message, Screen};
use crate::ui::{gallery, subscription};
use iced::keyboard::{self, key::Named};
use iced::{event, window, Event, Subscription};

/// Creates the keyboard subscription matching the current screen state.
pub fn create_event_subscription(screen: Screen, dialog_open: bool) -> Subscription<Message> {
    match (screen, dialog_open) {
        (Screen::Product, false) => event::listen_with(route_product_event),
        (Screen::Product, true) => event::listen_with(route_dialog_event),
        (Screen::Settings, _) => Subscription::none(),
    }
}

fn route_product_event(event: Event, status: event::Status, _window: window::Id) -> Option<Message> {
    pressed_key(event, status).and_then(product_shortcut)
}

fn route_dialog_event(event: Event, status: event::Status, _window: window::Id) -> Option<Message> {
    pressed_key(event, status).and_then(dialog_shortcut)
}

fn pressed_key(event: Event, status: event::Status) -> Option<Named> {
    // Widgets that consumed the key (text inputs, focused buttons) keep it.
    if status == event::Status::Captured {
        return None;
    }

    match event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(named),
            ..
        }) => Some(named),
        _ => None,
    }
}

fn product_shortcut(key: Named) -> Option<Message> {
    match key {
        Named::ArrowLeft => Some(Message::Gallery(gallery::Message::Previous)),
        Named::ArrowRight => Some(Message::Gallery(gallery::Message::Next)),
        _ => None,
    }
}

fn dialog_shortcut(key: Named) -> Option<Message> {
    match key {
        Named::Escape => Some(Message::Subscription(
            subscription::Message::CloseConfirmation,
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_cycle_gallery() {
        assert!(matches!(
            product_shortcut(Named::ArrowLeft),
            Some(Message::Gallery(gallery::Message::Previous))
        ));
        assert!(matches!(
            product_shortcut(Named::ArrowRight),
            Some(Message::Gallery(gallery::Message::Next))
        ));
        assert!(product_shortcut(Named::Escape).is_none());
    }

    #[test]
    fn escape_closes_dialog_and_arrows_do_nothing() {
        assert!(matches!(
            dialog_shortcut(Named::Escape),
            Some(Message::Subscription(
                subscription::Message::CloseConfirmation
            ))
        ));
        assert!(dialog_shortcut(Named::ArrowRight).is_none());
    }

    #[test]
    fn captured_events_are_ignored() {
        let event = Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(Named::ArrowLeft),
            modified_key: keyboard::Key::Named(Named::ArrowLeft),
            physical_key: keyboard::key::Physical::Code(keyboard::key::Code::ArrowLeft),
            location: keyboard::Location::Standard,
            modifiers: keyboard::Modifiers::default(),
            text: None,
            repeat: false,
        });
        assert!(pressed_key(event.clone(), event::Status::Captured).is_none());
        assert_eq!(
            pressed_key(event, event::Status::Ignored),
            Some(Named::ArrowLeft)
        );
    }
}
