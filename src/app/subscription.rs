// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window resizes always flow through; the keyboard and mouse listeners are
//! only interested in dismissing an open drawer (Escape, or a press that no
//! widget captured). `CloseDrawer` is idempotent, so the listener emits it
//! without knowing whether the drawer is open.

use super::Message;
use crate::ui::header;
use iced::{event, keyboard, mouse, time, window, Subscription};
use std::time::Duration;

/// Creates the native event subscription.
///
/// `Status::Ignored` on a mouse press means the press landed outside every
/// interactive widget, which is the outside-click drawer dismissal.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if let event::Event::Window(window::Event::Resized(size)) = &event {
            return Some(Message::WindowResized(*size));
        }

        match &event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }) => Some(Message::Header(header::Message::CloseDrawer)),
            event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                match status {
                    event::Status::Ignored => {
                        Some(Message::Header(header::Message::CloseDrawer))
                    }
                    event::Status::Captured => None,
                }
            }
            _ => None,
        }
    })
}

/// Creates a periodic tick subscription for notification auto-dismiss.
///
/// Only active while a toast is showing, so an idle shell schedules no
/// timers.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(500)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
