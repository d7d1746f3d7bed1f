// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native window and keyboard events are routed to top-level messages. The
//! frame tick only runs while an animation or a smooth scroll needs it.

use super::{Message, Shortcut};
use iced::{event, keyboard, time, window, Subscription};
use std::time::Duration;

/// Interval between frame ticks, about 60 per second.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Creates the subscription routing window and keyboard events.
///
/// Keyboard shortcuts are ignored when a widget already captured the key.
/// Window close requests are always handled so animations can be reverted.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| match event {
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Window(window::Event::Opened { size, .. }) => {
            Some(Message::WindowResized(size))
        }
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match status {
            event::Status::Ignored => Shortcut::from_key(&key).map(Message::Shortcut),
            event::Status::Captured => None,
        },
        _ => None,
    })
}

/// Creates the frame tick subscription, active only while `animating`.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(FRAME_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
