// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native window events (file drag and drop, close requests) and the
//! Escape key to top-level messages depending on the current screen.

use super::{Message, Screen};
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, window, Event, Subscription};
use std::time::Duration;

/// Notification auto-dismiss granularity.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Creates the window event subscription for the current screen.
///
/// File drag and drop is only handled on screens that accept drops, so a
/// drop on the editor cannot leave it. Close requests are handled everywhere
/// for cleanup.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    if screen.accepts_drops() {
        event::listen_with(|event, status, window_id| match event {
            Event::Window(window::Event::FileHovered(_)) => Some(Message::FilesHovered),
            Event::Window(window::Event::FilesHoveredLeft) => Some(Message::FilesHoveredLeft),
            Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
            other => common_event(other, status, window_id),
        })
    } else {
        event::listen_with(common_event)
    }
}

fn common_event(event: Event, status: event::Status, window_id: window::Id) -> Option<Message> {
    match event {
        Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            ..
        }) if status == event::Status::Ignored => Some(Message::EscapePressed),
        _ => None,
    }
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
