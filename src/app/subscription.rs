// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The viewer contributes its own subscriptions while mounted. Until the main
//! window id is known, a probe listens for the first window or cursor event
//! to learn it; fullscreen requests need the id.

use super::{App, Message};
use iced::{event, mouse, window, Event, Subscription};

impl App {
    pub fn subscription(&self) -> Subscription<Message> {
        let viewer = self
            .viewer
            .as_ref()
            .map_or_else(Subscription::none, |viewer| {
                viewer.subscription().map(Message::Viewer)
            });

        let probe = if self.window_id.is_none() {
            event::listen_with(window_probe)
        } else {
            Subscription::none()
        };

        Subscription::batch([viewer, probe])
    }
}

fn window_probe(event: Event, _status: event::Status, id: window::Id) -> Option<Message> {
    match event {
        Event::Window(_)
        | Event::Mouse(mouse::Event::CursorEntered | mouse::Event::CursorMoved { .. }) => {
            Some(Message::WindowSeen(id))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Point;

    #[test]
    fn probe_reports_window_and_cursor_events() {
        let id = window::Id::unique();
        let moved = Event::Mouse(mouse::Event::CursorMoved {
            position: Point::ORIGIN,
        });
        assert!(matches!(
            window_probe(moved, event::Status::Ignored, id),
            Some(Message::WindowSeen(seen)) if seen == id
        ));
        assert!(window_probe(
            Event::Window(window::Event::Focused),
            event::Status::Captured,
            id
        )
        .is_some());
    }

    #[test]
    fn probe_ignores_other_events() {
        let wheel = Event::Mouse(mouse::Event::WheelScrolled {
            delta: mouse::ScrollDelta::Lines { x: 0.0, y: 1.0 },
        });
        assert!(window_probe(wheel, event::Status::Ignored, window::Id::unique()).is_none());
    }
}
