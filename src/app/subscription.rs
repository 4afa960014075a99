// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Pointer movement and button release are tracked window-wide so a drag is
//! not lost when the pointer leaves the image. The wheel is routed
//! regardless of capture status; the lightbox claims it while open.

use super::Message;
use iced::{event, keyboard, mouse, window, Event, Subscription};

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| route(&event, status))
}

fn route(event: &Event, status: event::Status) -> Option<Message> {
    match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(*size)),
        Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
            let y = match delta {
                mouse::ScrollDelta::Lines { y, .. } | mouse::ScrollDelta::Pixels { y, .. } => *y,
            };
            Some(Message::WheelScrolled(y))
        }
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::CursorMoved(*position))
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::LeftButtonReleased)
        }
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) if status == event::Status::Ignored => Some(Message::EscapePressed),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::{Point, Size};

    #[test]
    fn wheel_is_routed_even_when_captured() {
        let event = Event::Mouse(mouse::Event::WheelScrolled {
            delta: mouse::ScrollDelta::Lines { x: 0.0, y: -1.0 },
        });
        assert!(matches!(
            route(&event, event::Status::Captured),
            Some(Message::WheelScrolled(y)) if y < 0.0
        ));
    }

    #[test]
    fn cursor_and_release_are_routed() {
        let moved = Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(4.0, 2.0),
        });
        assert!(matches!(
            route(&moved, event::Status::Ignored),
            Some(Message::CursorMoved(p)) if p == Point::new(4.0, 2.0)
        ));

        let released = Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left));
        assert!(matches!(
            route(&released, event::Status::Captured),
            Some(Message::LeftButtonReleased)
        ));
    }

    #[test]
    fn resize_is_routed() {
        let event = Event::Window(window::Event::Resized(Size::new(640.0, 480.0)));
        assert!(matches!(
            route(&event, event::Status::Ignored),
            Some(Message::WindowResized(size)) if size.width == 640.0
        ));
    }

    #[test]
    fn right_button_is_ignored() {
        let event = Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Right));
        assert!(route(&event, event::Status::Ignored).is_none());
    }
}
