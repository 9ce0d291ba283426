// SPDX-License-Identifier: MPL-2.0
//! Canvas program drawing the image under the current view transform.
//!
//! The image is first fitted inside the canvas (contain), then translated by
//! the pan offset and scaled about the canvas center, matching a
//! `translate(offset) scale(scale)` transform with a centered origin.
//!
//! Pointer, wheel and touch input over the canvas is captured so it never
//! scrolls or zooms anything behind the viewer.

use super::component::Message;
use crate::media::ImageData;
use crate::ui::state::Transform;
use iced::widget::canvas::{self, Frame, Geometry};
use iced::widget::Action;
use iced::{mouse, touch, Event, Point, Rectangle, Renderer, Size, Theme, Vector};

/// What the canvas needs to know about the gesture in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputModel {
    pub is_dragging: bool,
    pub fingers_down: bool,
    pub cursor: mouse::Interaction,
}

pub struct ImageCanvas<'a> {
    image: &'a ImageData,
    transform: Transform,
    input: InputModel,
}

impl<'a> ImageCanvas<'a> {
    #[must_use]
    pub fn new(image: &'a ImageData, transform: Transform, input: InputModel) -> Self {
        Self {
            image,
            transform,
            input,
        }
    }
}

impl canvas::Program<Message> for ImageCanvas<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let message = match event {
            Event::Mouse(mouse_event) => self.route_mouse(mouse_event, bounds, cursor)?,
            Event::Touch(touch_event) => self.route_touch(touch_event, bounds)?,
            _ => return None,
        };

        Some(Action::publish(message).and_capture())
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let fitted = fit_size(self.image.size(), bounds.size());
        let center = frame.center();

        frame.translate(Vector::new(
            center.x + self.transform.offset.x,
            center.y + self.transform.offset.y,
        ));
        frame.scale(self.transform.scale);
        frame.draw_image(
            image_rect(fitted),
            canvas::Image::new(self.image.handle.clone()),
        );

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if cursor.is_over(bounds) {
            self.input.cursor
        } else {
            mouse::Interaction::default()
        }
    }
}

impl ImageCanvas<'_> {
    fn route_mouse(
        &self,
        event: &mouse::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Message> {
        match event {
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                cursor.position_in(bounds).map(Message::PointerPressed)
            }
            mouse::Event::ButtonReleased(mouse::Button::Left) => {
                self.input.is_dragging.then_some(Message::PointerReleased)
            }
            mouse::Event::CursorMoved { .. } => match cursor.position_in(bounds) {
                Some(position) => Some(Message::PointerMoved(position)),
                None => self.input.is_dragging.then_some(Message::PointerLeft),
            },
            mouse::Event::CursorLeft => self.input.is_dragging.then_some(Message::PointerLeft),
            mouse::Event::WheelScrolled { delta } => cursor
                .is_over(bounds)
                .then_some(Message::WheelScrolled(*delta)),
            _ => None,
        }
    }

    /// Touch positions arrive in window coordinates and are made local.
    fn route_touch(&self, event: &touch::Event, bounds: Rectangle) -> Option<Message> {
        let local = |position: &Point| Point::new(position.x - bounds.x, position.y - bounds.y);

        match event {
            touch::Event::FingerPressed { id, position } if bounds.contains(*position) => {
                Some(Message::FingerPressed {
                    finger: *id,
                    position: local(position),
                })
            }
            touch::Event::FingerMoved { id, position } if self.input.fingers_down => {
                Some(Message::FingerMoved {
                    finger: *id,
                    position: local(position),
                })
            }
            touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. }
                if self.input.fingers_down =>
            {
                Some(Message::FingerLifted { finger: *id })
            }
            _ => None,
        }
    }
}

/// Largest size with the image's aspect ratio that fits inside `bounds`.
#[must_use]
pub fn fit_size(image: Size, bounds: Size) -> Size {
    if image.width <= 0.0 || image.height <= 0.0 || bounds.width <= 0.0 || bounds.height <= 0.0 {
        return Size::ZERO;
    }

    let ratio = (bounds.width / image.width).min(bounds.height / image.height);
    Size::new(image.width * ratio, image.height * ratio)
}

/// Rectangle of `size` centered on the frame origin.
fn image_rect(size: Size) -> Rectangle {
    Rectangle::new(Point::new(-size.width / 2.0, -size.height / 2.0), size)
}
