// SPDX-License-Identifier: MPL-2.0
//! Two-finger pinch tracking.
//!
//! Fingers are tracked by id. While exactly two are down, the scale follows
//! the ratio between the current and the initial finger distance.

use super::zoom::Scale;
use crate::config::MIN_PINCH_DISTANCE;
use iced::touch::Finger;
use iced::Point;

/// Snapshot taken when the second finger lands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchStart {
    pub initial_distance: f32,
    pub initial_scale: Scale,
}

/// Active touch points and the pinch they form, if any.
#[derive(Debug, Clone, Default)]
pub struct PinchState {
    fingers: Vec<(Finger, Point)>,
    start: Option<PinchStart>,
}

impl PinchState {
    /// Number of fingers currently down.
    #[must_use]
    pub fn finger_count(&self) -> usize {
        self.fingers.len()
    }

    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.start.is_some()
    }

    /// Registers a finger. Starts a pinch when this makes exactly two fingers
    /// far enough apart.
    pub fn press(&mut self, finger: Finger, position: Point, scale: Scale) {
        if let Some(entry) = self.fingers.iter_mut().find(|(id, _)| *id == finger) {
            entry.1 = position;
        } else {
            self.fingers.push((finger, position));
        }

        self.start = match self.distance() {
            Some(distance) if distance >= MIN_PINCH_DISTANCE => Some(PinchStart {
                initial_distance: distance,
                initial_scale: scale,
            }),
            _ => None,
        };
    }

    /// Updates a finger position and returns the pinch scale, if pinching.
    pub fn update(&mut self, finger: Finger, position: Point) -> Option<Scale> {
        let entry = self.fingers.iter_mut().find(|(id, _)| *id == finger)?;
        entry.1 = position;

        let start = self.start?;
        let distance = self.distance()?;
        Some(
            start
                .initial_scale
                .multiplied(distance / start.initial_distance),
        )
    }

    /// Removes a lifted or lost finger; any pinch ends.
    pub fn release(&mut self, finger: Finger) {
        self.fingers.retain(|(id, _)| *id != finger);
        self.start = None;
    }

    fn distance(&self) -> Option<f32> {
        match self.fingers.as_slice() {
            [(_, a), (_, b)] => Some(a.distance(*b)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_relative_eq;

    #[test]
    fn second_finger_starts_pinch() {
        let mut pinch = PinchState::default();
        pinch.press(Finger(1), Point::new(100.0, 100.0), Scale::default());
        assert!(!pinch.is_pinching());

        pinch.press(Finger(2), Point::new(200.0, 100.0), Scale::default());
        assert!(pinch.is_pinching());
        assert_eq!(pinch.finger_count(), 2);
    }

    #[test]
    fn spreading_fingers_scales_proportionally() {
        let mut pinch = PinchState::default();
        pinch.press(Finger(1), Point::new(100.0, 100.0), Scale::default());
        pinch.press(Finger(2), Point::new(200.0, 100.0), Scale::default());

        let scale = pinch.update(Finger(2), Point::new(300.0, 100.0));
        assert_relative_eq!(scale.expect("pinching").value(), 2.0);
    }

    #[test]
    fn pinch_result_is_clamped() {
        let mut pinch = PinchState::default();
        pinch.press(Finger(1), Point::new(0.0, 0.0), Scale::new(4.0));
        pinch.press(Finger(2), Point::new(20.0, 0.0), Scale::new(4.0));

        let scale = pinch.update(Finger(2), Point::new(400.0, 0.0));
        assert_eq!(scale, Some(Scale::new(crate::config::MAX_SCALE)));
    }

    #[test]
    fn close_fingers_do_not_pinch() {
        let mut pinch = PinchState::default();
        pinch.press(Finger(1), Point::new(100.0, 100.0), Scale::default());
        pinch.press(Finger(2), Point::new(102.0, 101.0), Scale::default());
        assert!(!pinch.is_pinching());
    }

    #[test]
    fn lifting_a_finger_ends_pinch() {
        let mut pinch = PinchState::default();
        pinch.press(Finger(1), Point::new(0.0, 0.0), Scale::default());
        pinch.press(Finger(2), Point::new(50.0, 0.0), Scale::default());
        pinch.release(Finger(1));

        assert!(!pinch.is_pinching());
        assert_eq!(pinch.finger_count(), 1);
        assert!(pinch.update(Finger(2), Point::new(80.0, 0.0)).is_none());
    }

    #[test]
    fn unknown_finger_update_is_ignored() {
        let mut pinch = PinchState::default();
        assert!(pinch.update(Finger(9), Point::ORIGIN).is_none());
    }
}
