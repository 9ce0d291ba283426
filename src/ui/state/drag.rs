// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles grab-and-drag interaction state for panning a zoomed image.

use iced::{Point, Vector};

/// Manages grab-and-drag state
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    /// Whether a drag operation is currently active
    pub is_dragging: bool,

    /// Pointer position minus the pan offset at the moment the drag started.
    pub origin: Point,
}

impl DragState {
    /// Starts a drag at `position` while the image is panned by `offset`.
    pub fn start(&mut self, position: Point, offset: Vector) {
        self.is_dragging = true;
        self.origin = Point::new(position.x - offset.x, position.y - offset.y);
    }

    /// Stops the drag operation. Safe to call when not dragging.
    pub fn stop(&mut self) {
        self.is_dragging = false;
    }

    /// Pan offset that keeps the grabbed point under the pointer.
    #[must_use]
    pub fn offset_for(&self, current_position: Point) -> Option<Vector> {
        if !self.is_dragging {
            return None;
        }

        Some(Vector::new(
            current_position.x - self.origin.x,
            current_position.y - self.origin.y,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_drag_state_is_not_dragging() {
        let state = DragState::default();
        assert!(!state.is_dragging);
        assert_eq!(state.origin, Point::ORIGIN);
    }

    #[test]
    fn start_records_origin_relative_to_offset() {
        let mut state = DragState::default();
        state.start(Point::new(100.0, 50.0), Vector::new(20.0, 10.0));

        assert!(state.is_dragging);
        assert_eq!(state.origin, Point::new(80.0, 40.0));
    }

    #[test]
    fn stop_drag_clears_flag() {
        let mut state = DragState::default();
        state.start(Point::new(100.0, 50.0), Vector::new(20.0, 10.0));
        state.stop();
        assert!(!state.is_dragging);

        // Stopping twice is harmless
        state.stop();
        assert!(!state.is_dragging);
    }

    #[test]
    fn offset_for_returns_none_when_not_dragging() {
        let state = DragState::default();
        assert!(state.offset_for(Point::new(100.0, 50.0)).is_none());
    }

    #[test]
    fn offset_follows_pointer() {
        let mut state = DragState::default();
        state.start(Point::new(200.0, 150.0), Vector::new(50.0, 30.0));

        // Pointer moved left/up by 20 pixels
        let offset = state.offset_for(Point::new(180.0, 130.0));
        assert_eq!(offset, Some(Vector::new(30.0, 10.0)));
    }
}
