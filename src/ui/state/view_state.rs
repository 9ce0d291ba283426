// SPDX-License-Identifier: MPL-2.0
//! View transform state for the zoomable image viewer.
//!
//! Every operation here is a total, synchronous state transition: nothing
//! can fail, and the scale can never leave `[MIN_SCALE, MAX_SCALE]` because
//! it is stored as a [`Scale`].

use super::drag::DragState;
use super::zoom::{Scale, DOUBLE_CLICK_SCALE, WHEEL_ZOOM_IN_FACTOR, WHEEL_ZOOM_OUT_FACTOR};
use iced::{Point, Vector};

/// Scale and translation applied to the displayed image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: f32,
    pub offset: Vector,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            scale: Scale::default().value(),
            offset: Vector::ZERO,
        }
    }
}

/// Interaction state owned by one mounted viewer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewState {
    scale: Scale,
    offset: Vector,
    drag: DragState,
    is_fullscreen: bool,
}

impl ViewState {
    #[must_use]
    pub fn scale(&self) -> Scale {
        self.scale
    }

    #[must_use]
    pub fn offset(&self) -> Vector {
        self.offset
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging
    }

    #[must_use]
    pub fn drag_origin(&self) -> Point {
        self.drag.origin
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    /// Target transform to render.
    #[must_use]
    pub fn transform(&self) -> Transform {
        Transform {
            scale: self.scale.value(),
            offset: self.offset,
        }
    }

    pub fn zoom_in(&mut self) {
        self.scale = self.scale.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.scale = self.scale.zoom_out();
    }

    /// Back to scale 1 with no pan.
    pub fn reset(&mut self) {
        self.scale = Scale::default();
        self.offset = Vector::ZERO;
    }

    /// Wheel zoom: scrolling down (positive delta) zooms out by 0.9,
    /// anything else zooms in by 1.1.
    pub fn on_wheel(&mut self, delta_y: f32) {
        let factor = if delta_y > 0.0 {
            WHEEL_ZOOM_OUT_FACTOR
        } else {
            WHEEL_ZOOM_IN_FACTOR
        };
        self.scale = self.scale.multiplied(factor);
    }

    /// Sets the scale directly (used by pinch gestures).
    pub fn set_scale(&mut self, scale: Scale) {
        self.scale = scale;
    }

    /// Begins a pan, but only while zoomed past 1.
    pub fn on_pointer_down(&mut self, position: Point) {
        if self.scale.allows_pan() {
            self.drag.start(position, self.offset);
        }
    }

    /// Pans while dragging a zoomed image. Returns whether the offset changed.
    pub fn on_pointer_move(&mut self, position: Point) -> bool {
        if !self.scale.allows_pan() {
            return false;
        }

        match self.drag.offset_for(position) {
            Some(offset) => {
                self.offset = offset;
                true
            }
            None => false,
        }
    }

    pub fn on_pointer_up(&mut self) {
        self.drag.stop();
    }

    /// Binary toggle: exactly 1 goes to 2, any other scale resets.
    pub fn on_double_click(&mut self) {
        if self.scale.is_default() {
            self.scale = Scale::new(DOUBLE_CLICK_SCALE);
        } else {
            self.reset();
        }
    }

    /// Flips fullscreen; entering it resets the view. Returns the new state.
    pub fn toggle_fullscreen(&mut self) -> bool {
        self.is_fullscreen = !self.is_fullscreen;
        if self.is_fullscreen {
            self.reset();
        }
        self.is_fullscreen
    }

    /// Leaves fullscreen and resets. Returns whether fullscreen was active.
    pub fn exit_fullscreen(&mut self) -> bool {
        let was_fullscreen = self.is_fullscreen;
        if was_fullscreen {
            self.is_fullscreen = false;
            self.reset();
        }
        was_fullscreen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MAX_SCALE, MIN_SCALE};
    use crate::test_utils::{assert_abs_diff_eq, assert_relative_eq, F32_EPSILON};

    #[test]
    fn mounts_unzoomed_and_centered() {
        let state = ViewState::default();
        assert_eq!(state.scale().value(), 1.0);
        assert_eq!(state.offset(), Vector::ZERO);
        assert!(!state.is_dragging());
        assert!(!state.is_fullscreen());
    }

    #[test]
    fn zoom_sequences_stay_in_bounds() {
        let mut state = ViewState::default();
        let pattern = [true, true, false, true, true, true, true, true, true, true, true, true];
        for zoom_in in pattern.iter().cycle().take(200) {
            if *zoom_in {
                state.zoom_in();
            } else {
                state.zoom_out();
            }
            let value = state.scale().value();
            assert!((MIN_SCALE..=MAX_SCALE).contains(&value));
        }

        for _ in 0..100 {
            state.zoom_out();
            let value = state.scale().value();
            assert!((MIN_SCALE..=MAX_SCALE).contains(&value));
        }
        assert_eq!(state.scale().value(), MIN_SCALE);
    }

    #[test]
    fn reset_clears_scale_and_offset() {
        let mut state = ViewState::default();
        state.zoom_in();
        state.zoom_in();
        state.on_pointer_down(Point::new(10.0, 10.0));
        state.on_pointer_move(Point::new(60.0, 40.0));
        assert_ne!(state.offset(), Vector::ZERO);

        state.reset();
        assert_eq!(state.scale().value(), 1.0);
        assert_eq!(state.offset(), Vector::ZERO);
    }

    #[test]
    fn wheel_round_trip_is_lossy() {
        let mut state = ViewState::default();
        state.on_wheel(100.0);
        assert_relative_eq!(state.scale().value(), 0.9);
        state.on_wheel(-100.0);
        assert_relative_eq!(state.scale().value(), 0.99, epsilon = 1e-6);
        assert!(!state.scale().is_default());
    }

    #[test]
    fn zero_wheel_delta_zooms_in() {
        let mut state = ViewState::default();
        state.on_wheel(0.0);
        assert_relative_eq!(state.scale().value(), 1.1);
    }

    #[test]
    fn drag_is_ignored_at_default_scale() {
        let mut state = ViewState::default();
        state.on_pointer_down(Point::new(10.0, 10.0));
        assert!(!state.is_dragging());

        assert!(!state.on_pointer_move(Point::new(80.0, 90.0)));
        assert_eq!(state.offset(), Vector::ZERO);
    }

    #[test]
    fn drag_pans_when_zoomed() {
        let mut state = ViewState::default();
        state.zoom_in();
        state.on_pointer_down(Point::new(100.0, 100.0));
        assert!(state.is_dragging());
        assert_eq!(state.drag_origin(), Point::new(100.0, 100.0));

        assert!(state.on_pointer_move(Point::new(130.0, 80.0)));
        assert_abs_diff_eq!(state.offset().x, 30.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(state.offset().y, -20.0, epsilon = F32_EPSILON);

        state.on_pointer_up();
        assert!(!state.is_dragging());

        // A second drag continues from the current offset
        state.on_pointer_down(Point::new(0.0, 0.0));
        assert_eq!(state.drag_origin(), Point::new(-30.0, 20.0));
        state.on_pointer_move(Point::new(10.0, 10.0));
        assert_abs_diff_eq!(state.offset().x, 40.0);
        assert_abs_diff_eq!(state.offset().y, -10.0);
    }

    #[test]
    fn move_without_press_does_nothing() {
        let mut state = ViewState::default();
        state.zoom_in();
        assert!(!state.on_pointer_move(Point::new(50.0, 50.0)));
        assert_eq!(state.offset(), Vector::ZERO);
    }

    #[test]
    fn double_click_toggles_between_one_and_two() {
        let mut state = ViewState::default();
        state.on_double_click();
        assert_eq!(state.scale().value(), 2.0);

        state.on_double_click();
        assert_eq!(state.scale().value(), 1.0);
        assert_eq!(state.offset(), Vector::ZERO);
    }

    #[test]
    fn double_click_resets_any_non_unit_scale() {
        let mut state = ViewState::default();
        state.on_double_click();
        state.on_wheel(-1.0);
        state.on_pointer_down(Point::new(0.0, 0.0));
        state.on_pointer_move(Point::new(25.0, 5.0));
        state.on_pointer_up();

        state.on_double_click();
        assert_eq!(state.scale().value(), 1.0);
        assert_eq!(state.offset(), Vector::ZERO);

        // 0.99 is not 1, so the toggle resets rather than zooming to 2
        let mut drifted = ViewState::default();
        drifted.on_wheel(1.0);
        drifted.on_wheel(-1.0);
        drifted.on_double_click();
        assert_eq!(drifted.scale().value(), 1.0);
    }

    #[test]
    fn entering_fullscreen_resets() {
        let mut state = ViewState::default();
        state.zoom_in();
        assert!(state.toggle_fullscreen());
        assert_eq!(state.scale().value(), 1.0);

        state.zoom_in();
        assert!(!state.toggle_fullscreen());
        assert_relative_eq!(state.scale().value(), 1.2);
    }

    #[test]
    fn exit_fullscreen_only_acts_when_fullscreen() {
        let mut state = ViewState::default();
        state.zoom_in();
        assert!(!state.exit_fullscreen());
        assert_relative_eq!(state.scale().value(), 1.2);

        state.toggle_fullscreen();
        state.zoom_in();
        assert!(state.exit_fullscreen());
        assert!(!state.is_fullscreen());
        assert_eq!(state.scale().value(), 1.0);
    }
}
