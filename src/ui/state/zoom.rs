// SPDX-License-Identifier: MPL-2.0
//! Zoom scale newtype.
//!
//! The scale is a plain multiplier over the fitted image size
//! (1.0 = image fitted into the viewer area).

pub use crate::config::{
    DEFAULT_SCALE, DOUBLE_CLICK_SCALE, MAX_SCALE, MIN_SCALE, WHEEL_ZOOM_IN_FACTOR,
    WHEEL_ZOOM_OUT_FACTOR, ZOOM_STEP_FACTOR,
};

/// Zoom multiplier, guaranteed to be within the valid range (0.5×–5×).
///
/// ```
/// use journal_wall::ui::state::Scale;
///
/// assert_eq!(Scale::new(12.0).value(), 5.0);
/// assert_eq!(Scale::new(0.1).value(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Scale(f32);

impl Scale {
    /// Creates a new scale, clamping the value to the valid range.
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self(value.clamp(MIN_SCALE, MAX_SCALE))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Multiplies the scale by `factor`, clamping the result.
    #[must_use]
    pub fn multiplied(self, factor: f32) -> Self {
        Self::new(self.0 * factor)
    }

    /// One zoom-in step (×1.2).
    #[must_use]
    pub fn zoom_in(self) -> Self {
        self.multiplied(ZOOM_STEP_FACTOR)
    }

    /// One zoom-out step (÷1.2).
    #[must_use]
    pub fn zoom_out(self) -> Self {
        Self::new(self.0 / ZOOM_STEP_FACTOR)
    }

    /// Whether panning is meaningful at this scale.
    #[must_use]
    pub fn allows_pan(self) -> bool {
        self.0 > DEFAULT_SCALE
    }

    /// Exact comparison with the unzoomed scale.
    ///
    /// Values that merely round to 1.0 (e.g. after a wheel round trip)
    /// do not count.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_default(self) -> bool {
        self.0 == DEFAULT_SCALE
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_SCALE
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_SCALE
    }

    /// Rounded percentage for display (1.0 → 100).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn percent(self) -> i32 {
        (self.0 * 100.0).round() as i32
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self(DEFAULT_SCALE)
    }
}
