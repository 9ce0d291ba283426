// SPDX-License-Identifier: MPL-2.0
//! Eased transition between two view transforms.
//!
//! The viewer renders the transition's current value instead of the raw
//! target so zoom steps glide. Drags and pinches snap straight to the
//! target so the image stays under the finger.

use super::view_state::Transform;
use iced::Vector;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    from: Transform,
    to: Transform,
    started_at: Instant,
    duration: Duration,
}

impl Transition {
    /// A transition that is already at rest on `transform`.
    #[must_use]
    pub fn at_rest(transform: Transform, now: Instant) -> Self {
        Self {
            from: transform,
            to: transform,
            started_at: now,
            duration: Duration::ZERO,
        }
    }

    /// Retargets toward `target`, starting from whatever is displayed at `now`.
    ///
    /// With `duration == None` the transition snaps.
    pub fn retarget(&mut self, target: Transform, duration: Option<Duration>, now: Instant) {
        if target == self.to {
            return;
        }

        self.from = match duration {
            Some(_) => self.value_at(now),
            None => target,
        };
        self.to = target;
        self.started_at = now;
        self.duration = duration.unwrap_or(Duration::ZERO);
    }

    /// Jumps to `target` with no animation.
    pub fn snap(&mut self, target: Transform, now: Instant) {
        *self = Self::at_rest(target, now);
    }

    #[must_use]
    pub fn target(&self) -> Transform {
        self.to
    }

    #[must_use]
    pub fn is_running(&self, now: Instant) -> bool {
        self.from != self.to && now.duration_since(self.started_at) < self.duration
    }

    /// Interpolated transform at `now` (ease-out cubic).
    #[must_use]
    pub fn value_at(&self, now: Instant) -> Transform {
        if self.duration.is_zero() {
            return self.to;
        }

        let elapsed = now.duration_since(self.started_at).as_secs_f32();
        let progress = (elapsed / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        let eased = 1.0 - (1.0 - progress).powi(3);

        Transform {
            scale: lerp(self.from.scale, self.to.scale, eased),
            offset: Vector::new(
                lerp(self.from.offset.x, self.to.offset.x, eased),
                lerp(self.from.offset.y, self.to.offset.y, eased),
            ),
        }
    }
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_relative_eq;

    fn zoomed(scale: f32) -> Transform {
        Transform {
            scale,
            offset: Vector::ZERO,
        }
    }

    #[test]
    fn at_rest_is_not_running() {
        let now = Instant::now();
        let transition = Transition::at_rest(Transform::default(), now);
        assert!(!transition.is_running(now));
        assert_eq!(transition.value_at(now), Transform::default());
    }

    #[test]
    fn retarget_interpolates_then_settles() {
        let start = Instant::now();
        let mut transition = Transition::at_rest(zoomed(1.0), start);
        transition.retarget(zoomed(2.0), Some(Duration::from_millis(200)), start);

        assert!(transition.is_running(start));
        assert_relative_eq!(transition.value_at(start).scale, 1.0);

        let midway = transition.value_at(start + Duration::from_millis(100)).scale;
        assert!(midway > 1.0 && midway < 2.0);

        let end = start + Duration::from_millis(250);
        assert!(!transition.is_running(end));
        assert_relative_eq!(transition.value_at(end).scale, 2.0);
    }

    #[test]
    fn retarget_without_duration_snaps() {
        let now = Instant::now();
        let mut transition = Transition::at_rest(zoomed(1.0), now);
        transition.retarget(zoomed(3.0), None, now);

        assert!(!transition.is_running(now));
        assert_relative_eq!(transition.value_at(now).scale, 3.0);
    }

    #[test]
    fn retarget_mid_flight_starts_from_displayed_value() {
        let start = Instant::now();
        let mut transition = Transition::at_rest(zoomed(1.0), start);
        transition.retarget(zoomed(3.0), Some(Duration::from_millis(200)), start);

        let later = start + Duration::from_millis(100);
        let displayed = transition.value_at(later).scale;
        transition.retarget(zoomed(1.0), Some(Duration::from_millis(200)), later);

        assert_relative_eq!(transition.value_at(later).scale, displayed);
    }

    #[test]
    fn snap_stops_animation() {
        let start = Instant::now();
        let mut transition = Transition::at_rest(zoomed(1.0), start);
        transition.retarget(zoomed(2.0), Some(Duration::from_millis(200)), start);
        transition.snap(zoomed(1.5), start);

        assert!(!transition.is_running(start));
        assert_eq!(transition.target(), zoomed(1.5));
    }
}
