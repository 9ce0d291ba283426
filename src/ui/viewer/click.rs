// SPDX-License-Identifier: MPL-2.0
//! Double-click detection from successive primary presses.

use std::time::{Duration, Instant};

/// Remembers the previous press so the next one can be classified.
#[derive(Debug, Clone, Copy)]
pub struct ClickTracker {
    threshold: Duration,
    last_press: Option<Instant>,
}

impl ClickTracker {
    #[must_use]
    pub fn new(threshold: Duration) -> Self {
        Self {
            threshold,
            last_press: None,
        }
    }

    /// Records a press at `now` and reports whether it completes a double click.
    ///
    /// A completed double click is consumed, so a third quick press starts a
    /// new sequence instead of firing again.
    pub fn press(&mut self, now: Instant) -> bool {
        let is_double = self
            .last_press
            .is_some_and(|previous| now.saturating_duration_since(previous) <= self.threshold);

        self.last_press = if is_double { None } else { Some(now) };
        is_double
    }

    /// Forgets the pending press, e.g. when the pointer leaves the image.
    pub fn clear(&mut self) {
        self.last_press = None;
    }
}
