// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Scales are products of repeated multiplications, so tests compare them
//! with the `approx` assertion macros rather than `assert_eq!`.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

/// Default epsilon for f32 comparisons.
pub const F32_EPSILON: f32 = 1e-6;
