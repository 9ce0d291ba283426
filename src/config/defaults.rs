// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Scale**: Zoom multiplier bounds and step factors
//! - **Gestures**: Double-click and pinch thresholds
//! - **Transitions**: Eased transform animation timing

// ==========================================================================
// Scale Defaults
// ==========================================================================

/// Scale applied when the viewer is mounted or reset (1.0 = fitted size).
pub const DEFAULT_SCALE: f32 = 1.0;

/// Minimum allowed scale.
pub const MIN_SCALE: f32 = 0.5;

/// Maximum allowed scale.
pub const MAX_SCALE: f32 = 5.0;

/// Multiplier applied by the zoom in/out buttons and keyboard shortcuts.
pub const ZOOM_STEP_FACTOR: f32 = 1.2;

/// Multiplier applied when the wheel scrolls up (negative delta).
pub const WHEEL_ZOOM_IN_FACTOR: f32 = 1.1;

/// Multiplier applied when the wheel scrolls down (positive delta).
pub const WHEEL_ZOOM_OUT_FACTOR: f32 = 0.9;

/// Scale reached by double-clicking an unzoomed image.
pub const DOUBLE_CLICK_SCALE: f32 = 2.0;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Default maximum delay between two presses forming a double click.
pub const DEFAULT_DOUBLE_CLICK_MS: u64 = 350;

/// Minimum configurable double-click delay.
pub const MIN_DOUBLE_CLICK_MS: u64 = 100;

/// Maximum configurable double-click delay.
pub const MAX_DOUBLE_CLICK_MS: u64 = 1000;

/// Two fingers closer than this (in pixels) cannot start a pinch.
pub const MIN_PINCH_DISTANCE: f32 = 10.0;

/// Whether two-finger touches drive the scale.
pub const DEFAULT_PINCH_ZOOM: bool = true;

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Whether scale/offset changes are animated.
pub const DEFAULT_ANIMATE_TRANSITIONS: bool = true;

/// Default transition duration in milliseconds.
pub const DEFAULT_TRANSITION_MS: u64 = 200;

/// Maximum configurable transition duration.
pub const MAX_TRANSITION_MS: u64 = 1000;

/// Interval between animation ticks while a transition runs.
pub const TRANSITION_TICK_MS: u64 = 16;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_SCALE > 0.0);
    assert!(MIN_SCALE < DEFAULT_SCALE);
    assert!(MAX_SCALE > DEFAULT_SCALE);
    assert!(DOUBLE_CLICK_SCALE > DEFAULT_SCALE);
    assert!(DOUBLE_CLICK_SCALE <= MAX_SCALE);
    assert!(ZOOM_STEP_FACTOR > 1.0);
    assert!(WHEEL_ZOOM_IN_FACTOR > 1.0);
    assert!(WHEEL_ZOOM_OUT_FACTOR < 1.0);

    assert!(MIN_DOUBLE_CLICK_MS > 0);
    assert!(MAX_DOUBLE_CLICK_MS >= MIN_DOUBLE_CLICK_MS);
    assert!(DEFAULT_DOUBLE_CLICK_MS >= MIN_DOUBLE_CLICK_MS);
    assert!(DEFAULT_DOUBLE_CLICK_MS <= MAX_DOUBLE_CLICK_MS);

    assert!(DEFAULT_TRANSITION_MS <= MAX_TRANSITION_MS);
    assert!(TRANSITION_TICK_MS > 0);
};
