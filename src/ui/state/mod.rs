// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Pure interaction state for the viewer, kept free of widget code so it can
//! be unit tested without a renderer.

pub mod drag;
pub mod pinch;
pub mod transition;
pub mod view_state;
pub mod zoom;

pub use drag::DragState;
pub use pinch::PinchState;
pub use transition::Transition;
pub use view_state::{Transform, ViewState};
pub use zoom::Scale;
