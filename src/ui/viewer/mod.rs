// SPDX-License-Identifier: MPL-2.0
//! Zoomable, pannable image viewer shown as a modal over the entry card.
//!
//! Mouse, wheel and touch input is routed by the canvas program; keyboard
//! shortcuts are a subscription that only exists while fullscreen.

pub mod canvas;
pub mod click;
pub mod component;
pub mod controls;
pub mod shortcuts;

pub use component::{Effect, Message, Props, State, ViewEnv, ViewModel};
pub use shortcuts::Shortcut;
