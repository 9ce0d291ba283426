// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! owns its state, turns messages into effects and leaves side effects to the
//! application root.
//!
//! - [`entry_card`] - Card shown on the wall, with the entry actions
//! - [`viewer`] - Modal image viewer with zoom, pan and fullscreen
//! - [`state`] - Pure interaction state (zoom, drag, pinch, transitions)
//! - [`styles`] and [`design_tokens`] - Shared styling constants

pub mod design_tokens;
pub mod entry_card;
pub mod state;
pub mod styles;
pub mod viewer;
