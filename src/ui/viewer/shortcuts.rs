// SPDX-License-Identifier: MPL-2.0
//! Keyboard shortcuts available while the viewer is fullscreen.

use iced::keyboard::{self, key};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    ExitFullscreen,
    ZoomIn,
    ZoomOut,
    Reset,
}

impl Shortcut {
    /// Maps a pressed key to a shortcut. `=` shares the `+` key on most layouts.
    #[must_use]
    pub fn from_key(key: &keyboard::Key) -> Option<Self> {
        match key {
            keyboard::Key::Named(key::Named::Escape) => Some(Self::ExitFullscreen),
            keyboard::Key::Character(c) => match c.as_str() {
                "+" | "=" => Some(Self::ZoomIn),
                "-" => Some(Self::ZoomOut),
                "0" => Some(Self::Reset),
                _ => None,
            },
            _ => None,
        }
    }
}
