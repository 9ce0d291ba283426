// SPDX-License-Identifier: MPL-2.0
//! `journal_wall` shows journal-page photos shared on community walls and
//! lets visitors zoom, pan and view them fullscreen.
//!
//! The viewer is an Iced component mounted by a small host application that
//! also shows the entry card and routes the entry actions (share, submit)
//! through an injected port.

#![doc(html_root_url = "https://docs.rs/journal_wall/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod media;
pub mod ui;

#[cfg(test)]
mod test_utils;
