// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! Infrastructure adapters implement these traits; the UI only sees the
//! trait objects it was constructed with.
//!
//! # Available Ports
//!
//! - [`entry`]: submitting and sharing journal entries

pub mod entry;

pub use entry::{EntryActions, EntryError};
