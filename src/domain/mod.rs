// SPDX-License-Identifier: MPL-2.0
//! Domain layer: pure value types with no dependencies beyond `std`.
//!
//! - [`entry`]: journal entries, image sources, wall codes and action results
//!   ([`JournalEntry`](entry::JournalEntry), [`ImageSource`](entry::ImageSource))

pub mod entry;
