// SPDX-License-Identifier: MPL-2.0
//! Journal entry types.

mod types;

pub use types::{ImageSource, JournalEntry, ShareLink, SubmissionReceipt, WallCode};
