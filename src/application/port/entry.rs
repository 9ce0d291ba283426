// SPDX-License-Identifier: MPL-2.0
//! Entry actions port definition.
//!
//! The host shell never decides how a submission is stored or what a share
//! link looks like. It is handed an [`EntryActions`] implementation at
//! construction time and calls through it.

use crate::domain::entry::{JournalEntry, ShareLink, SubmissionReceipt};
use thiserror::Error;

// =============================================================================
// EntryError
// =============================================================================

/// Errors that can occur while acting on an entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    /// The entry has no description, which walls require.
    #[error("entry has no alt text")]
    MissingAlt,

    /// A pending submission for the same source already exists.
    #[error("entry was already submitted")]
    AlreadySubmitted,

    /// The submission could not be stored.
    #[error("storage error: {0}")]
    Storage(String),

    /// A local source could not be turned into a shareable location.
    #[error("cannot resolve path: {0}")]
    UnresolvablePath(String),
}

impl EntryError {
    /// Returns the i18n message key describing this error to the user.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            EntryError::MissingAlt => "error-entry-missing-alt",
            EntryError::AlreadySubmitted => "error-entry-already-submitted",
            EntryError::Storage(_) => "error-entry-storage",
            EntryError::UnresolvablePath(_) => "error-entry-unresolvable-path",
        }
    }
}

// =============================================================================
// EntryActions Trait
// =============================================================================

/// Port for the actions a user can take on an entry.
///
/// There is deliberately no default implementation: the host must be built
/// with one.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; `submit` runs on a blocking worker
/// thread while the UI keeps a shared handle.
///
/// # Example
///
/// ```ignore
/// use journal_wall::application::port::EntryActions;
/// use journal_wall::domain::entry::{ImageSource, JournalEntry};
///
/// fn share_page(actions: &dyn EntryActions) {
///     let entry = JournalEntry::new(ImageSource::parse("page.jpg"), "Sunday sketches", None);
///     match actions.share(&entry) {
///         Ok(link) => println!("{link}"),
///         Err(e) => eprintln!("cannot share: {e}"),
///     }
/// }
/// ```
pub trait EntryActions: Send + Sync {
    /// Records the entry for publication on its wall.
    ///
    /// # Errors
    ///
    /// Returns [`EntryError::MissingAlt`] for blank alt text,
    /// [`EntryError::AlreadySubmitted`] for duplicates, and
    /// [`EntryError::Storage`] when the record cannot be written.
    fn submit(&self, entry: &JournalEntry) -> Result<SubmissionReceipt, EntryError>;

    /// Produces a link that opens the entry.
    ///
    /// # Errors
    ///
    /// Returns [`EntryError::UnresolvablePath`] when a local source cannot
    /// be resolved.
    fn share(&self, entry: &JournalEntry) -> Result<ShareLink, EntryError>;
}
