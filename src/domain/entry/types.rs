// SPDX-License-Identifier: MPL-2.0
//! Value objects describing one journal page posted to a wall.

use std::fmt;
use std::path::{Path, PathBuf};

// =============================================================================
// ImageSource
// =============================================================================

/// Where the page photo comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImageSource {
    /// A file on the local filesystem.
    Path(PathBuf),
    /// An `http://` or `https://` URL.
    Url(String),
}

impl ImageSource {
    /// Classifies a user-supplied source string.
    ///
    /// Anything starting with `http://` or `https://` (case-insensitive) is a
    /// URL; everything else is treated as a path.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Url(trimmed.to_string())
        } else {
            Self::Path(PathBuf::from(trimmed))
        }
    }

    #[must_use]
    pub fn as_path(&self) -> Option<&Path> {
        match self {
            Self::Path(path) => Some(path),
            Self::Url(_) => None,
        }
    }

    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Url(_))
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

// =============================================================================
// WallCode
// =============================================================================

/// Short code identifying a community wall.
///
/// Surrounding whitespace is dropped; a blank code means "no wall".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WallCode(String);

impl WallCode {
    #[must_use]
    pub fn new(code: &str) -> Option<Self> {
        let trimmed = code.trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WallCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// JournalEntry
// =============================================================================

/// One page photo with its description, optionally pinned to a wall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    pub source: ImageSource,
    pub alt: String,
    pub wall: Option<WallCode>,
}

impl JournalEntry {
    #[must_use]
    pub fn new(source: ImageSource, alt: impl Into<String>, wall: Option<WallCode>) -> Self {
        Self {
            source,
            alt: alt.into(),
            wall,
        }
    }

    /// Whether the entry has a non-blank description.
    #[must_use]
    pub fn has_alt(&self) -> bool {
        !self.alt.trim().is_empty()
    }
}

// =============================================================================
// Action results
// =============================================================================

/// Link that opens the entry, suitable for the clipboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink(pub String);

impl ShareLink {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShareLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Proof that a submission was recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    /// Stable identifier derived from the source.
    pub id: String,
    /// Where the pending record was written.
    pub location: PathBuf,
}
