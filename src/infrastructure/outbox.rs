// SPDX-License-Identifier: MPL-2.0
//! Local outbox adapter for [`EntryActions`].
//!
//! Submissions are written as TOML records under
//! `<data_dir>/submissions/<id>.toml`, where `id` is the BLAKE3 hash of the
//! source. A record is written to a temporary file and persisted without
//! clobbering, so two submissions of the same source cannot both succeed and
//! a failed write never leaves a partial record behind.

use crate::application::port::{EntryActions, EntryError};
use crate::domain::entry::{ImageSource, JournalEntry, ShareLink, SubmissionReceipt};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Directory under the data dir holding submission records.
pub const SUBMISSIONS_DIR: &str = "submissions";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Pending,
}

/// On-disk submission record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub id: String,
    pub source: String,
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wall: Option<String>,
    /// RFC 3339 timestamp.
    pub submitted_at: String,
    pub status: SubmissionStatus,
}

/// Stable identifier for a source: hex BLAKE3 of its display form.
#[must_use]
pub fn submission_id(source: &ImageSource) -> String {
    blake3::hash(source.to_string().as_bytes())
        .to_hex()
        .to_string()
}

#[derive(Debug, Clone)]
pub struct LocalOutbox {
    dir: PathBuf,
}

impl LocalOutbox {
    /// Creates an outbox rooted in `data_dir`. Nothing touches the disk until
    /// the first submission.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: data_dir.into().join(SUBMISSIONS_DIR),
        }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn record_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.toml"))
    }

    /// Reads every pending record, skipping files that do not parse.
    ///
    /// # Errors
    ///
    /// Returns [`EntryError::Storage`] if the directory exists but cannot be
    /// listed.
    pub fn pending(&self) -> Result<Vec<SubmissionRecord>, EntryError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(EntryError::Storage(err.to_string())),
        };

        let mut records: Vec<SubmissionRecord> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
            .filter_map(|path| match read_record(&path) {
                Ok(record) => Some(record),
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        %err,
                        "skipping unreadable submission record"
                    );
                    None
                }
            })
            .filter(|record| record.status == SubmissionStatus::Pending)
            .collect();

        records.sort_by(|a, b| a.submitted_at.cmp(&b.submitted_at));
        Ok(records)
    }
}

fn storage(err: impl std::fmt::Display) -> EntryError {
    EntryError::Storage(err.to_string())
}

fn read_record(path: &Path) -> Result<SubmissionRecord, String> {
    let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
    toml::from_str(&content).map_err(|e| e.to_string())
}

impl EntryActions for LocalOutbox {
    fn submit(&self, entry: &JournalEntry) -> Result<SubmissionReceipt, EntryError> {
        if !entry.has_alt() {
            return Err(EntryError::MissingAlt);
        }

        let id = submission_id(&entry.source);
        let record = SubmissionRecord {
            id: id.clone(),
            source: entry.source.to_string(),
            alt: entry.alt.trim().to_string(),
            wall: entry.wall.as_ref().map(ToString::to_string),
            submitted_at: chrono::Utc::now().to_rfc3339(),
            status: SubmissionStatus::Pending,
        };
        let content = toml::to_string_pretty(&record).map_err(storage)?;

        fs::create_dir_all(&self.dir).map_err(storage)?;
        let location = self.record_path(&id);

        // Staged in the same directory so a failed write never leaves a
        // partial record under the final name.
        let mut staged = NamedTempFile::new_in(&self.dir).map_err(storage)?;
        staged.write_all(content.as_bytes()).map_err(storage)?;

        match staged.persist_noclobber(&location) {
            Ok(_) => {}
            Err(err) if err.error.kind() == ErrorKind::AlreadyExists => {
                if read_record(&location).is_ok() {
                    return Err(EntryError::AlreadySubmitted);
                }
                tracing::warn!(
                    location = %location.display(),
                    "replacing unreadable submission record"
                );
                fs::remove_file(&location).map_err(storage)?;
                err.file
                    .persist_noclobber(&location)
                    .map_err(|err| storage(err.error))?;
            }
            Err(err) => return Err(storage(err.error)),
        }

        tracing::info!(%id, location = %location.display(), "submission recorded");
        Ok(SubmissionReceipt { id, location })
    }

    fn share(&self, entry: &JournalEntry) -> Result<ShareLink, EntryError> {
        let base = match &entry.source {
            ImageSource::Url(url) => url.clone(),
            ImageSource::Path(path) => {
                let canonical = fs::canonicalize(path)
                    .map_err(|e| EntryError::UnresolvablePath(format!("{}: {e}", path.display())))?;
                file_url(&canonical)
            }
        };

        let link = match &entry.wall {
            Some(wall) => {
                let separator = if base.contains('#') { '&' } else { '#' };
                format!("{base}{separator}wall={wall}")
            }
            None => base,
        };

        tracing::debug!(%link, "share link created");
        Ok(ShareLink(link))
    }
}

/// `file://` URL for an absolute path, with forward slashes and no Windows
/// verbatim prefix.
fn file_url(path: &Path) -> String {
    let display = path.to_string_lossy().replace('\\', "/");
    let display = display.strip_prefix("//?/").unwrap_or(&display);
    if display.starts_with('/') {
        format!("file://{display}")
    } else {
        format!("file:///{display}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entry::WallCode;
    use tempfile::tempdir;

    fn entry(source: &str, alt: &str, wall: Option<&str>) -> JournalEntry {
        JournalEntry::new(
            ImageSource::parse(source),
            alt,
            wall.and_then(WallCode::new),
        )
    }

    #[test]
    fn submit_writes_one_pending_record() {
        let dir = tempdir().expect("temp dir");
        let outbox = LocalOutbox::new(dir.path());
        let page = entry("https://walls.example/p/7.jpg", " Rainy market ", Some("river-st"));

        let receipt = outbox.submit(&page).expect("submit");
        assert_eq!(receipt.id, submission_id(&page.source));
        assert!(receipt.location.starts_with(dir.path().join(SUBMISSIONS_DIR)));

        let pending = outbox.pending().expect("pending");
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].alt, "Rainy market");
        assert_eq!(pending[0].wall.as_deref(), Some("river-st"));
        assert!(chrono::DateTime::parse_from_rfc3339(&pending[0].submitted_at).is_ok());
    }

    #[test]
    fn duplicate_submission_is_rejected() {
        let dir = tempdir().expect("temp dir");
        let outbox = LocalOutbox::new(dir.path());
        let page = entry("https://walls.example/p/7.jpg", "Rainy market", None);

        outbox.submit(&page).expect("first submit");
        assert_eq!(outbox.submit(&page), Err(EntryError::AlreadySubmitted));
        assert_eq!(outbox.pending().expect("pending").len(), 1);
    }

    #[test]
    fn unreadable_leftover_record_is_replaced() {
        let dir = tempdir().expect("temp dir");
        let outbox = LocalOutbox::new(dir.path());
        let page = entry("https://walls.example/p/7.jpg", "Rainy market", None);

        // An interrupted write leaves an empty record behind.
        fs::create_dir_all(outbox.dir()).expect("create dir");
        let leftover = outbox.dir().join(format!("{}.toml", submission_id(&page.source)));
        fs::write(&leftover, b"").expect("write leftover");

        let receipt = outbox.submit(&page).expect("retry succeeds");
        assert_eq!(receipt.location, leftover);

        let pending = outbox.pending().expect("pending");
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].alt, "Rainy market");
    }

    #[test]
    fn submissions_leave_no_staging_files() {
        let dir = tempdir().expect("temp dir");
        let outbox = LocalOutbox::new(dir.path());
        let page = entry("https://walls.example/p/7.jpg", "Rainy market", None);

        outbox.submit(&page).expect("first submit");
        assert_eq!(outbox.submit(&page), Err(EntryError::AlreadySubmitted));

        let files = fs::read_dir(outbox.dir()).expect("read dir").count();
        assert_eq!(files, 1);
    }

    #[test]
    fn blank_alt_is_rejected_before_touching_disk() {
        let dir = tempdir().expect("temp dir");
        let outbox = LocalOutbox::new(dir.path());

        assert_eq!(
            outbox.submit(&entry("a.png", "   ", None)),
            Err(EntryError::MissingAlt)
        );
        assert!(!outbox.dir().exists());
    }

    #[test]
    fn pending_is_empty_without_directory() {
        let dir = tempdir().expect("temp dir");
        let outbox = LocalOutbox::new(dir.path().join("missing"));
        assert!(outbox.pending().expect("pending").is_empty());
    }

    #[test]
    fn share_url_appends_wall_code() {
        let outbox = LocalOutbox::new("/unused");
        let link = outbox
            .share(&entry("https://walls.example/p/7.jpg", "x", Some("river-st")))
            .expect("share");
        assert_eq!(link.as_str(), "https://walls.example/p/7.jpg#wall=river-st");

        let link = outbox
            .share(&entry("https://walls.example/p/7.jpg#top", "x", Some("river-st")))
            .expect("share");
        assert_eq!(link.as_str(), "https://walls.example/p/7.jpg#top&wall=river-st");
    }

    #[test]
    fn share_local_file_uses_canonical_path() {
        let dir = tempdir().expect("temp dir");
        let file = dir.path().join("page.png");
        fs::write(&file, b"not really a png").expect("write");

        let outbox = LocalOutbox::new(dir.path());
        let link = outbox
            .share(&entry(&file.to_string_lossy(), "x", None))
            .expect("share");
        assert!(link.as_str().starts_with("file://"));
        assert!(link.as_str().ends_with("/page.png"));
    }

    #[test]
    fn share_missing_file_is_unresolvable() {
        let dir = tempdir().expect("temp dir");
        let outbox = LocalOutbox::new(dir.path());
        let result = outbox.share(&entry(
            &dir.path().join("gone.png").to_string_lossy(),
            "x",
            None,
        ));
        assert!(matches!(result, Err(EntryError::UnresolvablePath(_))));
    }

    #[test]
    fn file_url_handles_both_path_styles() {
        assert_eq!(file_url(Path::new("/tmp/a.png")), "file:///tmp/a.png");
        assert_eq!(file_url(Path::new(r"\\?\C:\pages\a.png")), "file:///C:/pages/a.png");
    }
}
