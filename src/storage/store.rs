use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use super::error::StorageError;
use crate::model::Submission;

/// File name of the fixed snapshot slot, after the original
/// `submittedForms` key.
const SNAPSHOT_FILE: &str = "submitted_forms.json";

/// The durable, ordered collection of submitted records.
///
/// Append-only except for delete-by-id; `id` values are unique within the
/// sequence. Every mutation rewrites the whole snapshot, which is fine at
/// the expected scale (a handful of entries); an append-only log would be
/// the next step if that ever changes.
#[derive(Debug)]
pub struct SubmissionStore {
    path: PathBuf,
    entries: Vec<Submission>,
}

impl SubmissionStore {
    /// Opens the store backed by `<data_dir>/enroll/submitted_forms.json`.
    ///
    /// The directory is created if it does not exist; any prior snapshot is
    /// rehydrated.
    pub fn open() -> Result<Self, StorageError> {
        let data_dir = dirs::data_dir().ok_or(StorageError::NoDataDir)?;
        let base = data_dir.join("enroll");
        fs::create_dir_all(&base)?;
        Ok(Self::at(base.join(SNAPSHOT_FILE)))
    }

    /// Opens a store backed by a snapshot under the given directory.
    #[cfg(test)]
    pub(crate) fn with_path(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self::at(dir.join(SNAPSHOT_FILE)))
    }

    fn at(path: PathBuf) -> Self {
        let entries = load_snapshot(&path);
        Self { path, entries }
    }

    /// Appends a record to the end of the sequence and rewrites the
    /// snapshot.
    ///
    /// On a write failure the record stays in the in-memory sequence, which
    /// remains authoritative; the caller decides whether to surface or just
    /// log the error.
    pub fn append(&mut self, submission: Submission) -> Result<(), StorageError> {
        self.entries.push(submission);
        self.persist()
    }

    /// Removes the record with the given id, if any, and rewrites the
    /// snapshot.
    ///
    /// An unknown id is a no-op rewrite, not an error.
    pub fn remove(&mut self, id: i64) -> Result<(), StorageError> {
        self.entries.retain(|s| s.id != id);
        self.persist()
    }

    /// The current sequence in insertion order, read-only.
    pub fn list(&self) -> &[Submission] {
        &self.entries
    }

    /// Overwrites the snapshot with the full current sequence.
    fn persist(&self) -> Result<(), StorageError> {
        let file = fs::File::create(&self.path)?;
        serde_json::to_writer(file, &self.entries)?;
        Ok(())
    }
}

/// Reads the snapshot, degrading to an empty sequence when the file is
/// missing, unreadable, or malformed. Anything but a clean parse is logged
/// and treated as "no prior data".
fn load_snapshot(path: &Path) -> Vec<Submission> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read snapshot; starting empty");
            return Vec::new();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "malformed snapshot; starting empty");
            Vec::new()
        }
    }
}
