use std::fs::{self, OpenOptions};
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use survey_flow::{SubmissionLog, SubmissionPayload};

/// One stored submission: the structured payload plus its append timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSubmission {
    /// When the payload was appended, in UTC.
    pub recorded_at: DateTime<Utc>,

    /// The submission exactly as handed to the pipeline.
    pub payload: SubmissionPayload,
}

/// Error type for [`JsonlLog`].
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// Reading or writing the log file failed.
    #[error("log I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be encoded or decoded.
    #[error("log record could not be encoded or decoded: {0}")]
    Codec(#[from] serde_json::Error),
}

/// Append-only JSON-lines submission log.
///
/// One serialized [`StoredSubmission`] per line, stamped at append time. The
/// file is opened in append mode for every write and in-process writers are
/// serialized by a mutex, so an append can only ever add a line. A missing
/// file reads as an empty log.
#[derive(Debug)]
pub struct JsonlLog {
    path: PathBuf,
    writer: Mutex<()>,
}

impl JsonlLog {
    /// Create a log backed by the file at `path`.
    ///
    /// The file is created on first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            writer: Mutex::new(()),
        }
    }

    /// Get the log file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every stored record with its timestamp, oldest first.
    pub fn entries(&self) -> Result<Vec<StoredSubmission>, LogError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        contents
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str(line).map_err(Into::into))
            .collect()
    }
}

impl SubmissionLog for JsonlLog {
    type Error = LogError;

    fn append(&self, payload: &SubmissionPayload) -> Result<(), Self::Error> {
        let record = StoredSubmission {
            recorded_at: Utc::now(),
            payload: payload.clone(),
        };
        let mut line = serde_json::to_string(&record)?;
        line.push('\n');

        // The guard carries no data, so a poisoned lock is still usable.
        let _guard = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<SubmissionPayload>, Self::Error> {
        Ok(self
            .entries()?
            .into_iter()
            .map(|record| record.payload)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use survey_flow::{ContactInfo, PayloadEntry};

    fn payload(name: &str) -> SubmissionPayload {
        SubmissionPayload {
            contact: ContactInfo::new(name, "test@example.com", "555-0100"),
            track: "Selling".to_string(),
            entries: vec![PayloadEntry::new("Why are you selling?", "Relocating")],
        }
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let log = JsonlLog::new(dir.path().join("submissions.jsonl"));

        assert!(log.read_all().unwrap().is_empty());
        assert!(log.entries().unwrap().is_empty());
    }

    #[test]
    fn append_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let log = JsonlLog::new(dir.path().join("submissions.jsonl"));

        log.append(&payload("Alice")).unwrap();
        log.append(&payload("Bob")).unwrap();

        let stored = log.read_all().unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].contact.full_name, "Alice");
        assert_eq!(stored[1].contact.full_name, "Bob");

        let entries = log.entries().unwrap();
        assert!(entries[0].recorded_at <= entries[1].recorded_at);
    }

    #[test]
    fn appends_never_rewrite_prior_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("submissions.jsonl");
        let log = JsonlLog::new(&path);

        log.append(&payload("Alice")).unwrap();
        let first = fs::read_to_string(&path).unwrap();

        log.append(&payload("Bob")).unwrap();
        let second = fs::read_to_string(&path).unwrap();

        assert!(second.starts_with(&first));
    }
}
