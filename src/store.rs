//! Flat record store for original/sorted array pairs.
//!
//! Records persist as one JSON object per line. Every mutation rewrites the
//! backing file through a temp-file-then-rename step, so a failed write
//! leaves the previous on-disk state intact and each call is atomic.
//!
//! The store is an owned value opened from a path; there is no process-wide
//! connection. [`ArrayStore::in_memory`] skips persistence entirely.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A line in the backing file that is not a valid record.
    #[error("malformed record: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("no record with id {0}")]
    NotFound(u64),
}

/// One stored array: the text as entered, its sorted form, and when it was
/// created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayRecord {
    pub id: u64,
    pub original: String,
    pub sorted: String,
    pub is_sorted: bool,
    pub created_at: DateTime<Utc>,
}

pub struct ArrayStore {
    path: Option<PathBuf>,
    records: Vec<ArrayRecord>,
    next_id: u64,
}

impl ArrayStore {
    /// Opens the store at `path`, loading any existing records. A missing
    /// file is an empty store; ids continue from the largest one seen.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let mut records = Vec::new();

        if path.exists() {
            for line in fs::read_to_string(&path)?.lines() {
                if line.trim().is_empty() {
                    continue;
                }
                records.push(serde_json::from_str::<ArrayRecord>(line)?);
            }
        }

        let next_id = records.iter().map(|r| r.id).max().map_or(1, |id| id + 1);
        debug!(records = records.len(), path = %path.display(), "opened array store");

        Ok(Self {
            path: Some(path),
            records,
            next_id,
        })
    }

    /// A store with no backing file. Used by tests and the bench warm path.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            records: Vec::new(),
            next_id: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Inserts a new record and returns its id.
    pub fn insert(&mut self, original: &str, sorted: &str) -> Result<u64, StoreError> {
        let id = self.next_id;
        self.records.push(ArrayRecord {
            id,
            original: original.to_owned(),
            sorted: sorted.to_owned(),
            is_sorted: true,
            created_at: Utc::now(),
        });

        if let Err(e) = self.persist() {
            self.records.pop();
            return Err(e);
        }

        self.next_id += 1;
        debug!(id, "inserted array record");
        Ok(id)
    }

    /// Snapshot of all records, newest first (creation time descending, id
    /// descending as the tiebreak).
    pub fn records(&self) -> Vec<ArrayRecord> {
        let mut records = self.records.clone();
        records.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        records
    }

    pub fn get(&self, id: u64) -> Option<&ArrayRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Replaces both texts of an existing record and refreshes its sorted
    /// flag.
    pub fn update(&mut self, id: u64, original: &str, sorted: &str) -> Result<(), StoreError> {
        let index = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))?;

        let previous = self.records[index].clone();
        self.records[index].original = original.to_owned();
        self.records[index].sorted = sorted.to_owned();
        self.records[index].is_sorted = true;

        if let Err(e) = self.persist() {
            self.records[index] = previous;
            return Err(e);
        }

        debug!(id, "updated array record");
        Ok(())
    }

    pub fn delete(&mut self, id: u64) -> Result<(), StoreError> {
        let index = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))?;

        let removed = self.records.remove(index);

        if let Err(e) = self.persist() {
            self.records.insert(index, removed);
            return Err(e);
        }

        debug!(id, "deleted array record");
        Ok(())
    }

    /// Removes every record, returning how many were removed.
    pub fn clear(&mut self) -> Result<usize, StoreError> {
        let previous = std::mem::take(&mut self.records);
        let removed = previous.len();

        if let Err(e) = self.persist() {
            self.records = previous;
            return Err(e);
        }

        debug!(removed, "cleared array store");
        Ok(removed)
    }

    fn persist(&self) -> Result<(), StoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let mut buf = String::new();
        for record in &self.records {
            buf.push_str(&serde_json::to_string(record)?);
            buf.push('\n');
        }

        // Write the sibling temp file first; the rename either lands fully or
        // not at all.
        let tmp = temp_path(path);
        let mut file = fs::File::create(&tmp)?;
        file.write_all(buf.as_bytes())?;
        file.sync_all()?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let file_name = path.file_name().and_then(|s| s.to_str()).unwrap_or("store");
    path.with_file_name(format!(".{file_name}.tmp"))
}
