//! JSON file backed barcode history.
//!
//! Every operation reads the whole file, acts on the in-memory copy and, for
//! mutations, rewrites the whole file. Nothing is cached between calls, so the
//! file is the only source of truth. There is no locking: two processes
//! writing at the same time can lose an update.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::config::MAX_HISTORY_ENTRIES;
use crate::models::BarcodeRecord;
use crate::notify::{Notifier, MSG_CLEARED, MSG_CLEAR_FAILED, MSG_DUPLICATE, MSG_SAVE_FAILED};


/// Failures writing the history file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write history file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode history: {0}")]
    Encode(#[from] serde_json::Error),
}


/// Result of a successful insert call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    /// Another record already uses the code or the label.
    Duplicate,
}


/// One row of a history export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub code: String,
    pub label: String,
    pub image: String,
}


/// Filtered history, most recent first.
///
/// Holds its own snapshot, so it can be iterated any number of times.
#[derive(Debug, Clone, Default)]
pub struct HistoryQuery {
    records: Vec<BarcodeRecord>,
}

impl HistoryQuery {
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &BarcodeRecord> + '_ {
        self.records.iter()
    }

    pub fn get(&self, index: usize) -> Option<&BarcodeRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl IntoIterator for HistoryQuery {
    type Item = BarcodeRecord;
    type IntoIter = std::vec::IntoIter<BarcodeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a HistoryQuery {
    type Item = &'a BarcodeRecord;
    type IntoIter = std::slice::Iter<'a, BarcodeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}


/// Deduplicating, capacity-bounded barcode history.
pub struct HistoryStore {
    path: PathBuf,
    notifier: Box<dyn Notifier>,
}

impl HistoryStore {
    /// Bind a store to a history file.
    ///
    /// Nothing is read or written until the first operation.
    pub fn open(path: impl Into<PathBuf>, notifier: Box<dyn Notifier>) -> Self {
        Self {
            path: path.into(),
            notifier,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full history, oldest first.
    ///
    /// A missing file is created holding `[]`. Unreadable or malformed content
    /// is logged and yields an empty history without touching the file.
    pub fn load(&self) -> Vec<BarcodeRecord> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "history file missing, creating it");
            if let Err(e) = self.persist(&[]) {
                error!("Error initializing history file: {e}");
            }
            return Vec::new();
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                error!(path = %self.path.display(), "Error loading barcode history: {e}");
                return Vec::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(records) => records,
            Err(e) => {
                error!(path = %self.path.display(), "Error loading barcode history: {e}");
                Vec::new()
            }
        }
    }

    /// Add a barcode to the history.
    ///
    /// Rejected as [`InsertOutcome::Duplicate`] when any stored record shares
    /// the code or the label. Past capacity the oldest records are dropped.
    pub fn insert(&self, code: &str, label: &str, image: &str) -> Result<InsertOutcome, StoreError> {
        let mut records = self.load();

        if records.iter().any(|r| r.conflicts_with(code, label)) {
            info!(code, label, "rejected duplicate barcode");
            self.notifier.notify(MSG_DUPLICATE);
            return Ok(InsertOutcome::Duplicate);
        }

        records.push(BarcodeRecord::new(code, label, image));
        trim_to_capacity(&mut records);

        if let Err(e) = self.persist(&records) {
            error!("Error saving barcode: {e}");
            self.notifier.notify(MSG_SAVE_FAILED);
            return Err(e);
        }

        debug!(code, label, total = records.len(), "saved barcode");
        Ok(InsertOutcome::Inserted)
    }

    /// Records whose label contains `term` (ignoring case) or whose code
    /// contains `term`, most recent first.
    pub fn query(&self, term: &str) -> HistoryQuery {
        let records = self
            .load()
            .into_iter()
            .rev()
            .filter(|r| r.matches(term))
            .collect();
        HistoryQuery { records }
    }

    /// Empty the history.
    ///
    /// The file is replaced in one step, so a failed clear leaves the previous
    /// history intact.
    pub fn clear(&self) -> Result<(), StoreError> {
        match self.persist(&[]) {
            Ok(()) => {
                info!(path = %self.path.display(), "cleared barcode history");
                self.notifier.notify(MSG_CLEARED);
                Ok(())
            }
            Err(e) => {
                error!("Error clearing barcode history: {e}");
                self.notifier.notify(MSG_CLEAR_FAILED);
                Err(e)
            }
        }
    }

    /// All records as export rows, oldest first.
    pub fn export_all(&self) -> Vec<ExportRow> {
        self.load()
            .into_iter()
            .map(|r| ExportRow {
                code: r.code,
                label: r.label,
                image: r.image,
            })
            .collect()
    }

    /// Rewrite the whole file as 4-space indented JSON.
    fn persist(&self, records: &[BarcodeRecord]) -> Result<(), StoreError> {
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        records.serialize(&mut ser)?;

        write_atomic(&self.path, &buf).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}


/// Keep only the most recent entries.
fn trim_to_capacity(records: &mut Vec<BarcodeRecord>) {
    if records.len() > MAX_HISTORY_ENTRIES {
        let excess = records.len() - MAX_HISTORY_ENTRIES;
        records.drain(..excess);
    }
}


/// Write through a temp file in the same directory, then rename over `path`.
fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut temp_file = NamedTempFile::new_in(dir)?;
    temp_file.write_all(bytes)?;
    temp_file.flush()?;
    temp_file.persist(path).map_err(|e| e.error)?;

    Ok(())
}
