//! Record Store Module
//!
//! Asynchronous accessor for the backing JSON file. The parsed record
//! sequence is cached in process memory after the first successful load and
//! reused until an explicit invalidation or an observed file change.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use serde_json::{Map, Value};
use tokio::fs;
use tracing::debug;

use crate::error::{ApiError, Result};
use crate::store::Record;

// == Record Store ==
/// JSON-file-backed record store with an in-memory cache.
#[derive(Debug)]
pub struct RecordStore {
    /// Path to the backing JSON file
    path: PathBuf,
    /// Cached record sequence, None until first successful load
    records: Option<Vec<Record>>,
    /// Backing file mtime observed at load time
    loaded_mtime: Option<SystemTime>,
}

impl RecordStore {
    // == Constructor ==
    /// Creates a cold store bound to the given backing file.
    ///
    /// No I/O happens until the first `records()` call.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: None,
            loaded_mtime: None,
        }
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true once a load has populated the cache.
    pub fn is_loaded(&self) -> bool {
        self.records.is_some()
    }

    // == Records ==
    /// Returns the full ordered record sequence, loading the backing file
    /// on first use.
    ///
    /// A missing, unreadable or malformed file fails with `DataUnavailable`;
    /// the error is propagated, not retried.
    pub async fn records(&mut self) -> Result<&[Record]> {
        if self.records.is_none() {
            self.load().await?;
        }
        Ok(self.records.as_deref().unwrap_or(&[]))
    }

    // == Invalidate ==
    /// Drops the cached records; the next `records()` call re-reads the file.
    pub fn invalidate(&mut self) {
        self.records = None;
        self.loaded_mtime = None;
    }

    // == Reload If Changed ==
    /// Invalidates the cache when the backing file changed on disk since
    /// the cached load.
    ///
    /// Returns true when an on-disk change was detected. A cold store is
    /// left untouched; a vanished file counts as a change so the next read
    /// surfaces the error instead of serving stale records forever.
    pub async fn reload_if_changed(&mut self) -> bool {
        if self.records.is_none() {
            return false;
        }

        let current = file_mtime(&self.path).await;
        match (current, self.loaded_mtime) {
            (Some(current), Some(seen)) if current != seen => {
                self.invalidate();
                true
            }
            (None, _) => {
                self.invalidate();
                true
            }
            _ => false,
        }
    }

    // == Insert ==
    /// Appends a new record and persists the full array back to the file.
    ///
    /// The id is allocated as one past the highest existing id. Persist
    /// failure rolls the in-memory append back and fails with
    /// `DataUnavailable`, so the cache never diverges from disk.
    pub async fn insert(
        &mut self,
        name: String,
        price: f64,
        extra: Map<String, Value>,
    ) -> Result<Record> {
        if self.records.is_none() {
            self.load().await?;
        }
        let records = match self.records.as_mut() {
            Some(records) => records,
            None => {
                return Err(ApiError::DataUnavailable(
                    "record cache empty after load".to_string(),
                ))
            }
        };

        let next_id = records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let record = Record {
            id: next_id,
            name,
            price,
            extra,
        };
        records.push(record.clone());

        if let Err(err) = self.persist().await {
            if let Some(records) = self.records.as_mut() {
                records.pop();
            }
            return Err(err);
        }

        // Remember our own write so the file watcher does not dump the cache.
        self.loaded_mtime = file_mtime(&self.path).await;

        Ok(record)
    }

    // == Load ==
    /// Reads and parses the backing file into the cache.
    async fn load(&mut self) -> Result<()> {
        let bytes = fs::read(&self.path).await.map_err(|err| {
            ApiError::DataUnavailable(format!(
                "failed to read {}: {}",
                self.path.display(),
                err
            ))
        })?;

        let records: Vec<Record> = serde_json::from_slice(&bytes).map_err(|err| {
            ApiError::DataUnavailable(format!(
                "failed to parse {}: {}",
                self.path.display(),
                err
            ))
        })?;

        debug!(
            "loaded {} records from {}",
            records.len(),
            self.path.display()
        );

        self.loaded_mtime = file_mtime(&self.path).await;
        self.records = Some(records);
        Ok(())
    }

    // == Persist ==
    /// Writes the cached records back to the file via a temp-file rename.
    async fn persist(&self) -> Result<()> {
        let records = self.records.as_deref().unwrap_or(&[]);
        let bytes = serde_json::to_vec_pretty(records).map_err(|err| {
            ApiError::DataUnavailable(format!(
                "failed to encode {}: {}",
                self.path.display(),
                err
            ))
        })?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &bytes).await.map_err(|err| {
            ApiError::DataUnavailable(format!("failed to write {}: {}", tmp.display(), err))
        })?;
        fs::rename(&tmp, &self.path).await.map_err(|err| {
            ApiError::DataUnavailable(format!(
                "failed to replace {}: {}",
                self.path.display(),
                err
            ))
        })?;

        Ok(())
    }
}

// == Utility Functions ==
/// Returns the file's modification time, or None when it cannot be read.
async fn file_mtime(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).await.ok().and_then(|m| m.modified().ok())
}
