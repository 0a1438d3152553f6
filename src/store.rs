//! Snapshot persistence.
//!
//! Each venue owns one JSON file inside the store directory. Files are
//! rewritten in full on every save; nothing is appended or rotated.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

use crate::errors::{AppError, Result};
use crate::models::PriceRecord;

#[derive(Debug, Clone)]
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Write `records` as a pretty-printed JSON array, replacing any prior content.
    pub async fn save(&self, name: &str, records: &[PriceRecord]) -> Result<PathBuf> {
        let path = self.path_for(name);
        let body = serde_json::to_vec_pretty(records)?;
        fs::write(&path, body)
            .await
            .map_err(|e| AppError::io(&path, e))?;
        debug!(path = %path.display(), records = records.len(), "[STORE] snapshot written");
        Ok(path)
    }

    pub async fn load(&self, name: &str) -> Result<Vec<PriceRecord>> {
        let path = self.path_for(name);
        let raw = fs::read(&path).await.map_err(|e| AppError::io(&path, e))?;
        Ok(serde_json::from_slice(&raw)?)
    }
}
