//! Source backed by a JSON snapshot of the history store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::SourceError;
use crate::site::Site;

use super::HistorySource;

/// On-disk shape: `{ "frecency": [...], "pinned": [...] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistorySnapshot {
    #[serde(default)]
    pub frecency: Vec<Site>,
    #[serde(default)]
    pub pinned: Vec<Site>,
}

/// Re-reads the snapshot file on every query, so each fetch sees the file as
/// it is at that moment.
#[derive(Debug, Clone)]
pub struct SnapshotHistory {
    path: PathBuf,
}

impl SnapshotHistory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<HistorySnapshot, SourceError> {
        let path = self.path.display().to_string();
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|err| SourceError::Io { path: path.clone(), err })?;
        serde_json::from_slice(&bytes).map_err(|err| SourceError::Parse { path, err })
    }
}

#[async_trait]
impl HistorySource for SnapshotHistory {
    async fn frecency_ranked(&self, limit: usize) -> Result<Vec<Site>, SourceError> {
        let mut sites = self.read().await?.frecency;
        sites.truncate(limit);
        Ok(sites)
    }

    async fn pinned(&self) -> Result<Vec<Site>, SourceError> {
        Ok(self.read().await?.pinned)
    }
}
