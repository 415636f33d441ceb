//! Time-boxed copy of the last remote score list.
//!
//! Stored as `{"data": [...], "timestamp": <unix ms>}`. An expired file is
//! deleted on read.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::entry::LeaderboardEntry;
use crate::error::Result;

#[derive(Debug, Serialize, Deserialize)]
struct CacheFile {
    data: Vec<LeaderboardEntry>,
    timestamp: u64,
}

#[derive(Debug, Clone)]
pub struct ScoreCache {
    path: PathBuf,
    ttl_ms: u64,
}

impl ScoreCache {
    pub fn new(path: impl Into<PathBuf>, ttl_ms: u64) -> Self {
        Self {
            path: path.into(),
            ttl_ms,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn ttl_ms(&self) -> u64 {
        self.ttl_ms
    }

    /// Cached entries if written less than `ttl_ms` before `now_ms`.
    pub async fn get(&self, now_ms: u64) -> Option<Vec<LeaderboardEntry>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                if e.kind() != ErrorKind::NotFound {
                    log::warn!("cannot read score cache {}: {}", self.path.display(), e);
                }
                return None;
            }
        };

        let cached: CacheFile = match serde_json::from_slice(&bytes) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("ignoring corrupt score cache {}: {}", self.path.display(), e);
                return None;
            }
        };

        if now_ms.saturating_sub(cached.timestamp) > self.ttl_ms {
            log::debug!("score cache expired");
            if let Err(e) = self.clear().await {
                log::warn!("cannot remove expired score cache: {}", e);
            }
            return None;
        }
        Some(cached.data)
    }

    pub async fn put(&self, entries: &[LeaderboardEntry], now_ms: u64) -> Result<()> {
        let file = CacheFile {
            data: entries.to_vec(),
            timestamp: now_ms,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, serde_json::to_vec(&file)?).await?;
        Ok(())
    }

    /// Remove the cache file; a missing file is not an error.
    pub async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
