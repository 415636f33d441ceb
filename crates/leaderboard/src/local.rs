//! Local score file: a JSON array of entries, replaced on every save.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::entry::LeaderboardEntry;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored entries; a missing or unreadable file reads as empty.
    pub async fn load(&self) -> Vec<LeaderboardEntry> {
        match self.try_load().await {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("ignoring local scores at {}: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }

    async fn try_load(&self) -> Result<Vec<LeaderboardEntry>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub async fn save(&self, entries: &[LeaderboardEntry]) -> Result<()> {
        let json = serde_json::to_vec_pretty(entries)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}
