//! Gateway: cache, remote and local stores behind two calls that never fail.

use crate::cache::ScoreCache;
use crate::config::LeaderboardConfig;
use crate::entry::{merge, LeaderboardEntry};
use crate::error::{LeaderboardError, Result};
use crate::local::LocalStore;
use crate::remote::RemoteStore;
use crate::types::REMOTE_MAX_ENTRIES;

pub const FETCH_FALLBACK_WARNING: &str = "Using local scores - remote sync unavailable";
pub const SUBMIT_FALLBACK_WARNING: &str = "Score saved locally - remote sync unavailable";

/// Where a [`ScoreReport`]'s entries came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreSource {
    Cache,
    Remote,
    Local,
}

impl ScoreSource {
    pub fn as_str(self) -> &'static str {
        match self {
            ScoreSource::Cache => "cache",
            ScoreSource::Remote => "remote",
            ScoreSource::Local => "local",
        }
    }
}

/// Scores ranked highest first, plus a user-facing warning when the
/// remote could not be reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreReport {
    pub entries: Vec<LeaderboardEntry>,
    pub source: ScoreSource,
    pub warning: Option<String>,
}

impl ScoreReport {
    fn ok(entries: Vec<LeaderboardEntry>, source: ScoreSource) -> Self {
        Self {
            entries,
            source,
            warning: None,
        }
    }

    fn fallback(entries: Vec<LeaderboardEntry>, warning: &str) -> Self {
        Self {
            entries,
            source: ScoreSource::Local,
            warning: Some(warning.to_string()),
        }
    }
}

/// Wall-clock unix milliseconds, used for cache timestamps.
pub fn unix_ms() -> u64 {
    chrono::Utc::now().timestamp_millis().max(0) as u64
}

pub struct Leaderboard {
    local: LocalStore,
    cache: ScoreCache,
    remote: Option<RemoteStore>,
}

impl Leaderboard {
    pub fn new(local: LocalStore, cache: ScoreCache, remote: Option<RemoteStore>) -> Self {
        Self {
            local,
            cache,
            remote,
        }
    }

    pub fn from_config(config: &LeaderboardConfig) -> Result<Self> {
        let remote = config.remote.clone().map(RemoteStore::new).transpose()?;
        Ok(Self::new(
            LocalStore::new(&config.scores_path),
            ScoreCache::new(&config.cache_path, config.cache_ttl_ms),
            remote,
        ))
    }

    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    fn remote(&self) -> Result<&RemoteStore> {
        self.remote.as_ref().ok_or(LeaderboardError::Disabled)
    }

    /// Current scores: fresh cache, else remote, else the local file.
    pub async fn get_scores(&self) -> ScoreReport {
        if self.remote.is_none() {
            return ScoreReport::ok(self.local.load().await, ScoreSource::Local);
        }

        if let Some(entries) = self.cache.get(unix_ms()).await {
            return ScoreReport::ok(entries, ScoreSource::Cache);
        }

        match self.fetch_remote().await {
            Ok(entries) => {
                if let Err(e) = self.cache.put(&entries, unix_ms()).await {
                    log::warn!("failed to cache scores: {}", e);
                }
                ScoreReport::ok(entries, ScoreSource::Remote)
            }
            Err(e) => {
                log::warn!("remote scores unavailable, using local fallback: {}", e);
                ScoreReport::fallback(self.local.load().await, FETCH_FALLBACK_WARNING)
            }
        }
    }

    async fn fetch_remote(&self) -> Result<Vec<LeaderboardEntry>> {
        self.remote()?.fetch().await
    }

    /// Record a finished run.
    ///
    /// With a remote configured the merged list is pushed there and mirrored
    /// into the cache and the local file. If the push fails the entry is
    /// merged into the local file only.
    pub async fn submit_score(&self, name: &str, score: u32) -> ScoreReport {
        self.submit_entry(LeaderboardEntry::new(name, score)).await
    }

    pub async fn submit_entry(&self, entry: LeaderboardEntry) -> ScoreReport {
        log::info!("submitting score {} for {}", entry.score, entry.name);

        if self.remote.is_none() {
            let entries = self.save_locally(entry).await;
            return ScoreReport::ok(entries, ScoreSource::Local);
        }

        let current = self.get_scores().await.entries;
        let updated = merge(current, entry.clone(), REMOTE_MAX_ENTRIES);

        match self.push_remote(&updated).await {
            Ok(()) => {
                if let Err(e) = self.cache.put(&updated, unix_ms()).await {
                    log::warn!("failed to cache scores: {}", e);
                }
                if let Err(e) = self.local.save(&updated).await {
                    log::warn!("failed to save scores locally: {}", e);
                }
                ScoreReport::ok(updated, ScoreSource::Remote)
            }
            Err(e) => {
                log::warn!("remote submit failed, saving locally: {}", e);
                let entries = self.save_locally(entry).await;
                ScoreReport::fallback(entries, SUBMIT_FALLBACK_WARNING)
            }
        }
    }

    async fn push_remote(&self, entries: &[LeaderboardEntry]) -> Result<()> {
        self.remote()?.store(entries).await
    }

    async fn save_locally(&self, entry: LeaderboardEntry) -> Vec<LeaderboardEntry> {
        let entries = merge(self.local.load().await, entry, REMOTE_MAX_ENTRIES);
        if let Err(e) = self.local.save(&entries).await {
            log::warn!("failed to save scores locally: {}", e);
        }
        entries
    }

    pub async fn clear_cache(&self) -> Result<()> {
        self.cache.clear().await
    }
}
