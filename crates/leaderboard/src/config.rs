//! Leaderboard configuration from environment variables.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `SNAKE_SCORES_PATH` | `snake_leaderboard.json` |
//! | `SNAKE_CACHE_PATH` | `snake_leaderboard_cache.json` |
//! | `SNAKE_LEADERBOARD_URL` | `https://api.jsonbin.io/v3` |
//! | `SNAKE_LEADERBOARD_BIN` | unset (remote disabled) |
//! | `SNAKE_LEADERBOARD_KEY` | unset |
//! | `SNAKE_LEADERBOARD_TIMEOUT_MS` | `5000` |
//! | `SNAKE_LEADERBOARD_DISABLED` | unset (`1`/`true` disables everything) |

use std::path::PathBuf;

use crate::types::LEADERBOARD_CACHE_TTL_MS;

pub const DEFAULT_SCORES_PATH: &str = "snake_leaderboard.json";
pub const DEFAULT_CACHE_PATH: &str = "snake_leaderboard_cache.json";
pub const DEFAULT_REMOTE_URL: &str = "https://api.jsonbin.io/v3";
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;

/// Remote JSON bin coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    pub base_url: String,
    pub bin_id: String,
    pub api_key: Option<String>,
    pub timeout_ms: u64,
}

impl RemoteConfig {
    pub fn new(base_url: impl Into<String>, bin_id: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            bin_id: bin_id.into(),
            api_key: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardConfig {
    pub disabled: bool,
    pub scores_path: PathBuf,
    pub cache_path: PathBuf,
    pub cache_ttl_ms: u64,
    /// `None` keeps scores local only.
    pub remote: Option<RemoteConfig>,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            disabled: false,
            scores_path: PathBuf::from(DEFAULT_SCORES_PATH),
            cache_path: PathBuf::from(DEFAULT_CACHE_PATH),
            cache_ttl_ms: LEADERBOARD_CACHE_TTL_MS,
            remote: None,
        }
    }
}

impl LeaderboardConfig {
    /// Local-only config rooted at the given paths.
    pub fn local(scores_path: impl Into<PathBuf>, cache_path: impl Into<PathBuf>) -> Self {
        Self {
            scores_path: scores_path.into(),
            cache_path: cache_path.into(),
            ..Self::default()
        }
    }

    pub fn with_remote(mut self, remote: RemoteConfig) -> Self {
        self.remote = Some(remote);
        self
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the process environment in `from_env`).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let disabled = non_empty("SNAKE_LEADERBOARD_DISABLED")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        let remote = non_empty("SNAKE_LEADERBOARD_BIN").map(|bin_id| RemoteConfig {
            base_url: non_empty("SNAKE_LEADERBOARD_URL")
                .unwrap_or_else(|| DEFAULT_REMOTE_URL.to_string()),
            bin_id,
            api_key: non_empty("SNAKE_LEADERBOARD_KEY"),
            timeout_ms: non_empty("SNAKE_LEADERBOARD_TIMEOUT_MS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_MS),
        });

        Self {
            disabled,
            scores_path: non_empty("SNAKE_SCORES_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SCORES_PATH)),
            cache_path: non_empty("SNAKE_CACHE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE_PATH)),
            cache_ttl_ms: LEADERBOARD_CACHE_TTL_MS,
            remote,
        }
    }
}
