//! Game configuration from environment variables.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `SNAKE_DIFFICULTY` | `medium` |
//! | `SNAKE_SEED` | derived from the clock |
//! | `SNAKE_PLAYER` | unset (prefills the name asked for after a scoring run) |
//! | `SNAKE_LOG_PATH` | `tui-snake.log` |
//! | `SNAKE_LOG_LEVEL` | `info` |
//! | `SNAKE_NO_MOUSE` | unset (`1`/`true` leaves the mouse to the terminal) |

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use log::LevelFilter;

use crate::types::Difficulty;

pub const DEFAULT_LOG_PATH: &str = "tui-snake.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub difficulty: Difficulty,
    pub seed: u64,
    pub player: Option<String>,
    pub log_path: PathBuf,
    pub log_level: LevelFilter,
    pub mouse: bool,
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let difficulty = non_empty("SNAKE_DIFFICULTY")
            .and_then(|s| Difficulty::from_str(&s))
            .unwrap_or_default();

        let seed = non_empty("SNAKE_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(clock_seed);

        let log_level = non_empty("SNAKE_LOG_LEVEL")
            .and_then(|s| s.parse().ok())
            .unwrap_or(LevelFilter::Info);

        let mouse = !non_empty("SNAKE_NO_MOUSE")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        Self {
            difficulty,
            seed,
            player: non_empty("SNAKE_PLAYER"),
            log_path: non_empty("SNAKE_LOG_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_PATH)),
            log_level,
            mouse,
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_from_lookup() {
        let config = GameConfig::from_lookup(|key| match key {
            "SNAKE_DIFFICULTY" => Some("Hard".into()),
            "SNAKE_SEED" => Some("42".into()),
            "SNAKE_PLAYER" => Some(" ada ".into()),
            "SNAKE_LOG_LEVEL" => Some("debug".into()),
            "SNAKE_NO_MOUSE" => Some("1".into()),
            _ => None,
        });
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.seed, 42);
        assert_eq!(config.player.as_deref(), Some("ada"));
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert!(!config.mouse);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = GameConfig::from_lookup(|key| match key {
            "SNAKE_DIFFICULTY" => Some("nightmare".into()),
            "SNAKE_LOG_LEVEL" => Some("loud".into()),
            _ => None,
        });
        assert_eq!(config.difficulty, Difficulty::Medium);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config.player, None);
        assert_eq!(config.log_path, PathBuf::from(DEFAULT_LOG_PATH));
        assert!(config.mouse);
    }
}
