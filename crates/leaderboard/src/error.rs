use thiserror::Error;

#[derive(Debug, Error)]
pub enum LeaderboardError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("remote returned status {0}")]
    Status(u16),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("remote leaderboard is not configured")]
    Disabled,
}

pub type Result<T> = std::result::Result<T, LeaderboardError>;
