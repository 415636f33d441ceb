//! Leaderboard runtime integration.
//!
//! Bridges the sync game loop with the async gateway. Requests are handled
//! one at a time in arrival order, so a refresh queued after a submit sees
//! the submitted score.

use tokio::runtime::Runtime;
use tokio::sync::mpsc;

use crate::config::LeaderboardConfig;
use crate::error::Result;
use crate::gateway::{Leaderboard, ScoreReport};

/// Requests queued before the loop starts dropping them.
pub const MAX_PENDING_REQUESTS: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeaderboardRequest {
    Refresh,
    Submit { name: String, score: u32 },
}

/// Result delivered back to the game loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeaderboardUpdate {
    Loaded(ScoreReport),
    Submitted { score: u32, report: ScoreReport },
}

impl LeaderboardUpdate {
    pub fn report(&self) -> &ScoreReport {
        match self {
            LeaderboardUpdate::Loaded(report) => report,
            LeaderboardUpdate::Submitted { report, .. } => report,
        }
    }
}

/// Running leaderboard worker. Dropping it shuts the worker down.
pub struct LeaderboardHandle {
    _rt: Runtime,
    req_tx: mpsc::Sender<LeaderboardRequest>,
    update_rx: mpsc::Receiver<LeaderboardUpdate>,
}

impl LeaderboardHandle {
    /// Start from environment variables.
    ///
    /// Returns `Ok(None)` if `SNAKE_LEADERBOARD_DISABLED` is set.
    pub fn start_from_env() -> Result<Option<Self>> {
        Self::start(LeaderboardConfig::from_env())
    }

    pub fn start(config: LeaderboardConfig) -> Result<Option<Self>> {
        if config.disabled {
            log::info!("leaderboard disabled");
            return Ok(None);
        }

        let board = Leaderboard::from_config(&config)?;
        log::info!(
            "leaderboard started (remote: {}, local: {})",
            if board.has_remote() { "on" } else { "off" },
            config.scores_path.display()
        );

        let (req_tx, mut req_rx) = mpsc::channel::<LeaderboardRequest>(MAX_PENDING_REQUESTS);
        let (update_tx, update_rx) = mpsc::channel::<LeaderboardUpdate>(MAX_PENDING_REQUESTS);

        let rt = Runtime::new()?;
        rt.spawn(async move {
            while let Some(req) = req_rx.recv().await {
                let update = match req {
                    LeaderboardRequest::Refresh => LeaderboardUpdate::Loaded(board.get_scores().await),
                    LeaderboardRequest::Submit { name, score } => LeaderboardUpdate::Submitted {
                        score,
                        report: board.submit_score(&name, score).await,
                    },
                };
                if update_tx.send(update).await.is_err() {
                    break;
                }
            }
        });

        Ok(Some(Self {
            _rt: rt,
            req_tx,
            update_rx,
        }))
    }

    /// Queue a reload; returns false if the queue is full.
    pub fn refresh(&self) -> bool {
        self.enqueue(LeaderboardRequest::Refresh)
    }

    /// Queue a score. Zero scores are never submitted.
    pub fn submit(&self, name: &str, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        self.enqueue(LeaderboardRequest::Submit {
            name: name.to_string(),
            score,
        })
    }

    fn enqueue(&self, req: LeaderboardRequest) -> bool {
        match self.req_tx.try_send(req) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("leaderboard request dropped: {}", e);
                false
            }
        }
    }

    pub fn try_recv(&mut self) -> Option<LeaderboardUpdate> {
        self.update_rx.try_recv().ok()
    }
}
