//! Leaderboard gateway - best-effort score storage for finished runs.
//!
//! Gameplay never waits on this crate. Scores live in three places, each
//! allowed to fail independently:
//!
//! | Store | Where | Role |
//! |-------|-------|------|
//! | [`local::LocalStore`] | JSON file | fallback and offline copy |
//! | [`cache::ScoreCache`] | JSON file with timestamp | avoids a remote round trip for 5 minutes |
//! | [`remote::RemoteStore`] | JSON key-value bin over HTTPS | shared scores |
//!
//! [`gateway::Leaderboard`] combines them and never returns an error; a
//! failure shows up as a warning on the [`gateway::ScoreReport`].
//! [`runtime::LeaderboardHandle`] runs the gateway on its own tokio runtime
//! so the synchronous game loop only ever does `try_send`/`try_recv`.

pub mod cache;
pub mod config;
pub mod entry;
pub mod error;
pub mod gateway;
pub mod local;
pub mod remote;
pub mod runtime;

pub use tui_snake_types as types;

pub use config::{LeaderboardConfig, RemoteConfig};
pub use entry::{merge, normalize_name, rank, LeaderboardEntry};
pub use error::{LeaderboardError, Result};
pub use gateway::{Leaderboard, ScoreReport, ScoreSource};
pub use runtime::{LeaderboardHandle, LeaderboardRequest, LeaderboardUpdate};
