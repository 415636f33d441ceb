//! Engine crate: drives the core state machine in time.
//!
//! - [`config`]: game settings from environment variables
//! - [`scheduler`]: fixed-period tick timer over caller-supplied milliseconds
//! - [`session`]: the single owner of game state, input, timer and the score boundary
//!
//! The scheduler and session never read a clock on their own; the game loop passes `now_ms`
//! from a [`Clock`], and tests pass plain numbers.

pub mod config;
pub mod scheduler;
pub mod session;

pub use tui_snake_types as types;

pub use config::GameConfig;
pub use scheduler::{Clock, TickScheduler, MAX_CATCH_UP_TICKS};
pub use session::{NullSink, RecordingSink, ScoreSink, Session};
