//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical food placement
//! - **Testable**: Unit tests for every lifecycle transition
//! - **Portable**: Runs in the terminal, headless benches or tests alike
//!
//! # Module Structure
//!
//! - [`grid`]: 20x20 board bounds and position arithmetic
//! - [`food`]: Rejection-sampled food placement with a free-cell fallback
//! - [`game_state`]: Snake, food, direction, score and the Running/Paused/Over lifecycle
//! - [`snapshot`]: Read-only frame copy for views
//! - [`projection`]: Snapshot to Empty/Body/Head/Food cell tags
//!
//! # Game Rules
//!
//! - The snake moves one cell per tick in its current direction
//! - Eating food adds one point and one segment; food respawns off the snake
//! - Leaving the board or hitting the body ends the run
//! - A turn can never reverse the snake onto itself
//! - Difficulty (tick interval) only changes between runs
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{GameState, TickOutcome};
//! use tui_snake_types::{Direction, GameAction};
//!
//! let mut game = GameState::new(12345);
//! game.apply_action(GameAction::Turn(Direction::Up));
//!
//! assert_ne!(game.tick(), TickOutcome::Idle);
//! assert_eq!(game.direction(), Direction::Up);
//! ```
//!
//! # Timing
//!
//! The state machine has no clock. Call [`GameState::tick`](game_state::GameState::tick)
//! once per scheduler period; the period comes from
//! [`Difficulty::tick_ms`](tui_snake_types::Difficulty::tick_ms).

pub mod food;
pub mod game_state;
pub mod grid;
pub mod projection;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use food::spawn_food;
pub use game_state::{CollisionRule, GameState, TickOutcome};
pub use grid::{is_out_of_bounds, next_head, Occupancy};
pub use projection::{project, project_into, CellGrid};
pub use snapshot::GameSnapshot;
