//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the view draws into a plain
//! framebuffer and the renderer flushes it through crossterm. No widget
//! toolkit.
//!
//! - [`fb`]: styled character grid
//! - [`game_view`]: snapshot + leaderboard → framebuffer (pure)
//! - [`renderer`]: raw mode, alternate screen, mouse capture, diffed flush

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, BoardLayout, GameView, LeaderboardView, NameEntry, ScoreRow, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
