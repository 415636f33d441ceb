//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key and mouse events into [`crate::types::GameAction`]
//! and applies them to a [`tui_snake_core::GameState`] through
//! [`InputController`]. After a scoring run the [`prompt`] module takes
//! over the keyboard for name entry. Nothing here owns a clock or a terminal.

pub mod handler;
pub mod map;
pub mod prompt;
pub mod touch;

pub use tui_snake_types as types;

pub use handler::{InputController, InputStats};
pub use map::{handle_key_event, should_quit, should_refresh};
pub use prompt::{handle_prompt_key, NamePrompt, PromptEdit, PromptResult};
pub use touch::{direction_for_tap, handle_mouse_event, TapArea};
