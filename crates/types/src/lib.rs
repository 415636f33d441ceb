//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, leaderboard I/O).
//!
//! # Board Dimensions
//!
//! The playfield is a fixed square grid:
//!
//! - **Size**: 20x20 cells (indexed 0-19 on both axes)
//! - **Origin**: (0, 0) is the top-left cell, `y` grows downwards
//! - **Spawn layout**: (10,10) (11,10) (12,10), tail first, moving right
//!
//! # Tick Intervals by Difficulty
//!
//! | Difficulty | Interval |
//! |------------|----------|
//! | Easy | 150ms |
//! | Medium | 100ms |
//! | Hard | 50ms |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Difficulty, Direction, Position, BOARD_SIZE};
//!
//! assert_eq!(Direction::Up.opposite(), Direction::Down);
//! assert_eq!(Difficulty::from_str("HARD"), Some(Difficulty::Hard));
//! assert_eq!(Difficulty::Hard.tick_ms(), 50);
//!
//! let p = Position::new(3, 4);
//! assert_eq!(p.offset(1, -1), Position::new(4, 3));
//! assert_eq!(BOARD_SIZE, 20);
//! ```

/// Board width and height in cells (20x20)
pub const BOARD_SIZE: i16 = 20;

/// Number of cells on the board
pub const BOARD_CELLS: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Initial snake layout, tail first, head last.
pub const INITIAL_SNAKE: [Position; 3] = [
    Position::new(10, 10),
    Position::new(11, 10),
    Position::new(12, 10),
];

/// Direction the snake moves in after a start or reset.
pub const INITIAL_DIRECTION: Direction = Direction::Right;

/// Rows shown by the leaderboard panel.
pub const MAX_LEADERBOARD_ENTRIES: usize = 25;

/// Entries kept in the local and remote score lists.
pub const REMOTE_MAX_ENTRIES: usize = 100;

/// Longest player name accepted on a leaderboard entry.
pub const MAX_NAME_LEN: usize = 20;

/// Name used when the player leaves the name blank.
pub const DEFAULT_PLAYER_NAME: &str = "Anonymous";

/// Lifetime of the shared leaderboard cache (5 minutes).
pub const LEADERBOARD_CACHE_TTL_MS: u64 = 5 * 60 * 1000;


/// A cell coordinate on the board
///
/// Coordinates are signed so that a step off the board (e.g. `x = -1`) is
/// representable and can be rejected by the bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Position shifted by `(dx, dy)`
    pub const fn offset(self, dx: i16, dy: i16) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Movement directions
///
/// `Up` decreases `y`, `Down` increases it (screen coordinates).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The direction that would reverse the snake into itself
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// assert_eq!(Direction::Down.opposite(), Direction::Up);
    /// ```
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit step `(dx, dy)` for this direction
    pub fn delta(self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Game speed presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Tick interval in milliseconds (slower → faster)
    pub fn tick_ms(self) -> u32 {
        match self {
            Difficulty::Easy => 150,
            Difficulty::Medium => 100,
            Difficulty::Hard => 50,
        }
    }

    /// Parse difficulty from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_str("easy"), Some(Difficulty::Easy));
    /// assert_eq!(Difficulty::from_str("Medium"), Some(Difficulty::Medium));
    /// assert_eq!(Difficulty::from_str("nightmare"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Capitalized label for display
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Game lifecycle
///
/// - **Running**: ticks advance the snake (initial state)
/// - **Paused**: frozen, resumable with a pause toggle
/// - **Over**: terminal until an explicit restart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lifecycle {
    #[default]
    Running,
    Paused,
    Over,
}

impl Lifecycle {
    pub fn as_str(self) -> &'static str {
        match self {
            Lifecycle::Running => "running",
            Lifecycle::Paused => "paused",
            Lifecycle::Over => "over",
        }
    }
}

/// Game actions that can be applied to modify game state
///
/// These actions are produced by keyboard, mouse and on-screen controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Request a new heading for the next tick
    Turn(Direction),
    /// Toggle pause state
    Pause,
    /// Start a fresh run (only meaningful after game over)
    Restart,
    /// Change speed (only accepted between runs)
    SetDifficulty(Difficulty),
}

impl GameAction {
    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Turn(Direction::Up) => "turnUp",
            GameAction::Turn(Direction::Down) => "turnDown",
            GameAction::Turn(Direction::Left) => "turnLeft",
            GameAction::Turn(Direction::Right) => "turnRight",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
            GameAction::SetDifficulty(Difficulty::Easy) => "difficultyEasy",
            GameAction::SetDifficulty(Difficulty::Medium) => "difficultyMedium",
            GameAction::SetDifficulty(Difficulty::Hard) => "difficultyHard",
        }
    }
}

/// What a board cell shows after projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellTag {
    #[default]
    Empty,
    Body,
    Head,
    Food,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndCause {
    /// Head left the board
    Wall,
    /// Head ran into the snake's own body
    SelfHit,
    /// The snake fills every cell; no food can be placed
    BoardFull,
}

impl EndCause {
    pub fn as_str(self) -> &'static str {
        match self {
            EndCause::Wall => "wall",
            EndCause::SelfHit => "self",
            EndCause::BoardFull => "board_full",
        }
    }
}

/// Core-side event emitted on the Running → Over transition.
///
/// Taken by the session and forwarded to the leaderboard boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    GameOver {
        score: u32,
        length: u32,
        difficulty: Difficulty,
        cause: EndCause,
    },
}
