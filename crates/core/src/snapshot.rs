//! Plain-data game snapshot for renderers and tests.

use crate::types::{Difficulty, Direction, Lifecycle, Position, INITIAL_DIRECTION};

/// Read-only copy of everything a view needs to draw one frame.
///
/// `snake` is tail first, head last. Reuse one snapshot across frames with
/// [`GameState::snapshot_into`](crate::GameState::snapshot_into) to keep the
/// allocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub snake: Vec<Position>,
    pub food: Position,
    pub direction: Direction,
    pub difficulty: Difficulty,
    pub lifecycle: Lifecycle,
    pub score: u32,
    pub tick_count: u32,
    pub episode_id: u32,
    pub seed: u64,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.snake.clear();
        self.food = Position::default();
        self.direction = INITIAL_DIRECTION;
        self.difficulty = Difficulty::default();
        self.lifecycle = Lifecycle::Running;
        self.score = 0;
        self.tick_count = 0;
        self.episode_id = 0;
        self.seed = 0;
    }

    pub fn head(&self) -> Option<Position> {
        self.snake.last().copied()
    }

    pub fn length(&self) -> usize {
        self.snake.len()
    }

    pub fn paused(&self) -> bool {
        self.lifecycle == Lifecycle::Paused
    }

    pub fn game_over(&self) -> bool {
        self.lifecycle == Lifecycle::Over
    }

    pub fn playable(&self) -> bool {
        self.lifecycle == Lifecycle::Running
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            snake: Vec::with_capacity(64),
            food: Position::default(),
            direction: INITIAL_DIRECTION,
            difficulty: Difficulty::default(),
            lifecycle: Lifecycle::Running,
            score: 0,
            tick_count: 0,
            episode_id: 0,
            seed: 0,
        }
    }
}
