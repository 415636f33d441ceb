//! Game state module - manages the complete game state
//!
//! This module ties together the grid, food placement and the lifecycle.
//! It handles snake movement, growth, collisions, pause and restart.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::food::spawn_food;
use crate::grid::{is_out_of_bounds, next_head};
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Which snake segments count as an obstacle for the next head.
///
/// Both rules compare against the snake as it stood before the move, so the
/// new head never collides with itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionRule {
    /// Every segment of the pre-move snake blocks, tail included.
    ///
    /// Moving into the cell the tail is about to leave ends the run.
    #[default]
    StrictBody,
    /// Like `StrictBody`, except the tail cell is free on a move that does
    /// not eat (the tail leaves it in the same tick).
    VacatingTail,
}

impl CollisionRule {
    /// Check `new_head` against `snake` (tail first, head last).
    pub fn hits_body(self, snake: &VecDeque<Position>, new_head: Position, growing: bool) -> bool {
        let skip_tail = match self {
            CollisionRule::StrictBody => 0,
            CollisionRule::VacatingTail if growing => 0,
            CollisionRule::VacatingTail => 1,
        };
        // The current head is excluded: a unit step can never land on it.
        let body_len = snake.len().saturating_sub(1);
        snake
            .iter()
            .take(body_len)
            .skip(skip_tail)
            .any(|&segment| segment == new_head)
    }
}

/// Result of a single [`GameState::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running; nothing changed
    Idle,
    /// Snake translated by one cell
    Moved,
    /// Snake ate and grew by one segment
    Ate,
    /// Run ended on this tick
    Ended(EndCause),
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Tail at the front, head at the back.
    snake: VecDeque<Position>,
    food: Position,
    /// Direction the snake moved on its last tick.
    direction: Direction,
    /// Latest accepted turn request, committed at the start of the next tick.
    pending_direction: Option<Direction>,
    difficulty: Difficulty,
    lifecycle: Lifecycle,
    score: u32,
    /// Ticks advanced in the current run.
    tick_count: u32,
    /// Monotonic run id (increments on reset).
    episode_id: u32,
    seed: u64,
    rng: StdRng,
    collision_rule: CollisionRule,
    /// Game over event (consumed by the session).
    last_event: Option<GameEvent>,
}

impl GameState {
    /// Create a new running game with the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self::with_difficulty(seed, Difficulty::default())
    }

    pub fn with_difficulty(seed: u64, difficulty: Difficulty) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let snake: VecDeque<Position> = INITIAL_SNAKE.iter().copied().collect();
        let food = spawn_food(&mut rng, snake.iter()).unwrap_or_default();

        Self {
            snake,
            food,
            direction: INITIAL_DIRECTION,
            pending_direction: None,
            difficulty,
            lifecycle: Lifecycle::Running,
            score: 0,
            tick_count: 0,
            episode_id: 0,
            seed,
            rng,
            collision_rule: CollisionRule::default(),
            last_event: None,
        }
    }

    /// Build a running game from an explicit layout.
    ///
    /// `snake` is tail first, head last. Used for scenario tests and
    /// replays; the layout is taken as given.
    pub fn with_layout(seed: u64, snake: &[Position], food: Position, direction: Direction) -> Self {
        debug_assert!(!snake.is_empty(), "snake needs at least one segment");
        let mut state = Self::new(seed);
        state.snake = snake.iter().copied().collect();
        state.food = food;
        state.direction = direction;
        state
    }

    pub fn with_collision_rule(mut self, rule: CollisionRule) -> Self {
        self.collision_rule = rule;
        self
    }

    pub fn snake(&self) -> &VecDeque<Position> {
        &self.snake
    }

    pub fn head(&self) -> Position {
        // Length >= 1 is an invariant of every constructor.
        self.snake.back().copied().unwrap_or_default()
    }

    pub fn length(&self) -> usize {
        self.snake.len()
    }

    pub fn food(&self) -> Position {
        self.food
    }

    /// Direction of the last move
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    /// Direction the next tick will use
    pub fn heading(&self) -> Direction {
        self.pending_direction.unwrap_or(self.direction)
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn running(&self) -> bool {
        self.lifecycle == Lifecycle::Running
    }

    pub fn paused(&self) -> bool {
        self.lifecycle == Lifecycle::Paused
    }

    pub fn game_over(&self) -> bool {
        self.lifecycle == Lifecycle::Over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn tick_count(&self) -> u32 {
        self.tick_count
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn collision_rule(&self) -> CollisionRule {
        self.collision_rule
    }

    /// Current tick interval in milliseconds
    pub fn tick_ms(&self) -> u32 {
        self.difficulty.tick_ms()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.snake.clear();
        out.snake.extend(self.snake.iter().copied());
        out.food = self.food;
        out.direction = self.direction;
        out.difficulty = self.difficulty;
        out.lifecycle = self.lifecycle;
        out.score = self.score;
        out.tick_count = self.tick_count;
        out.episode_id = self.episode_id;
        out.seed = self.seed;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Main game tick - advance the snake by one cell
    pub fn tick(&mut self) -> TickOutcome {
        if self.lifecycle != Lifecycle::Running {
            return TickOutcome::Idle;
        }

        if let Some(d) = self.pending_direction.take() {
            self.direction = d;
        }

        let new_head = next_head(self.head(), self.direction);
        let growing = new_head == self.food;

        if is_out_of_bounds(new_head) {
            self.end_run(EndCause::Wall);
            return TickOutcome::Ended(EndCause::Wall);
        }
        if self.collision_rule.hits_body(&self.snake, new_head, growing) {
            self.end_run(EndCause::SelfHit);
            return TickOutcome::Ended(EndCause::SelfHit);
        }

        self.snake.push_back(new_head);
        self.tick_count = self.tick_count.wrapping_add(1);

        if growing {
            self.score += 1;
            match spawn_food(&mut self.rng, self.snake.iter()) {
                Some(food) => self.food = food,
                None => {
                    self.end_run(EndCause::BoardFull);
                    return TickOutcome::Ended(EndCause::BoardFull);
                }
            }
            TickOutcome::Ate
        } else {
            self.snake.pop_front();
            TickOutcome::Moved
        }
    }

    fn end_run(&mut self, cause: EndCause) {
        self.lifecycle = Lifecycle::Over;
        self.pending_direction = None;
        self.last_event = Some(GameEvent::GameOver {
            score: self.score,
            length: self.snake.len() as u32,
            difficulty: self.difficulty,
            cause,
        });
        log::info!(
            "run {} over ({}): score {}, length {}, {} ticks",
            self.episode_id,
            cause.as_str(),
            self.score,
            self.snake.len(),
            self.tick_count
        );
    }

    /// Request a new heading for the next tick.
    ///
    /// Ignored once the run is over, and for the reverse of the direction
    /// the snake last moved in. A later request before the next tick
    /// replaces an earlier one.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.lifecycle == Lifecycle::Over {
            return false;
        }
        if direction == self.direction.opposite() {
            return false;
        }
        self.pending_direction = Some(direction);
        true
    }

    /// Flip Running ↔ Paused; ignored once the run is over
    pub fn toggle_pause(&mut self) -> bool {
        self.lifecycle = match self.lifecycle {
            Lifecycle::Running => Lifecycle::Paused,
            Lifecycle::Paused => Lifecycle::Running,
            Lifecycle::Over => return false,
        };
        true
    }

    /// Change speed; only accepted between runs
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> bool {
        if self.lifecycle != Lifecycle::Over {
            return false;
        }
        if self.difficulty != difficulty {
            log::debug!(
                "difficulty {} -> {}",
                self.difficulty.as_str(),
                difficulty.as_str()
            );
        }
        self.difficulty = difficulty;
        true
    }

    /// Start a fresh run with the same difficulty.
    ///
    /// The RNG stream continues, so consecutive runs get different food.
    pub fn reset(&mut self) {
        self.snake.clear();
        self.snake.extend(INITIAL_SNAKE.iter().copied());
        self.food = spawn_food(&mut self.rng, self.snake.iter()).unwrap_or_default();
        self.direction = INITIAL_DIRECTION;
        self.pending_direction = None;
        self.lifecycle = Lifecycle::Running;
        self.score = 0;
        self.tick_count = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.last_event = None;
        log::info!(
            "run {} started at {}",
            self.episode_id,
            self.difficulty.as_str()
        );
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Turn(d) => self.set_direction(d),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => {
                self.reset();
                true
            }
            GameAction::SetDifficulty(d) => self.set_difficulty(d),
        }
    }

    /// Take and clear the last game over event.
    pub fn take_event(&mut self) -> Option<GameEvent> {
        self.last_event.take()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: i16, y: i16) -> Position {
        Position::new(x, y)
    }

    fn initial_layout() -> Vec<Position> {
        INITIAL_SNAKE.to_vec()
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert_eq!(state.lifecycle(), Lifecycle::Running);
        assert_eq!(state.score(), 0);
        assert_eq!(state.direction(), Direction::Right);
        assert_eq!(state.difficulty(), Difficulty::Medium);
        assert_eq!(state.episode_id(), 0);
        assert_eq!(state.snake().iter().copied().collect::<Vec<_>>(), initial_layout());
        assert_eq!(state.head(), pos(12, 10));
        assert!(!state.snake().contains(&state.food()));
    }

    #[test]
    fn test_tick_translates_snake() {
        let mut state = GameState::with_layout(1, &initial_layout(), pos(0, 0), Direction::Right);

        assert_eq!(state.tick(), TickOutcome::Moved);
        assert_eq!(
            state.snake().iter().copied().collect::<Vec<_>>(),
            vec![pos(11, 10), pos(12, 10), pos(13, 10)]
        );
        assert_eq!(state.score(), 0);
        assert_eq!(state.tick_count(), 1);
    }

    #[test]
    fn test_tick_eats_and_grows() {
        let mut state = GameState::with_layout(1, &initial_layout(), pos(13, 10), Direction::Right);

        assert_eq!(state.tick(), TickOutcome::Ate);
        assert_eq!(
            state.snake().iter().copied().collect::<Vec<_>>(),
            vec![pos(10, 10), pos(11, 10), pos(12, 10), pos(13, 10)]
        );
        assert_eq!(state.score(), 1);
        assert!(!state.snake().contains(&state.food()));
    }

    #[test]
    fn test_wall_ends_run_without_moving() {
        let layout = [pos(2, 10), pos(1, 10), pos(0, 10)];
        let mut state = GameState::with_layout(1, &layout, pos(5, 5), Direction::Left);

        assert_eq!(state.tick(), TickOutcome::Ended(EndCause::Wall));
        assert_eq!(state.lifecycle(), Lifecycle::Over);
        assert_eq!(state.snake().iter().copied().collect::<Vec<_>>(), layout.to_vec());
        assert!(matches!(
            state.take_event(),
            Some(GameEvent::GameOver { score: 0, cause: EndCause::Wall, .. })
        ));
        assert!(state.take_event().is_none());
    }

    #[test]
    fn test_self_collision_ends_run() {
        // Head at (5,6) moving up into (5,5), which is mid-body.
        let layout = [pos(4, 4), pos(5, 4), pos(5, 5), pos(4, 5), pos(4, 6), pos(5, 6)];
        let mut state = GameState::with_layout(1, &layout, pos(0, 0), Direction::Right);
        assert!(state.set_direction(Direction::Up));

        assert_eq!(state.tick(), TickOutcome::Ended(EndCause::SelfHit));
        assert!(state.game_over());
    }

    #[test]
    fn test_strict_rule_blocks_vacating_tail() {
        // 2x2 loop: head (10,11) moving up into the tail cell (10,10).
        let layout = [pos(10, 10), pos(11, 10), pos(11, 11), pos(10, 11)];
        let mut state = GameState::with_layout(1, &layout, pos(0, 0), Direction::Left);
        assert!(state.set_direction(Direction::Up));

        assert_eq!(state.collision_rule(), CollisionRule::StrictBody);
        assert_eq!(state.tick(), TickOutcome::Ended(EndCause::SelfHit));
    }

    #[test]
    fn test_vacating_tail_rule_allows_chasing_tail() {
        let layout = [pos(10, 10), pos(11, 10), pos(11, 11), pos(10, 11)];
        let mut state = GameState::with_layout(1, &layout, pos(0, 0), Direction::Left)
            .with_collision_rule(CollisionRule::VacatingTail);
        assert!(state.set_direction(Direction::Up));

        assert_eq!(state.tick(), TickOutcome::Moved);
        assert_eq!(state.head(), pos(10, 10));
        assert_eq!(state.length(), 4);
    }

    #[test]
    fn test_vacating_tail_rule_still_blocks_when_growing() {
        let layout = [pos(10, 10), pos(11, 10), pos(11, 11), pos(10, 11)];
        // Food on the tail cell is not reachable in play, but the rule must hold.
        let mut state = GameState::with_layout(1, &layout, pos(10, 10), Direction::Left)
            .with_collision_rule(CollisionRule::VacatingTail);
        assert!(state.set_direction(Direction::Up));

        assert_eq!(state.tick(), TickOutcome::Ended(EndCause::SelfHit));
    }

    #[test]
    fn test_single_segment_snake_grows_without_self_hit() {
        let mut state = GameState::with_layout(1, &[pos(3, 3)], pos(4, 3), Direction::Right);
        assert_eq!(state.tick(), TickOutcome::Ate);
        assert_eq!(state.length(), 2);
        assert_eq!(state.head(), pos(4, 3));
        assert!(state.running());
    }

    #[test]
    fn test_reverse_is_ignored() {
        let mut state = GameState::new(1);
        assert!(!state.set_direction(Direction::Left));
        assert_eq!(state.direction(), Direction::Right);
        assert_eq!(state.pending_direction(), None);
    }

    #[test]
    fn test_latest_turn_wins_before_tick() {
        let mut state = GameState::with_layout(1, &initial_layout(), pos(0, 0), Direction::Right);
        assert!(state.set_direction(Direction::Up));
        assert!(state.set_direction(Direction::Down));
        assert_eq!(state.heading(), Direction::Down);

        state.tick();
        assert_eq!(state.direction(), Direction::Down);
        assert_eq!(state.head(), pos(12, 11));
    }

    #[test]
    fn test_two_quick_turns_cannot_reverse() {
        // Moving right: Up is accepted, but Left is still the reverse of the
        // committed direction, so the snake cannot fold back in one tick.
        let mut state = GameState::with_layout(1, &initial_layout(), pos(0, 0), Direction::Right);
        assert!(state.set_direction(Direction::Up));
        assert!(!state.set_direction(Direction::Left));
        assert_eq!(state.tick(), TickOutcome::Moved);
        assert_eq!(state.head(), pos(12, 9));
    }

    #[test]
    fn test_pause_freezes_tick() {
        let mut state = GameState::new(5);
        let before = state.snapshot();

        assert!(state.toggle_pause());
        assert!(state.paused());
        assert!(state.set_direction(Direction::Up));
        assert_eq!(state.tick(), TickOutcome::Idle);

        let after = state.snapshot();
        assert_eq!(before.snake, after.snake);
        assert_eq!(before.food, after.food);
        assert_eq!(before.score, after.score);
        assert_eq!(before.direction, after.direction);

        assert!(state.toggle_pause());
        assert!(state.running());
    }

    #[test]
    fn test_over_is_terminal_until_reset() {
        let layout = [pos(1, 0), pos(0, 0)];
        let mut state = GameState::with_layout(1, &layout, pos(9, 9), Direction::Left);
        state.tick();
        assert!(state.game_over());

        assert!(!state.toggle_pause());
        assert!(!state.set_direction(Direction::Down));
        assert_eq!(state.tick(), TickOutcome::Idle);
        assert!(state.game_over());

        state.reset();
        assert!(state.running());
    }

    #[test]
    fn test_difficulty_only_between_runs() {
        let mut state = GameState::new(1);
        assert!(!state.set_difficulty(Difficulty::Hard));
        assert_eq!(state.difficulty(), Difficulty::Medium);

        state.toggle_pause();
        assert!(!state.set_difficulty(Difficulty::Hard));
        assert_eq!(state.difficulty(), Difficulty::Medium);

        let mut over = GameState::with_layout(1, &[pos(0, 0)], pos(5, 5), Direction::Up);
        over.tick();
        assert!(over.set_difficulty(Difficulty::Hard));
        assert_eq!(over.difficulty(), Difficulty::Hard);
        assert_eq!(over.tick_ms(), 50);
    }

    #[test]
    fn test_reset_restores_start_layout() {
        let mut state = GameState::with_layout(3, &[pos(0, 5)], pos(9, 9), Direction::Left);
        state.tick();
        assert!(state.game_over());

        state.reset();
        assert_eq!(state.lifecycle(), Lifecycle::Running);
        assert_eq!(state.score(), 0);
        assert_eq!(state.direction(), Direction::Right);
        assert_eq!(state.snake().iter().copied().collect::<Vec<_>>(), initial_layout());
        assert_eq!(state.episode_id(), 1);
        assert!(!state.snake().contains(&state.food()));
    }

    #[test]
    fn test_apply_action_restart_keeps_difficulty() {
        let mut state = GameState::with_layout(3, &[pos(0, 5)], pos(9, 9), Direction::Left);
        state.tick();
        state.apply_action(GameAction::SetDifficulty(Difficulty::Easy));
        assert!(state.apply_action(GameAction::Restart));
        assert_eq!(state.difficulty(), Difficulty::Easy);
        assert!(state.running());
    }

    #[test]
    fn test_board_full_ends_run() {
        // Snake covers every cell but the food at (19,19); the head at
        // (18,19) steps onto it. Segment adjacency does not matter here.
        let mut layout = Vec::new();
        for y in 0..BOARD_SIZE {
            let row: Vec<i16> = if y % 2 == 0 {
                (0..BOARD_SIZE).collect()
            } else {
                (0..BOARD_SIZE).rev().collect()
            };
            for x in row {
                layout.push(pos(x, y));
            }
        }
        layout.retain(|p| p.y != BOARD_SIZE - 1);
        for x in 0..BOARD_SIZE - 1 {
            layout.push(pos(x, BOARD_SIZE - 1));
        }
        let food = pos(BOARD_SIZE - 1, BOARD_SIZE - 1);
        let mut state = GameState::with_layout(1, &layout, food, Direction::Right);

        assert_eq!(state.tick(), TickOutcome::Ended(EndCause::BoardFull));
        assert_eq!(state.score(), 1);
        assert_eq!(state.length(), BOARD_CELLS);
        assert!(state.game_over());
    }
}
