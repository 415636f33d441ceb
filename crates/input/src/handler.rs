//! Input controller: the single path from player intent to game state.
//!
//! Turn requests collapse into the state's one pending direction (the
//! latest valid request before a tick wins; nothing is queued). Pause and
//! turn are dropped once the run is over, while restart and difficulty are
//! always forwarded since they are the only commands that mean anything
//! after game over.

use tui_snake_core::GameState;

use crate::types::GameAction;

/// Counters for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputStats {
    pub accepted: u64,
    pub ignored: u64,
}

#[derive(Debug, Clone, Default)]
pub struct InputController {
    stats: InputStats,
    last_accepted: Option<GameAction>,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one action; returns whether the state accepted it.
    pub fn apply(&mut self, state: &mut GameState, action: GameAction) -> bool {
        let accepted = match action {
            GameAction::Turn(_) | GameAction::Pause if state.game_over() => false,
            _ => state.apply_action(action),
        };

        if accepted {
            self.stats.accepted += 1;
            self.last_accepted = Some(action);
        } else {
            self.stats.ignored += 1;
            log::trace!(
                "ignored {} while {}",
                action.as_str(),
                state.lifecycle().as_str()
            );
        }
        accepted
    }

    pub fn stats(&self) -> InputStats {
        self.stats
    }

    pub fn last_accepted(&self) -> Option<GameAction> {
        self.last_accepted
    }

    pub fn reset_stats(&mut self) {
        self.stats = InputStats::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Difficulty, Direction, Position};

    fn finished_game() -> GameState {
        let mut state = GameState::with_layout(
            1,
            &[Position::new(0, 0)],
            Position::new(5, 5),
            Direction::Left,
        );
        state.tick();
        assert!(state.game_over());
        state
    }

    #[test]
    fn test_turn_sets_pending_direction() {
        let mut state = GameState::new(1);
        let mut input = InputController::new();

        assert!(input.apply(&mut state, GameAction::Turn(Direction::Up)));
        assert_eq!(state.pending_direction(), Some(Direction::Up));
        assert_eq!(input.last_accepted(), Some(GameAction::Turn(Direction::Up)));
    }

    #[test]
    fn test_reverse_counts_as_ignored() {
        let mut state = GameState::new(1);
        let mut input = InputController::new();

        assert!(!input.apply(&mut state, GameAction::Turn(Direction::Left)));
        assert_eq!(input.stats(), InputStats { accepted: 0, ignored: 1 });
    }

    #[test]
    fn test_game_over_drops_turn_and_pause() {
        let mut state = finished_game();
        let mut input = InputController::new();

        assert!(!input.apply(&mut state, GameAction::Turn(Direction::Down)));
        assert!(!input.apply(&mut state, GameAction::Pause));
        assert!(state.game_over());
        assert_eq!(input.stats().ignored, 2);
    }

    #[test]
    fn test_game_over_forwards_difficulty_and_restart() {
        let mut state = finished_game();
        let mut input = InputController::new();

        assert!(input.apply(&mut state, GameAction::SetDifficulty(Difficulty::Hard)));
        assert!(input.apply(&mut state, GameAction::Restart));
        assert!(state.running());
        assert_eq!(state.difficulty(), Difficulty::Hard);
        assert_eq!(input.stats().accepted, 2);
    }

    #[test]
    fn test_difficulty_rejected_mid_run() {
        let mut state = GameState::new(1);
        let mut input = InputController::new();

        assert!(!input.apply(&mut state, GameAction::SetDifficulty(Difficulty::Easy)));
        assert_eq!(state.difficulty(), Difficulty::Medium);

        input.reset_stats();
        assert_eq!(input.stats(), InputStats::default());
    }
}
