//! Session - the single owner of a running game.
//!
//! Everything that mutates the game goes through `&mut Session`: player
//! actions via [`Session::handle_action`] and time via [`Session::advance`].
//! After every mutation the tick scheduler is re-synced with the state's
//! difficulty and lifecycle, so pausing stops the clock and a restart or
//! speed change re-arms it from a clean period.
//!
//! The game-over event is handed to the [`ScoreSink`] exactly once per run.
//! A run that scored opens a [`NamePrompt`]; the score reaches the sink only
//! when the player confirms a name, and skipping drops it.

use std::time::Duration;

use tui_snake_core::{GameSnapshot, GameState, TickOutcome};
use tui_snake_input::{InputController, InputStats, NamePrompt, PromptEdit, PromptResult};

use crate::scheduler::TickScheduler;
use crate::types::{GameAction, GameEvent};

/// Event-poll timeout while no tick is scheduled (paused or over).
pub const IDLE_POLL_MS: u64 = 250;

/// Receiver for finished runs (the leaderboard boundary).
///
/// Implementations must not block the game loop.
pub trait ScoreSink {
    fn game_over(&mut self, event: &GameEvent);

    /// The player put a name on a finished run's score.
    fn submit(&mut self, name: &str, score: u32);

    /// The player asked for fresh scores.
    fn refresh(&mut self) {}
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ScoreSink for NullSink {
    fn game_over(&mut self, _event: &GameEvent) {}

    fn submit(&mut self, _name: &str, _score: u32) {}
}

/// Keeps every event; used by tests and replays.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub events: Vec<GameEvent>,
    pub submissions: Vec<(String, u32)>,
    pub refreshes: u32,
}

impl ScoreSink for RecordingSink {
    fn game_over(&mut self, event: &GameEvent) {
        self.events.push(*event);
    }

    fn submit(&mut self, name: &str, score: u32) {
        self.submissions.push((name.to_string(), score));
    }

    fn refresh(&mut self) {
        self.refreshes += 1;
    }
}

pub struct Session<S: ScoreSink = NullSink> {
    state: GameState,
    input: InputController,
    scheduler: TickScheduler,
    sink: S,
    runs_finished: u32,
    prompt: Option<NamePrompt>,
    /// Prefill for the next prompt; the last confirmed name.
    player_name: String,
}

impl<S: ScoreSink> Session<S> {
    /// Take ownership of `state` and arm the scheduler at `now_ms`.
    pub fn new(state: GameState, sink: S, now_ms: u64) -> Self {
        let mut session = Self {
            state,
            input: InputController::new(),
            scheduler: TickScheduler::new(),
            sink,
            runs_finished: 0,
            prompt: None,
            player_name: String::new(),
        };
        session.sync_scheduler(now_ms);
        session
    }

    /// Prefill name prompts with `name`.
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn scheduler(&self) -> &TickScheduler {
        &self.scheduler
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn input_stats(&self) -> InputStats {
        self.input.stats()
    }

    /// Runs that reached game over in this session.
    pub fn runs_finished(&self) -> u32 {
        self.runs_finished
    }

    /// Open name prompt, if the last run scored and is not yet named.
    pub fn prompt(&self) -> Option<&NamePrompt> {
        self.prompt.as_ref()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.state.snapshot_into(out);
    }

    /// Apply a player action; returns whether the game accepted it.
    pub fn handle_action(&mut self, action: GameAction, now_ms: u64) -> bool {
        let accepted = self.input.apply(&mut self.state, action);
        if accepted && action == GameAction::Restart {
            // A mid-run restart keeps the period and enabled flag, so sync
            // alone would not re-arm.
            self.scheduler.restart(now_ms);
            if let Some(prompt) = self.prompt.take() {
                log::debug!("restart dropped unnamed score {}", prompt.score());
            }
        }
        self.sync_scheduler(now_ms);
        self.flush_event();
        accepted
    }

    /// Apply a key to the open name prompt; returns false when none is open.
    pub fn edit_prompt(&mut self, edit: PromptEdit) -> bool {
        let Some(prompt) = self.prompt.as_mut() else {
            return false;
        };
        match prompt.apply(edit) {
            PromptResult::Editing => {}
            PromptResult::Submit { name, score } => {
                self.prompt = None;
                self.sink.submit(&name, score);
                self.player_name = name;
            }
            PromptResult::Skipped => {
                log::debug!("score {} skipped", prompt.score());
                self.prompt = None;
            }
        }
        true
    }

    /// Ask the sink for fresh scores.
    pub fn refresh(&mut self) {
        self.sink.refresh();
    }

    /// Run every tick due at `now_ms`; returns how many ran.
    pub fn advance(&mut self, now_ms: u64) -> u32 {
        self.sync_scheduler(now_ms);
        let due = self.scheduler.poll(now_ms);

        let mut ran = 0;
        for _ in 0..due {
            let outcome = self.state.tick();
            if outcome == TickOutcome::Idle {
                break;
            }
            ran += 1;
            if matches!(outcome, TickOutcome::Ended(_)) {
                break;
            }
        }

        self.flush_event();
        self.sync_scheduler(now_ms);
        ran
    }

    /// How long the loop may block waiting for input.
    pub fn timeout(&self, now_ms: u64) -> Duration {
        let ms = self
            .scheduler
            .time_until_next(now_ms)
            .unwrap_or(IDLE_POLL_MS)
            .min(IDLE_POLL_MS);
        Duration::from_millis(ms)
    }

    fn sync_scheduler(&mut self, now_ms: u64) {
        self.scheduler
            .sync(self.state.tick_ms(), self.state.running(), now_ms);
    }

    fn flush_event(&mut self) {
        if let Some(event) = self.state.take_event() {
            self.runs_finished += 1;
            self.sink.game_over(&event);
            let GameEvent::GameOver { score, .. } = event;
            if score > 0 {
                self.prompt = Some(NamePrompt::new(score, &self.player_name));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Difficulty, Direction, EndCause, Lifecycle, Position};

    fn doomed_state() -> GameState {
        // Two cells from the left wall, moving left.
        GameState::with_layout(
            1,
            &[Position::new(2, 5), Position::new(1, 5)],
            Position::new(15, 15),
            Direction::Left,
        )
    }

    #[test]
    fn test_ticks_follow_difficulty_period() {
        let mut session = Session::new(GameState::new(3), NullSink, 0);
        assert_eq!(session.scheduler().period_ms(), Difficulty::Medium.tick_ms());

        assert_eq!(session.advance(99), 0);
        assert_eq!(session.advance(100), 1);
        assert_eq!(session.state().tick_count(), 1);
        assert_eq!(session.timeout(100), Duration::from_millis(100));
    }

    #[test]
    fn test_pause_stops_ticks() {
        let mut session = Session::new(GameState::new(3), NullSink, 0);
        assert!(session.handle_action(GameAction::Pause, 50));
        assert_eq!(session.state().lifecycle(), Lifecycle::Paused);

        assert_eq!(session.advance(1_000), 0);
        assert_eq!(session.timeout(1_000), Duration::from_millis(IDLE_POLL_MS));

        // Resume starts a fresh period.
        assert!(session.handle_action(GameAction::Pause, 1_000));
        assert_eq!(session.advance(1_099), 0);
        assert_eq!(session.advance(1_100), 1);
    }

    #[test]
    fn test_game_over_reaches_sink_once() {
        let mut session = Session::new(doomed_state(), RecordingSink::default(), 0);

        assert_eq!(session.advance(100), 1);
        assert!(session.state().running());
        assert_eq!(session.advance(200), 1);
        assert!(session.state().game_over());
        assert_eq!(session.advance(300), 0);

        assert_eq!(session.sink().events.len(), 1);
        assert!(matches!(
            session.sink().events[0],
            GameEvent::GameOver { score: 0, cause: EndCause::Wall, .. }
        ));
        assert_eq!(session.runs_finished(), 1);
    }

    #[test]
    fn test_catch_up_stops_at_game_over() {
        let mut session = Session::new(doomed_state(), RecordingSink::default(), 0);
        assert_eq!(session.advance(10_000), 2);
        assert!(session.state().game_over());
        assert!(!session.scheduler().enabled());
    }

    #[test]
    fn test_restart_with_new_difficulty_rearms() {
        let mut session = Session::new(doomed_state(), NullSink, 0);
        session.advance(200);
        assert!(session.state().game_over());

        assert!(session.handle_action(GameAction::SetDifficulty(Difficulty::Hard), 250));
        assert!(session.handle_action(GameAction::Restart, 260));
        assert_eq!(session.scheduler().period_ms(), 50);
        assert_eq!(session.advance(309), 0);
        assert_eq!(session.advance(310), 1);
    }

    #[test]
    fn test_restart_while_paused_resets_period() {
        let mut session = Session::new(GameState::new(9), NullSink, 0);
        session.handle_action(GameAction::Pause, 10);
        session.handle_action(GameAction::Restart, 90);

        assert!(session.state().running());
        assert_eq!(session.advance(189), 0);
        assert_eq!(session.advance(190), 1);
    }

    #[test]
    fn test_turn_applies_on_next_tick() {
        let mut session = Session::new(GameState::new(4), NullSink, 0);
        assert!(session.handle_action(GameAction::Turn(Direction::Up), 10));
        assert_eq!(session.state().direction(), Direction::Right);

        session.advance(100);
        assert_eq!(session.state().direction(), Direction::Up);
        assert_eq!(session.input_stats().accepted, 1);
    }

    /// Eats on the first tick, hits the right wall on the second.
    fn scoring_state() -> GameState {
        GameState::with_layout(
            1,
            &[Position::new(17, 0), Position::new(18, 0)],
            Position::new(19, 0),
            Direction::Right,
        )
    }

    #[test]
    fn test_scoring_run_opens_prompt() {
        let mut session =
            Session::new(scoring_state(), RecordingSink::default(), 0).with_player_name("ada");
        session.advance(200);
        assert!(session.state().game_over());

        let prompt = session.prompt().unwrap();
        assert_eq!(prompt.score(), 1);
        assert_eq!(prompt.name(), "ada");
        assert!(session.sink().submissions.is_empty());

        assert!(session.edit_prompt(PromptEdit::Backspace));
        assert!(session.edit_prompt(PromptEdit::Insert('m')));
        assert!(session.edit_prompt(PromptEdit::Confirm));
        assert!(session.prompt().is_none());
        assert_eq!(session.sink().submissions, vec![("adm".to_string(), 1)]);
        assert!(!session.edit_prompt(PromptEdit::Confirm));
    }

    #[test]
    fn test_zero_score_opens_no_prompt() {
        let mut session = Session::new(doomed_state(), RecordingSink::default(), 0);
        session.advance(200);
        assert!(session.state().game_over());
        assert!(session.prompt().is_none());
    }

    #[test]
    fn test_restart_drops_open_prompt() {
        let mut session = Session::new(scoring_state(), RecordingSink::default(), 0);
        session.advance(200);
        assert!(session.prompt().is_some());

        assert!(session.handle_action(GameAction::Restart, 210));
        assert!(session.prompt().is_none());
        assert!(session.sink().submissions.is_empty());
    }

    #[test]
    fn test_refresh_reaches_sink() {
        let mut session = Session::new(GameState::new(1), RecordingSink::default(), 0);
        session.refresh();
        session.refresh();
        assert_eq!(session.sink().refreshes, 2);
    }
}
