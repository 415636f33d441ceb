//! Terminal snake runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `term`.
//! Logs go to a file because the terminal is in raw alternate-screen mode.

use std::fs::File;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyModifiers};
use simplelog::{ConfigBuilder, WriteLogger};

use tui_snake::core::{GameSnapshot, GameState};
use tui_snake::engine::{Clock, GameConfig, ScoreSink, Session};
use tui_snake::input::{
    handle_key_event, handle_mouse_event, handle_prompt_key, should_quit, should_refresh, TapArea,
};
use tui_snake::leaderboard::{LeaderboardConfig, LeaderboardHandle, LeaderboardUpdate};
use tui_snake::term::{
    FrameBuffer, GameView, LeaderboardView, NameEntry, ScoreRow, TerminalRenderer, Viewport,
};
use tui_snake::types::{GameEvent, MAX_LEADERBOARD_ENTRIES};

/// Forwards named scores and refresh requests to the leaderboard worker.
struct ScoreSubmitter {
    handle: Option<LeaderboardHandle>,
}

impl ScoreSink for ScoreSubmitter {
    fn game_over(&mut self, event: &GameEvent) {
        let GameEvent::GameOver { score, length, cause, .. } = *event;
        log::info!("run over: score {}, length {}, {}", score, length, cause.as_str());
    }

    fn submit(&mut self, name: &str, score: u32) {
        if let Some(handle) = &self.handle {
            if !handle.submit(name, score) {
                log::debug!("score {} not submitted", score);
            }
        }
    }

    fn refresh(&mut self) {
        if let Some(handle) = &self.handle {
            handle.refresh();
        }
    }
}

impl ScoreSubmitter {
    fn try_recv(&mut self) -> Option<LeaderboardUpdate> {
        self.handle.as_mut().and_then(|h| h.try_recv())
    }
}

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    init_logging(&config)?;

    let leaderboard = match LeaderboardHandle::start(LeaderboardConfig::from_env()) {
        Ok(handle) => handle,
        Err(e) => {
            log::warn!("leaderboard unavailable: {}", e);
            None
        }
    };

    let mut term = TerminalRenderer::new();
    if !config.mouse {
        term = term.without_mouse();
    }
    term.enter()?;

    let result = run(&mut term, &config, leaderboard);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        log::error!("exiting on error: {:#}", e);
    }
    result
}

fn init_logging(config: &GameConfig) -> Result<()> {
    let file = File::create(&config.log_path)
        .with_context(|| format!("cannot create log file {}", config.log_path.display()))?;
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    WriteLogger::init(config.log_level, log_config, file).context("logger already set")?;
    Ok(())
}

fn run(
    term: &mut TerminalRenderer,
    config: &GameConfig,
    leaderboard: Option<LeaderboardHandle>,
) -> Result<()> {
    let clock = Clock::new();
    log::info!(
        "starting: seed {}, difficulty {}, player {}",
        config.seed,
        config.difficulty.as_str(),
        config.player.as_deref().unwrap_or("-")
    );

    let mut board = LeaderboardView {
        enabled: leaderboard.is_some(),
        loading: leaderboard.is_some(),
        ..LeaderboardView::default()
    };
    if let Some(handle) = &leaderboard {
        handle.refresh();
    }

    let state = GameState::with_difficulty(config.seed, config.difficulty);
    let sink = ScoreSubmitter { handle: leaderboard };
    let mut session = Session::new(state, sink, clock.now_ms())
        .with_player_name(config.player.clone().unwrap_or_default());

    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        while let Some(update) = session.sink_mut().try_recv() {
            apply_update(&mut board, update);
        }

        board.entry = session.prompt().map(|p| NameEntry {
            score: p.score(),
            name: p.name().to_string(),
        });

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        session.snapshot_into(&mut snap);
        view.render_into(&snap, &board, viewport, &mut fb);
        term.present(&mut fb)?;

        // Input with timeout until the next tick.
        if event::poll(session.timeout(clock.now_ms()))? {
            match event::read()? {
                Event::Key(key) => {
                    if session.prompt().is_some() {
                        // Letters belong to the name; only Ctrl+C quits here.
                        if should_quit(key) && key.modifiers.contains(KeyModifiers::CONTROL) {
                            return Ok(());
                        }
                        if let Some(edit) = handle_prompt_key(key) {
                            session.edit_prompt(edit);
                        }
                    } else if should_quit(key) {
                        return Ok(());
                    } else if should_refresh(key) {
                        board.loading = board.enabled;
                        session.refresh();
                    } else if let Some(action) = handle_key_event(key) {
                        session.handle_action(action, clock.now_ms());
                    }
                }
                Event::Mouse(mouse) => {
                    let (x, y, w, h) = view.layout(viewport).play_area();
                    if let Some(action) = handle_mouse_event(mouse, TapArea::new(x, y, w, h)) {
                        session.handle_action(action, clock.now_ms());
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        session.advance(clock.now_ms());
    }
}

fn apply_update(board: &mut LeaderboardView, update: LeaderboardUpdate) {
    let report = update.report();
    board.loading = false;
    board.rows = report
        .entries
        .iter()
        .take(MAX_LEADERBOARD_ENTRIES)
        .map(|e| ScoreRow {
            name: e.name.clone(),
            score: e.score,
        })
        .collect();
    board.status = report.warning.clone();

    match &update {
        LeaderboardUpdate::Loaded(report) => {
            log::debug!("loaded {} scores from {}", report.entries.len(), report.source.as_str());
        }
        LeaderboardUpdate::Submitted { score, report } => {
            log::info!("score {} recorded ({})", score, report.source.as_str());
        }
    }
}
