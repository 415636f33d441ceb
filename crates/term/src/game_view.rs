//! GameView: maps a game snapshot and leaderboard state into a framebuffer.
//!
//! Pure (no I/O). The board is drawn from the render projection, two
//! terminal columns per cell, inside a single-line border; the side panel
//! shows run stats and the top of the leaderboard.

use crate::core::{project, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{CellTag, Lifecycle, BOARD_SIZE, MAX_LEADERBOARD_ENTRIES};

const PANEL_GAP: u16 = 2;
const MIN_PANEL_W: u16 = 14;
const PANEL_W: u16 = 30;

const BOARD_BG: Rgb = Rgb::new(18, 24, 18);
const SNAKE_HEAD: Rgb = Rgb::new(140, 255, 120);
const SNAKE_BODY: Rgb = Rgb::new(60, 180, 70);
const FOOD: Rgb = Rgb::new(230, 60, 60);
const WARNING: Rgb = Rgb::new(240, 190, 60);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the board frame landed on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub frame_x: u16,
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
}

impl BoardLayout {
    /// Playfield inside the border as `(x, y, width, height)`.
    pub fn play_area(&self) -> (u16, u16, u16, u16) {
        (
            self.frame_x + 1,
            self.frame_y + 1,
            self.frame_w.saturating_sub(2),
            self.frame_h.saturating_sub(2),
        )
    }
}

/// One leaderboard row as shown in the side panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRow {
    pub name: String,
    pub score: u32,
}

/// Name being typed for a finished run's score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEntry {
    pub score: u32,
    pub name: String,
}

/// Leaderboard state for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaderboardView {
    pub enabled: bool,
    pub loading: bool,
    pub rows: Vec<ScoreRow>,
    /// Shown under the rows, e.g. "Using local scores - remote sync unavailable".
    pub status: Option<String>,
    /// Replaces the game-over overlay while the player names the score.
    pub entry: Option<NameEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
    max_rows: usize,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 keeps cells roughly square on common terminal fonts.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
            max_rows: MAX_LEADERBOARD_ENTRIES,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            ..Self::default()
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = max_rows;
        self
    }

    /// Board frame placement for `viewport`.
    ///
    /// Board and panel are centred together when both fit at full width;
    /// a tight viewport pins the board left to keep a narrow panel, and
    /// anything narrower centres the board alone.
    pub fn layout(&self, viewport: Viewport) -> BoardLayout {
        let frame_w = BOARD_SIZE as u16 * self.cell_w + 2;
        let frame_h = BOARD_SIZE as u16 * self.cell_h + 2;

        let full = frame_w + PANEL_GAP + PANEL_W;
        let tight = frame_w + PANEL_GAP + MIN_PANEL_W;
        let frame_x = if viewport.width >= full {
            (viewport.width - full) / 2
        } else if viewport.width >= tight {
            0
        } else {
            viewport.width.saturating_sub(frame_w) / 2
        };

        BoardLayout {
            frame_x,
            frame_y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
                AnchorY::Top => 0,
            },
            frame_w,
            frame_h,
        }
    }

    /// Render into an existing framebuffer, resizing it to `viewport`.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        board: &LeaderboardView,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let layout = self.layout(viewport);
        self.draw_border(fb, layout);
        self.draw_cells(fb, snap, layout);
        self.draw_side_panel(fb, snap, board, viewport, layout);

        match snap.lifecycle {
            Lifecycle::Running => {}
            Lifecycle::Paused => {
                self.draw_overlay(fb, layout, &["PAUSED", "space to resume"]);
            }
            Lifecycle::Over => match &board.entry {
                Some(entry) => {
                    let score = format!("NEW SCORE {}", entry.score);
                    let name = format!("name: {}_", entry.name);
                    self.draw_overlay(fb, layout, &[score.as_str(), name.as_str(), "enter save  esc skip"]);
                }
                None => self.draw_overlay(fb, layout, &["GAME OVER", "r to restart"]),
            },
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        board: &LeaderboardView,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, board, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: BoardLayout) {
        let style = CellStyle::fg(Rgb::new(200, 200, 200));
        let BoardLayout {
            frame_x: x,
            frame_y: y,
            frame_w: w,
            frame_h: h,
        } = layout;

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_cells(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: BoardLayout) {
        let grid = project(snap);
        let (ox, oy, _, _) = layout.play_area();

        for y in 0..BOARD_SIZE {
            for (x, tag) in grid.row(y).iter().enumerate() {
                let (ch, style) = match tag {
                    CellTag::Empty => ('·', CellStyle::fg(Rgb::new(60, 80, 60)).on(BOARD_BG).dim()),
                    CellTag::Body => ('█', CellStyle::fg(SNAKE_BODY).on(BOARD_BG)),
                    CellTag::Head => ('█', CellStyle::fg(SNAKE_HEAD).on(BOARD_BG).bold()),
                    CellTag::Food => ('●', CellStyle::fg(FOOD).on(BOARD_BG).bold()),
                };
                let px = ox + x as u16 * self.cell_w;
                let py = oy + y as u16 * self.cell_h;
                if matches!(tag, CellTag::Food) {
                    // A single glyph reads better than a doubled one.
                    fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
                    fb.put_char(px, py, ch, style);
                } else {
                    fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
                }
            }
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        board: &LeaderboardView,
        viewport: Viewport,
        layout: BoardLayout,
    ) {
        let panel_x = layout.frame_x + layout.frame_w + PANEL_GAP;
        if panel_x >= viewport.width || viewport.width - panel_x < MIN_PANEL_W {
            return;
        }
        let panel_w = viewport.width - panel_x;

        let label = CellStyle::default().bold();
        let value = CellStyle::fg(Rgb::new(200, 200, 200));
        let faint = value.dim();

        let mut y = layout.frame_y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x + 8, y, snap.score, value);
        y += 1;
        fb.put_str(panel_x, y, "LENGTH", label);
        fb.put_u32(panel_x + 8, y, snap.length() as u32, value);
        y += 1;
        fb.put_str(panel_x, y, "SPEED", label);
        fb.put_str(panel_x + 8, y, snap.difficulty.label(), value);
        y += 1;
        let state = match snap.lifecycle {
            Lifecycle::Running => "running",
            Lifecycle::Paused => "paused",
            Lifecycle::Over => "game over",
        };
        fb.put_str(panel_x, y, "STATE", label);
        fb.put_str(panel_x + 8, y, state, value);
        y += 2;

        if snap.lifecycle == Lifecycle::Over {
            fb.put_str(panel_x, y, "1/2/3 speed  r restart", faint);
        } else {
            fb.put_str(panel_x, y, "arrows move  space pause", faint);
        }
        y += 2;

        if !board.enabled {
            return;
        }
        fb.put_str(panel_x, y, "LEADERBOARD", label);
        if panel_w >= 24 {
            fb.put_str(panel_x + 14, y, "f refresh", faint);
        }
        y += 1;

        // Leave a row for the status line under the scores.
        let bottom = viewport.height.saturating_sub(1);
        if board.rows.is_empty() {
            let msg = if board.loading { "loading..." } else { "no scores yet" };
            fb.put_str(panel_x, y, msg, faint);
            y += 1;
        }
        let name_w = panel_w.saturating_sub(10).min(20) as usize;
        for (rank, row) in board.rows.iter().take(self.max_rows).enumerate() {
            if y >= bottom {
                break;
            }
            let place = rank as u32 + 1;
            let rank_x = if place < 10 { panel_x + 1 } else { panel_x };
            let end = fb.put_u32(rank_x, y, place, faint);
            fb.put_char(end, y, '.', faint);
            let name: String = row.name.chars().take(name_w).collect();
            fb.put_str(panel_x + 4, y, &name, value);
            fb.put_u32(panel_x + 5 + name_w as u16, y, row.score, label);
            y += 1;
        }

        if let Some(status) = &board.status {
            if y < viewport.height {
                fb.put_str(panel_x, y, status, CellStyle::fg(WARNING));
            }
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, layout: BoardLayout, lines: &[&str]) {
        let style = CellStyle::fg(Rgb::new(255, 255, 255)).bold();
        let mid_y = layout.frame_y + layout.frame_h / 2;
        for (i, text) in lines.iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = layout.frame_x + layout.frame_w.saturating_sub(text_w) / 2;
            let y = mid_y + i as u16;
            let style = if i == 0 { style } else { style.dim() };
            // Pad by one column so the text does not touch board glyphs.
            fb.put_char(x.saturating_sub(1), y, ' ', style);
            let end = fb.put_str(x, y, text, style);
            fb.put_char(end, y, ' ', style);
        }
    }
}
