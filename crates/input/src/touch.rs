//! Pointer input: a click on the board steers towards the clicked side.
//!
//! The board is split along its two diagonals. A click is classified by its
//! offset from the board centre, normalised by the board's width and height
//! so that a non-square area (terminal cells are taller than wide) still
//! splits on its own diagonals.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::{Direction, GameAction};

/// Screen rectangle (terminal columns/rows) that accepts taps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TapArea {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl TapArea {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, col: u16, row: u16) -> bool {
        col >= self.x
            && row >= self.y
            && (col as u32) < self.x as u32 + self.width as u32
            && (row as u32) < self.y as u32 + self.height as u32
    }
}

/// Direction for a tap at terminal cell `(col, row)`.
///
/// The dominant axis wins and an exact tie goes to the horizontal axis.
/// Returns `None` outside `area` and for a tap on the exact centre.
///
/// # Examples
///
/// ```
/// use tui_snake_input::touch::{direction_for_tap, TapArea};
/// use tui_snake_types::Direction;
///
/// let area = TapArea::new(0, 0, 41, 21);
/// assert_eq!(direction_for_tap(40, 10, area), Some(Direction::Right));
/// assert_eq!(direction_for_tap(20, 0, area), Some(Direction::Up));
/// assert_eq!(direction_for_tap(20, 10, area), None);
/// ```
pub fn direction_for_tap(col: u16, row: u16, area: TapArea) -> Option<Direction> {
    if !area.contains(col, row) {
        return None;
    }

    // Doubled offsets from the centre keep everything integral: the centre
    // of cell `i` in an area of width `w` sits at `2i + 1 - w`.
    let dx = 2 * (col - area.x) as i64 + 1 - area.width as i64;
    let dy = 2 * (row - area.y) as i64 + 1 - area.height as i64;
    if dx == 0 && dy == 0 {
        return None;
    }

    let horizontal = dx.abs() * area.height as i64;
    let vertical = dy.abs() * area.width as i64;
    if horizontal >= vertical {
        Some(if dx > 0 { Direction::Right } else { Direction::Left })
    } else {
        Some(if dy > 0 { Direction::Down } else { Direction::Up })
    }
}

/// Map a left-button press inside `area` to a turn.
pub fn handle_mouse_event(event: MouseEvent, area: TapArea) -> Option<GameAction> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            direction_for_tap(event.column, event.row, area).map(GameAction::Turn)
        }
        _ => None,
    }
}
