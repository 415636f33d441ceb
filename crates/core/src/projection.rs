//! Render projection - game snapshot to a board of cell tags
//!
//! Pure and read-only: safe to call in any lifecycle state. A paused or
//! finished game projects its frozen last frame.

use crate::grid::index_of;
use crate::snapshot::GameSnapshot;
use crate::types::{CellTag, Position, BOARD_CELLS, BOARD_SIZE};

/// N×N board of [`CellTag`]s, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    cells: [CellTag; BOARD_CELLS],
}

impl CellGrid {
    pub fn new() -> Self {
        Self {
            cells: [CellTag::Empty; BOARD_CELLS],
        }
    }

    /// Tag at `(x, y)`; `None` off the board.
    pub fn get(&self, x: i16, y: i16) -> Option<CellTag> {
        index_of(Position::new(x, y)).map(|i| self.cells[i])
    }

    pub fn count(&self, tag: CellTag) -> usize {
        self.cells.iter().filter(|&&c| c == tag).count()
    }

    /// One board row, left to right.
    pub fn row(&self, y: i16) -> &[CellTag] {
        let w = BOARD_SIZE as usize;
        let start = (y.clamp(0, BOARD_SIZE - 1) as usize) * w;
        &self.cells[start..start + w]
    }

    fn set(&mut self, pos: Position, tag: CellTag) {
        if let Some(i) = index_of(pos) {
            self.cells[i] = tag;
        }
    }
}

impl Default for CellGrid {
    fn default() -> Self {
        Self::new()
    }
}

/// Project a snapshot into an existing grid.
///
/// Food is drawn first so the snake wins if they ever share a cell; the head
/// is drawn last.
pub fn project_into(snap: &GameSnapshot, out: &mut CellGrid) {
    out.cells.fill(CellTag::Empty);
    out.set(snap.food, CellTag::Food);

    if let Some((head, body)) = snap.snake.split_last() {
        for &segment in body {
            out.set(segment, CellTag::Body);
        }
        out.set(*head, CellTag::Head);
    }
}

/// Convenience helper that allocates a new grid.
pub fn project(snap: &GameSnapshot) -> CellGrid {
    let mut grid = CellGrid::new();
    project_into(snap, &mut grid);
    grid
}
