//! Grid module - fixed 20x20 playfield and position arithmetic
//!
//! Positions are plain value types; everything here is a pure function of
//! its arguments.

use arrayvec::ArrayVec;

use crate::types::{Direction, Position, BOARD_CELLS, BOARD_SIZE};

/// True iff `pos` lies outside the board.
///
/// # Examples
///
/// ```
/// use tui_snake_core::grid::is_out_of_bounds;
/// use tui_snake_types::Position;
///
/// assert!(!is_out_of_bounds(Position::new(0, 0)));
/// assert!(!is_out_of_bounds(Position::new(19, 19)));
/// assert!(is_out_of_bounds(Position::new(-1, 5)));
/// assert!(is_out_of_bounds(Position::new(5, 20)));
/// ```
#[inline]
pub fn is_out_of_bounds(pos: Position) -> bool {
    pos.x < 0 || pos.x >= BOARD_SIZE || pos.y < 0 || pos.y >= BOARD_SIZE
}

/// The cell one step from `pos` in `direction`.
///
/// The result may be off the board; callers check with [`is_out_of_bounds`].
#[inline]
pub fn next_head(pos: Position, direction: Direction) -> Position {
    let (dx, dy) = direction.delta();
    pos.offset(dx, dy)
}

/// Row-major index of an in-bounds position.
#[inline]
pub fn index_of(pos: Position) -> Option<usize> {
    if is_out_of_bounds(pos) {
        return None;
    }
    Some((pos.y as usize) * (BOARD_SIZE as usize) + (pos.x as usize))
}

/// Position for a row-major index.
#[inline]
pub fn position_at(index: usize) -> Position {
    let size = BOARD_SIZE as usize;
    Position::new((index % size) as i16, (index / size) as i16)
}

/// Occupancy bitmap over the whole board.
///
/// Stack-only; used to answer "is this cell taken" in O(1) during food
/// placement and to enumerate free cells without allocating.
#[derive(Debug, Clone)]
pub struct Occupancy {
    cells: [bool; BOARD_CELLS],
    filled: usize,
}

impl Occupancy {
    pub fn new() -> Self {
        Self {
            cells: [false; BOARD_CELLS],
            filled: 0,
        }
    }

    /// Build from any set of positions (out-of-bounds entries are skipped).
    pub fn from_positions<'a, I>(positions: I) -> Self
    where
        I: IntoIterator<Item = &'a Position>,
    {
        let mut occ = Self::new();
        for &p in positions {
            occ.mark(p);
        }
        occ
    }

    pub fn mark(&mut self, pos: Position) {
        if let Some(i) = index_of(pos) {
            if !self.cells[i] {
                self.cells[i] = true;
                self.filled += 1;
            }
        }
    }

    pub fn is_occupied(&self, pos: Position) -> bool {
        index_of(pos).map(|i| self.cells[i]).unwrap_or(false)
    }

    pub fn filled(&self) -> usize {
        self.filled
    }

    pub fn free_count(&self) -> usize {
        BOARD_CELLS - self.filled
    }

    /// All unoccupied cells in row-major order.
    pub fn free_cells(&self) -> ArrayVec<Position, BOARD_CELLS> {
        let mut out = ArrayVec::new();
        for (i, taken) in self.cells.iter().enumerate() {
            if !taken {
                out.push(position_at(i));
            }
        }
        out
    }
}

impl Default for Occupancy {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_edges() {
        assert!(!is_out_of_bounds(Position::new(0, 0)));
        assert!(!is_out_of_bounds(Position::new(BOARD_SIZE - 1, BOARD_SIZE - 1)));
        assert!(is_out_of_bounds(Position::new(-1, 0)));
        assert!(is_out_of_bounds(Position::new(0, -1)));
        assert!(is_out_of_bounds(Position::new(BOARD_SIZE, 0)));
        assert!(is_out_of_bounds(Position::new(0, BOARD_SIZE)));
    }

    #[test]
    fn test_next_head_steps() {
        let p = Position::new(10, 10);
        assert_eq!(next_head(p, Direction::Right), Position::new(11, 10));
        assert_eq!(next_head(p, Direction::Left), Position::new(9, 10));
        assert_eq!(next_head(p, Direction::Up), Position::new(10, 9));
        assert_eq!(next_head(p, Direction::Down), Position::new(10, 11));
    }

    #[test]
    fn test_next_head_can_leave_board() {
        let p = Position::new(0, 10);
        assert!(is_out_of_bounds(next_head(p, Direction::Left)));
    }

    #[test]
    fn test_index_round_trip_on_corners() {
        for p in [
            Position::new(0, 0),
            Position::new(19, 0),
            Position::new(0, 19),
            Position::new(19, 19),
        ] {
            assert_eq!(position_at(index_of(p).unwrap()), p);
        }
        assert_eq!(index_of(Position::new(20, 0)), None);
    }

    #[test]
    fn test_occupancy_counts_unique_cells() {
        let snake = [
            Position::new(1, 1),
            Position::new(2, 1),
            Position::new(2, 1),
            Position::new(-3, 1),
        ];
        let occ = Occupancy::from_positions(snake.iter());
        assert_eq!(occ.filled(), 2);
        assert!(occ.is_occupied(Position::new(2, 1)));
        assert!(!occ.is_occupied(Position::new(3, 1)));
        assert_eq!(occ.free_cells().len(), BOARD_CELLS - 2);
    }
}
