//! Food placement - rejection sampling over the board
//!
//! A candidate cell is drawn uniformly and redrawn while it lands on the
//! snake. Sampling is capped at one attempt per board cell; past the cap the
//! spawner picks uniformly among the remaining free cells instead, so a
//! nearly-full board never spins.

use rand::Rng;

use crate::grid::Occupancy;
use crate::types::{Position, BOARD_CELLS, BOARD_SIZE};

/// Rejection-sampling attempts before falling back to a free-cell scan.
pub const MAX_FOOD_ATTEMPTS: usize = BOARD_CELLS;

/// Pick a cell not occupied by `snake`.
///
/// Returns `None` only when every cell is taken.
pub fn spawn_food<'a, R, I>(rng: &mut R, snake: I) -> Option<Position>
where
    R: Rng + ?Sized,
    I: IntoIterator<Item = &'a Position>,
{
    let occupied = Occupancy::from_positions(snake);
    spawn_food_in(rng, &occupied)
}

/// Same as [`spawn_food`] with a prebuilt occupancy map.
pub fn spawn_food_in<R: Rng + ?Sized>(rng: &mut R, occupied: &Occupancy) -> Option<Position> {
    if occupied.free_count() == 0 {
        return None;
    }

    for _ in 0..MAX_FOOD_ATTEMPTS {
        let candidate = Position::new(
            rng.gen_range(0..BOARD_SIZE),
            rng.gen_range(0..BOARD_SIZE),
        );
        if !occupied.is_occupied(candidate) {
            return Some(candidate);
        }
    }

    log::debug!(
        "food sampling hit the attempt cap with {} free cells; scanning",
        occupied.free_count()
    );
    let free = occupied.free_cells();
    let pick = rng.gen_range(0..free.len());
    Some(free[pick])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{is_out_of_bounds, position_at};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_food_avoids_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = [
            Position::new(10, 10),
            Position::new(11, 10),
            Position::new(12, 10),
        ];
        for _ in 0..500 {
            let food = spawn_food(&mut rng, snake.iter()).unwrap();
            assert!(!snake.contains(&food));
            assert!(!is_out_of_bounds(food));
        }
    }

    #[test]
    fn test_food_finds_last_free_cell() {
        let mut rng = StdRng::seed_from_u64(99);
        let hole = Position::new(17, 3);
        let snake: Vec<Position> = (0..BOARD_CELLS)
            .map(position_at)
            .filter(|p| *p != hole)
            .collect();
        assert_eq!(spawn_food(&mut rng, snake.iter()), Some(hole));
    }

    #[test]
    fn test_full_board_has_no_food() {
        let mut rng = StdRng::seed_from_u64(1);
        let snake: Vec<Position> = (0..BOARD_CELLS).map(position_at).collect();
        assert_eq!(spawn_food(&mut rng, snake.iter()), None);
    }

    #[test]
    fn test_same_seed_same_food() {
        let snake = [Position::new(0, 0)];
        let a = spawn_food(&mut StdRng::seed_from_u64(42), snake.iter());
        let b = spawn_food(&mut StdRng::seed_from_u64(42), snake.iter());
        assert_eq!(a, b);
    }
}
