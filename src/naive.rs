use rand::{seq::SliceRandom, Rng};

use crate::error::{Error, Result};
use crate::tic_tac_toe::{Coordinates, Grid};

/// Picks one of the empty cells uniformly at random.
pub fn choose<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Result<Coordinates> {
    pick(&grid.empty_cells(), rng)
}

/// Uniform choice among `moves`; also drives MCTS rollouts.
pub fn pick<T: Copy, R: Rng + ?Sized>(moves: &[T], rng: &mut R) -> Result<T> {
    moves.choose(rng).copied().ok_or(Error::NoLegalMove)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::tic_tac_toe::tests::{coord, load_grid};
    use crate::tic_tac_toe::Mark;

    #[test]
    fn test_fills_the_grid() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut grid = Grid::new();
        for i in 0..9 {
            let cell = choose(&grid, &mut rng).unwrap();
            assert!(grid.is_empty(cell));
            let mark = if i % 2 == 0 { Mark::X } else { Mark::O };
            grid.set(cell, mark).unwrap();
        }
        assert!(grid.is_full());
    }

    #[test]
    fn test_single_empty_cell() {
        let mut rng = StdRng::seed_from_u64(0);
        let grid = load_grid("XOXOOXXX_");
        assert_eq!(choose(&grid, &mut rng), Ok(coord(2, 2)));
    }

    #[test]
    fn test_full_grid() {
        let mut rng = StdRng::seed_from_u64(0);
        let grid = load_grid("XOXOOXXXO");
        assert_eq!(choose(&grid, &mut rng), Err(Error::NoLegalMove));
    }

    #[test]
    fn test_covers_every_empty_cell() {
        let mut rng = StdRng::seed_from_u64(11);
        let grid = load_grid("X_O ___ O_X");
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(choose(&grid, &mut rng).unwrap());
        }
        assert_eq!(seen.len(), grid.empty_cells().len());
    }
}
