use std::{fmt, hash::Hash};

use crate::error::Result;
use crate::tic_tac_toe::{Coordinates, Grid, Mark};

/// A two-player, zero-sum position that the searches can walk.
///
/// `make` and `unmake` must be used with stack discipline: every `make` is
/// undone by an `unmake` of the same action before its caller moves on.
pub trait Game: Clone + fmt::Display {
    type Action: fmt::Debug + Hash + PartialEq + Eq + Ord + Clone + Copy;
    type Player: PartialEq + fmt::Debug + Clone + Copy;

    fn make(&mut self, action: Self::Action) -> Result<()>;

    fn unmake(&mut self, action: Self::Action);

    fn get_available_moves(&self) -> Vec<Self::Action>;

    fn current_player(&self) -> Self::Player;

    fn check_winner(&self) -> Option<Self::Player>;

    fn done(&self) -> bool {
        self.check_winner().is_some() || self.get_available_moves().is_empty()
    }
}

/// A grid together with the mark to move, owned by a single search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    grid: Grid,
    to_move: Mark,
    played: Vec<Coordinates>,
}

impl Position {
    pub fn new(grid: Grid, to_move: Mark) -> Self {
        Self {
            grid,
            to_move,
            played: Vec::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}

impl Game for Position {
    type Action = Coordinates;
    type Player = Mark;

    fn make(&mut self, coord: Coordinates) -> Result<()> {
        self.grid.set(coord, self.to_move)?;
        self.played.push(coord);
        self.to_move = self.to_move.opponent();
        Ok(())
    }

    fn unmake(&mut self, coord: Coordinates) {
        debug_assert_eq!(self.played.last(), Some(&coord));
        self.played.pop();
        self.grid.clear(coord);
        self.to_move = self.to_move.opponent();
    }

    fn get_available_moves(&self) -> Vec<Coordinates> {
        self.grid.empty_cells()
    }

    fn current_player(&self) -> Mark {
        self.to_move
    }

    /// Only lines completed by moves made on this position count. Searches
    /// stop at the first such line, so the latest placement is the only one
    /// to check. A line already on the starting grid does not end the search.
    fn check_winner(&self) -> Option<Mark> {
        let last_mover = self.to_move.opponent();
        self.played
            .last()
            .filter(|&&coord| self.grid.is_winning_move(coord, last_mover))
            .map(|_| last_mover)
    }

    fn done(&self) -> bool {
        self.check_winner().is_some() || self.grid.is_full()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.grid)?;
        writeln!(f, "{} to move", self.to_move)
    }
}
