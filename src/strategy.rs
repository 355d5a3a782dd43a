use std::{fmt, str::FromStr};

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::SearchConfig;
use crate::error::{Error, Result};
use crate::game::Position;
use crate::mcts::MCTS;
use crate::naive;
use crate::negamax::Negamax;
use crate::tic_tac_toe::{Coordinates, Grid, Mark};

/// The algorithm driving an automated player.
///
/// Persisted as its tag (`"naive"`, `"negamax"` or `"mcts"`); the search
/// parameters come from [`SearchConfig`] at call time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveStrategy {
    #[serde(rename = "naive")]
    Naive,
    #[serde(rename = "negamax")]
    Negamax,
    #[serde(rename = "mcts")]
    MonteCarloTreeSearch,
}

impl MoveStrategy {
    pub const ALL: [MoveStrategy; 3] = [
        MoveStrategy::Naive,
        MoveStrategy::Negamax,
        MoveStrategy::MonteCarloTreeSearch,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            MoveStrategy::Naive => "naive",
            MoveStrategy::Negamax => "negamax",
            MoveStrategy::MonteCarloTreeSearch => "mcts",
        }
    }

    /// Picks a cell for `mark` on `grid`. The grid is never modified.
    pub fn choose<R: Rng + ?Sized>(
        self,
        grid: &Grid,
        mark: Mark,
        config: &SearchConfig,
        rng: &mut R,
    ) -> Result<Coordinates> {
        if grid.is_full() {
            return Err(Error::NoLegalMove);
        }
        let coord = match self {
            MoveStrategy::Naive => naive::choose(grid, rng)?,
            MoveStrategy::Negamax => {
                Negamax::new(config.negamax_depth).select_move(&Position::new(*grid, mark))?
            }
            MoveStrategy::MonteCarloTreeSearch => MCTS::new(config.mcts_iterations, config.exploration)
                .select_move(&Position::new(*grid, mark), rng)?,
        };
        debug!("{} chose {} for {}", self, coord, mark);
        Ok(coord)
    }
}

impl fmt::Display for MoveStrategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for MoveStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "naive" | "random" => Ok(MoveStrategy::Naive),
            "negamax" | "minimax" => Ok(MoveStrategy::Negamax),
            "mcts" | "monte-carlo" => Ok(MoveStrategy::MonteCarloTreeSearch),
            _ => Err(Error::UnknownStrategy(s.to_string())),
        }
    }
}
