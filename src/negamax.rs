//! Fixed-depth negamax search.
//!
//! Scores are from the point of view of the side to move: a won position is
//! worth [`WIN_SCORE`], a lost one `-WIN_SCORE`, anything else (tie or depth
//! cutoff) zero. Decided positions also carry the remaining depth, so a win
//! found sooner outranks a slower one and a loss is put off as long as possible.

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::game::Game;

pub const WIN_SCORE: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Negamax {
    depth: u8,
}

impl Negamax {
    pub fn new(depth: u8) -> Self {
        Self { depth }
    }

    /// Returns the first action, in enumeration order, with the best score.
    pub fn select_move<G: Game>(&self, game: &G) -> Result<G::Action> {
        if game.done() {
            return Err(Error::NoLegalMove);
        }
        let mut game = game.clone();
        let mut best: Option<(G::Action, i32)> = None;

        for action in game.get_available_moves() {
            game.make(action)?;
            let value = -self.negamax(&mut game, self.depth.saturating_sub(1))?;
            game.unmake(action);
            trace!("negamax: {:?} scores {}", action, value);

            if best.map_or(true, |(_, best_value)| value > best_value) {
                best = Some((action, value));
            }
        }

        let (action, value) = best.ok_or(Error::NoLegalMove)?;
        debug!("negamax picked {:?} with score {}", action, value);
        Ok(action)
    }

    fn negamax<G: Game>(&self, game: &mut G, depth: u8) -> Result<i32> {
        if let Some(winner) = game.check_winner() {
            let score = WIN_SCORE + i32::from(depth);
            return Ok(if winner == game.current_player() {
                score
            } else {
                -score
            });
        }

        let moves = game.get_available_moves();
        if depth == 0 || moves.is_empty() {
            return Ok(0);
        }

        let mut best = i32::MIN;
        for action in moves {
            game.make(action)?;
            let value = -self.negamax(game, depth - 1)?;
            game.unmake(action);
            best = best.max(value);
        }
        Ok(best)
    }
}
