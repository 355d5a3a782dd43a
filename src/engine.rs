//! One game in progress: a [`Board`] driven by a [`PlayersMatch`].
//!
//! The surrounding application asks [`Engine::request_move`] for a move,
//! falls back to its own input channel when the current player is human,
//! then hands the chosen cell to [`Engine::play`].

use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::config::{GameConfig, SearchConfig};
use crate::error::{Error, Result};
use crate::player::{Player, PlayersMatch};
use crate::tic_tac_toe::{Board, Coordinates, Mark, Move, Outcome};

/// Everything needed to bring a game back: the board and the players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEngineRecord")]
pub struct EngineRecord {
    pub board: Board,
    pub players: PlayersMatch,
}

#[derive(Deserialize)]
struct RawEngineRecord {
    board: Board,
    players: PlayersMatch,
}

impl TryFrom<RawEngineRecord> for EngineRecord {
    type Error = Error;

    fn try_from(raw: RawEngineRecord) -> Result<Self> {
        let record = EngineRecord {
            board: raw.board,
            players: raw.players,
        };
        record.check_turn()?;
        Ok(record)
    }
}

impl EngineRecord {
    /// The record as a JSON object of field names to plain values.
    pub fn to_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }

    pub fn from_value(value: serde_json::Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }

    /// While the game goes on, the turn belongs to whoever did not make the
    /// last move.
    pub fn check_turn(&self) -> Result<()> {
        let Some(last) = self.board.last_play() else {
            return Ok(());
        };
        let current = self.players.current_mark();
        if !self.board.outcome().is_over() && current == last.player() {
            return Err(Error::TurnOrder {
                last: last.player(),
                current,
            });
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct Engine {
    board: Board,
    players: PlayersMatch,
    config: SearchConfig,
    rng: StdRng,
}

impl Engine {
    pub fn new(game: &GameConfig, config: SearchConfig) -> Result<Self> {
        let [first, second] = &game.players;
        let players = PlayersMatch::new(
            Player::from_config(first),
            Player::from_config(second),
            game.starting_mark,
        )?;
        info!(
            "new game: {} ({}) vs {} ({}), {} starts",
            first.name, first.mark, second.name, second.mark, game.starting_mark
        );
        Ok(Self::from_parts(Board::new(), players, config))
    }

    fn from_parts(board: Board, players: PlayersMatch, config: SearchConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            board,
            players,
            config,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &PlayersMatch {
        &self.players
    }

    /// Strategy (re)binding goes through here.
    pub fn players_mut(&mut self) -> &mut PlayersMatch {
        &mut self.players
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    /// Asks the current player's strategy for a cell. Humans get `None`.
    pub fn request_move(&mut self) -> Result<Option<Coordinates>> {
        if self.outcome().is_over() {
            return Err(Error::GameOver);
        }
        let current = self.players.current();
        let Some(strategy) = current.strategy() else {
            return Ok(None);
        };
        let mark = current.mark();
        strategy
            .choose(self.board.grid(), mark, &self.config, &mut self.rng)
            .map(Some)
    }

    /// Places the current player's mark on `coord`, credits a win, and
    /// passes the turn while the game goes on.
    pub fn play(&mut self, coord: Coordinates) -> Result<Outcome> {
        if self.outcome().is_over() {
            return Err(Error::GameOver);
        }
        let mark = self.players.current_mark();
        self.board.apply(Move::new(coord, mark))?;

        let outcome = self.board.outcome();
        match outcome {
            Outcome::Win(winner) => self.record_win(winner),
            Outcome::Tie => info!("tie after {} moves", self.board.history().len()),
            Outcome::InProgress => self.players.switch(),
        }
        Ok(outcome)
    }

    /// Plays one turn for an automated current player. Returns `None` when a
    /// human has to move.
    pub fn play_automated(&mut self) -> Result<Option<Outcome>> {
        match self.request_move()? {
            Some(coord) => self.play(coord).map(Some),
            None => Ok(None),
        }
    }

    pub fn record_win(&mut self, mark: Mark) {
        let player = self.players.player_mut(mark);
        player.record_win();
        info!(
            "{} ({}) wins, score is now {}",
            player.name(),
            mark,
            player.score()
        );
    }

    /// A fresh game between the same players, scores included. X starts.
    pub fn rematch(&mut self) -> Result<Self> {
        let [first, second] = self.players.players().clone();
        let players = PlayersMatch::new(first, second, Mark::X)?;
        let mut config = self.config.clone();
        config.seed = Some(self.rng.gen());
        Ok(Self::from_parts(Board::new(), players, config))
    }

    pub fn to_record(&self) -> EngineRecord {
        EngineRecord {
            board: self.board.clone(),
            players: self.players.clone(),
        }
    }

    pub fn from_record(record: EngineRecord, config: SearchConfig) -> Result<Self> {
        record.check_turn()?;
        Ok(Self::from_parts(record.board, record.players, config))
    }
}
