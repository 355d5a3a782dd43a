use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::PlayerConfig;
use crate::error::{Error, Result};
use crate::strategy::MoveStrategy;
use crate::tic_tac_toe::Mark;

/// One side of a match. Without a strategy the player is human and its
/// moves come from outside the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    identity: String,
    name: String,
    mark: Mark,
    score: u32,
    strategy: Option<MoveStrategy>,
}

impl Player {
    pub fn new(identity: &str, name: &str, mark: Mark, strategy: Option<MoveStrategy>) -> Self {
        Self {
            identity: identity.to_string(),
            name: name.to_string(),
            mark,
            score: 0,
            strategy,
        }
    }

    pub fn from_config(config: &PlayerConfig) -> Self {
        Self::new(&config.identity, &config.name, config.mark, config.strategy)
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn strategy(&self) -> Option<MoveStrategy> {
        self.strategy
    }

    pub fn is_automated(&self) -> bool {
        self.strategy.is_some()
    }

    pub fn set_strategy(&mut self, strategy: Option<MoveStrategy>) {
        self.strategy = strategy;
    }

    pub(crate) fn record_win(&mut self) {
        self.score = self.score.saturating_add(1);
    }
}

/// Two players with distinct marks and whichever of them holds the turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PlayersMatchRecord")]
pub struct PlayersMatch {
    players: [Player; 2],
    current: Mark,
}

#[derive(Deserialize)]
struct PlayersMatchRecord {
    players: [Player; 2],
    current: Mark,
}

impl TryFrom<PlayersMatchRecord> for PlayersMatch {
    type Error = Error;

    fn try_from(record: PlayersMatchRecord) -> Result<Self> {
        let [first, second] = record.players;
        PlayersMatch::new(first, second, record.current)
    }
}

impl PlayersMatch {
    /// Pairs two players; `start` holds the first turn.
    pub fn new(first: Player, second: Player, start: Mark) -> Result<Self> {
        if first.mark == second.mark {
            return Err(Error::DuplicateMark(first.mark));
        }
        Ok(Self {
            players: [first, second],
            current: start,
        })
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    fn index_of(&self, mark: Mark) -> usize {
        if self.players[0].mark == mark {
            0
        } else {
            1
        }
    }

    pub fn player(&self, mark: Mark) -> &Player {
        &self.players[self.index_of(mark)]
    }

    pub fn player_mut(&mut self, mark: Mark) -> &mut Player {
        let index = self.index_of(mark);
        &mut self.players[index]
    }

    pub fn current(&self) -> &Player {
        self.player(self.current)
    }

    pub fn current_mark(&self) -> Mark {
        self.current
    }

    /// Hands the turn to the other player.
    pub fn switch(&mut self) {
        self.current = self.current.opponent();
        debug!("turn goes to {}", self.current().name());
    }

    /// Swaps the algorithm of every automated player, returning how many
    /// were rebound.
    pub fn rebind_automated(&mut self, strategy: MoveStrategy) -> usize {
        let mut rebound = 0;
        for player in self.players.iter_mut().filter(|p| p.is_automated()) {
            player.set_strategy(Some(strategy));
            rebound += 1;
        }
        rebound
    }
}
