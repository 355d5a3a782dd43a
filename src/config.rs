//! Search parameters and new-game setup.

use serde::{Deserialize, Serialize};

use crate::strategy::MoveStrategy;
use crate::tic_tac_toe::Mark;

/// Parameters shared by the automated strategies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Plies explored by negamax before a position is scored as undecided.
    pub negamax_depth: u8,

    /// Selection/expansion/rollout/backpropagation rounds per MCTS decision.
    pub mcts_iterations: u32,

    /// UCT exploration constant.
    pub exploration: f64,

    /// Seed for the engine's random source. `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            negamax_depth: 6,
            mcts_iterations: 10_000,
            exploration: std::f64::consts::SQRT_2,
            seed: None,
        }
    }
}

impl SearchConfig {
    pub fn with_iterations(mut self, mcts_iterations: u32) -> Self {
        self.mcts_iterations = mcts_iterations;
        self
    }

    pub fn with_depth(mut self, negamax_depth: u8) -> Self {
        self.negamax_depth = negamax_depth;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Describes one side of a new game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub identity: String,
    pub name: String,
    pub mark: Mark,
    /// `None` for a human, whose moves arrive from outside the engine.
    pub strategy: Option<MoveStrategy>,
}

impl PlayerConfig {
    pub fn human(identity: &str, name: &str, mark: Mark) -> Self {
        Self {
            identity: identity.to_string(),
            name: name.to_string(),
            mark,
            strategy: None,
        }
    }

    pub fn automated(identity: &str, name: &str, mark: Mark, strategy: MoveStrategy) -> Self {
        Self {
            identity: identity.to_string(),
            name: name.to_string(),
            mark,
            strategy: Some(strategy),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub players: [PlayerConfig; 2],
    pub starting_mark: Mark,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: [
                PlayerConfig::human("player-1", "Player 1", Mark::X),
                PlayerConfig::automated(
                    "botybot",
                    "Botybot",
                    Mark::O,
                    MoveStrategy::MonteCarloTreeSearch,
                ),
            ],
            starting_mark: Mark::X,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_search_config() {
        let config = SearchConfig::default();
        assert_eq!(config.negamax_depth, 6);
        assert_eq!(config.mcts_iterations, 10_000);
        assert!((config.exploration - 2f64.sqrt()).abs() < 1e-12);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builders() {
        let config = SearchConfig::default()
            .with_iterations(500)
            .with_depth(4)
            .with_seed(7);
        assert_eq!(config.mcts_iterations, 500);
        assert_eq!(config.negamax_depth, 4);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_default_game_config() {
        let config = GameConfig::default();
        assert_eq!(config.starting_mark, Mark::X);
        assert_eq!(config.players[0].strategy, None);
        assert_eq!(
            config.players[1].strategy,
            Some(MoveStrategy::MonteCarloTreeSearch)
        );
    }
}
