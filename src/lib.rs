//! Tic-tac-toe on a 3x3 board with three interchangeable move strategies:
//! uniform random, fixed-depth negamax, and Monte Carlo tree search.
//!
//! ```
//! use ttt_engine::{Engine, GameConfig, Outcome, SearchConfig};
//!
//! let config = SearchConfig::default().with_iterations(200).with_seed(7);
//! let mut engine = Engine::new(&GameConfig::default(), config).unwrap();
//!
//! // X is human in the default setup: no move is suggested for it.
//! assert_eq!(engine.request_move().unwrap(), None);
//! let cell = ttt_engine::Coordinates::new(1, 1).unwrap();
//! assert_eq!(engine.play(cell).unwrap(), Outcome::InProgress);
//!
//! // O is driven by MCTS.
//! let reply = engine.request_move().unwrap().unwrap();
//! assert!(engine.board().is_empty(reply));
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod mcts;
pub mod naive;
pub mod negamax;
pub mod player;
pub mod state;
pub mod strategy;
pub mod tic_tac_toe;

pub use config::{GameConfig, PlayerConfig, SearchConfig};
pub use engine::{Engine, EngineRecord};
pub use error::{Error, Result};
pub use game::{Game, Position};
pub use mcts::MCTS;
pub use negamax::Negamax;
pub use player::{Player, PlayersMatch};
pub use state::RoomStore;
pub use strategy::MoveStrategy;
pub use tic_tac_toe::{Board, Cell, Coordinates, Grid, Mark, Move, Outcome};
