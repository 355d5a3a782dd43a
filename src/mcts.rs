use log::{debug, trace};
use rand::Rng;

use crate::error::{Error, Result};
use crate::game::Game;
use crate::naive;

/// UCT search with uniformly random rollouts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MCTS {
    iterations: u32,
    exploration: f64,
}

/// Index into the search arena.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
struct NodeId(usize);

struct Node<G: Game> {
    visits: u32,
    wins: u32,
    draws: u32,
    losses: u32,
    /// Player whose move led here; statistics are kept from their side.
    mover: Option<G::Player>,
    parent: Option<NodeId>,
    children: Vec<(G::Action, NodeId)>,
    unvisited_moves: Vec<G::Action>,
    winner: Option<G::Player>,
    terminal: bool,
}

impl<G: Game> Node<G> {
    fn new(game: &G, mover: Option<G::Player>, parent: Option<NodeId>) -> Self {
        let terminal = game.done();
        Self {
            visits: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            mover,
            parent,
            children: Vec::new(),
            unvisited_moves: if terminal {
                Vec::new()
            } else {
                game.get_available_moves()
            },
            winner: game.check_winner(),
            terminal,
        }
    }

    fn win_rate(&self) -> f64 {
        if self.visits == 0 {
            return 0.0;
        }
        (f64::from(self.wins) + 0.5 * f64::from(self.draws)) / f64::from(self.visits)
    }
}

struct Database<G: Game> {
    nodes: Vec<Node<G>>,
}

impl<G: Game> Database<G> {
    fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    fn get(&self, id: NodeId) -> &Node<G> {
        &self.nodes[id.0]
    }

    fn get_mut(&mut self, id: NodeId) -> &mut Node<G> {
        &mut self.nodes[id.0]
    }

    fn insert(&mut self, node: Node<G>) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }
}

impl MCTS {
    /// At least one iteration always runs, so a non-finished root has a
    /// child to answer with.
    pub fn new(iterations: u32, exploration: f64) -> Self {
        Self {
            iterations: iterations.max(1),
            exploration,
        }
    }

    /// Runs the search and answers with the root's most visited child.
    pub fn select_move<G: Game, R: Rng + ?Sized>(
        &self,
        game: &G,
        rng: &mut R,
    ) -> Result<G::Action> {
        if game.done() {
            return Err(Error::NoLegalMove);
        }
        let moves = game.get_available_moves();
        if let [only] = moves.as_slice() {
            return Ok(*only);
        }

        let mut db = Database::new();
        let root_id = db.insert(Node::new(game, None, None));
        for _ in 0..self.iterations {
            // Each iteration walks and rolls out on its own copy.
            let game = &mut game.clone();
            let leaf_id = self.tree_policy(root_id, &mut db, game, rng)?;
            let winner = self.default_policy(game, rng)?;
            self.backpropagate(leaf_id, winner, &mut db);
        }
        self.best_action(root_id, &db)
    }

    fn tree_policy<G: Game, R: Rng + ?Sized>(
        &self,
        root: NodeId,
        db: &mut Database<G>,
        game: &mut G,
        rng: &mut R,
    ) -> Result<NodeId> {
        let mut node_id = root;
        loop {
            let node = db.get(node_id);
            if node.terminal {
                return Ok(node_id);
            }
            if !node.unvisited_moves.is_empty() {
                return self.expand(node_id, db, game, rng);
            }
            let (action, child) = self.best_child(db, node_id).ok_or(Error::NoLegalMove)?;
            game.make(action)?;
            node_id = child;
        }
    }

    fn expand<G: Game, R: Rng + ?Sized>(
        &self,
        node_id: NodeId,
        db: &mut Database<G>,
        game: &mut G,
        rng: &mut R,
    ) -> Result<NodeId> {
        let node = db.get_mut(node_id);
        let index = rng.gen_range(0..node.unvisited_moves.len());
        let action = node.unvisited_moves.swap_remove(index);

        let mover = game.current_player();
        game.make(action)?;
        let child_id = db.insert(Node::new(game, Some(mover), Some(node_id)));
        db.get_mut(node_id).children.push((action, child_id));
        Ok(child_id)
    }

    /// UCT: `win_rate + C * sqrt(ln(parent visits) / child visits)`.
    fn best_child<G: Game>(&self, db: &Database<G>, node_id: NodeId) -> Option<(G::Action, NodeId)> {
        let node = db.get(node_id);
        let ln_visits = f64::from(node.visits).ln();

        let mut best: Option<(G::Action, NodeId, f64)> = None;
        for &(action, child_id) in &node.children {
            let child = db.get(child_id);
            let value = child.win_rate()
                + self.exploration * (ln_visits / f64::from(child.visits)).sqrt();
            if best.map_or(true, |(_, _, best_value)| value > best_value) {
                best = Some((action, child_id, value));
            }
        }
        best.map(|(action, child_id, _)| (action, child_id))
    }

    /// Plays random moves until the game ends, returning the winner.
    fn default_policy<G: Game, R: Rng + ?Sized>(
        &self,
        game: &mut G,
        rng: &mut R,
    ) -> Result<Option<G::Player>> {
        loop {
            if let Some(winner) = game.check_winner() {
                return Ok(Some(winner));
            }
            let available_moves = game.get_available_moves();
            if available_moves.is_empty() {
                return Ok(None);
            }
            let action = naive::pick(&available_moves, rng)?;
            game.make(action)?;
        }
    }

    fn backpropagate<G: Game>(
        &self,
        node_id: NodeId,
        winner: Option<G::Player>,
        db: &mut Database<G>,
    ) {
        let mut node_id = Some(node_id);
        while let Some(id) = node_id {
            let node = db.get_mut(id);
            node.visits += 1;
            match winner {
                None => node.draws += 1,
                Some(player) if Some(player) == node.mover => node.wins += 1,
                Some(_) => node.losses += 1,
            }
            node_id = node.parent;
        }
    }

    /// Robust child: most visits, earliest action on ties.
    fn best_action<G: Game>(&self, node_id: NodeId, db: &Database<G>) -> Result<G::Action> {
        let node = db.get(node_id);
        let mut best: Option<(G::Action, u32)> = None;
        for &(action, child_id) in &node.children {
            let child = db.get(child_id);
            trace!(
                "mcts: {:?} visits={} wins={} draws={} losses={} terminal_winner={:?}",
                action,
                child.visits,
                child.wins,
                child.draws,
                child.losses,
                child.winner
            );
            let better = match best {
                None => true,
                Some((best_action, best_visits)) => {
                    child.visits > best_visits
                        || (child.visits == best_visits && action < best_action)
                }
            };
            if better {
                best = Some((action, child.visits));
            }
        }

        let (action, visits) = best.ok_or(Error::NoLegalMove)?;
        debug!(
            "mcts picked {:?} after {} iterations ({} visits)",
            action, self.iterations, visits
        );
        Ok(action)
    }
}
