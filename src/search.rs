//! Bounded-depth adversarial search.
//!
//! Two opponent models share the same terminal test and evaluation: an
//! optimal opponent (alpha-beta minimax) and one choosing uniformly at
//! random among its legal replies (expectimax).

use anyhow::{anyhow, Result};

use crate::board::{Board, Player};
use crate::eval::Weights;
use crate::pattern::has_run;
use crate::{SEARCH_DEPTH, WIN_LENGTH};

/// Which opponent model drives the search.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum SearchMode {
    /// The opponent plays the reply that is worst for us
    AlphaBeta,
    /// The opponent plays every legal reply with equal probability
    Expectimax,
}

// expectimax node kinds, alternating by depth parity
#[derive(Copy, Clone)]
enum Node {
    Max,
    Chance,
}

/// An agent that searches the game tree from one player's point of view.
///
/// Each call to a search entry point owns its own record of root move
/// values, so a `Searcher` can be shared freely between positions.
pub struct Searcher {
    player: Player,
    depth: usize,
    weights: Weights,
}

impl Searcher {
    /// Creates a searcher playing for `player` with the default depth
    /// cutoff and weight table.
    pub fn new(player: Player) -> Self {
        Self {
            player,
            depth: SEARCH_DEPTH,
            weights: Weights::default(),
        }
    }

    /// Overrides the depth cutoff on an existing `Searcher`
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    /// Overrides the evaluation weights on an existing `Searcher`
    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    /// Picks a column for the searcher's player under the given
    /// opponent model.
    ///
    /// Fails when no move can be recovered: the board is full, or the
    /// position is already decided so the search never branches.
    pub fn select_move(&self, board: &Board, mode: SearchMode) -> Result<usize> {
        match mode {
            SearchMode::AlphaBeta => self.alpha_beta_move(board),
            SearchMode::Expectimax => self.expectimax_move(board),
        }
    }

    /// Best move assuming an optimal opponent
    pub fn alpha_beta_move(&self, board: &Board) -> Result<usize> {
        let (value, root_values) = self.alpha_beta_root(board);
        recover_move(value, &root_values)
    }

    /// Best move assuming a uniformly random opponent
    pub fn expectimax_move(&self, board: &Board) -> Result<usize> {
        let (value, root_values) = self.expectimax_root(board);
        recover_move(value, &root_values)
    }

    /// Runs the alpha-beta search, returning the root value together
    /// with the (column, running value) pairs recorded at the root.
    /// Pruning can discard exact values of some root branches, which is
    /// why the running values are kept for move recovery.
    pub fn alpha_beta_root(&self, board: &Board) -> (f64, Vec<(usize, f64)>) {
        let mut root_values = Vec::new();
        let value = self.max_value(
            board,
            f64::NEG_INFINITY,
            f64::INFINITY,
            0,
            &mut root_values,
        );
        (value, root_values)
    }

    /// Runs the expectimax search, returning the root value and the
    /// recorded root move values as in [`alpha_beta_root`].
    ///
    /// [`alpha_beta_root`]: #method.alpha_beta_root
    pub fn expectimax_root(&self, board: &Board) -> (f64, Vec<(usize, f64)>) {
        let mut root_values = Vec::new();
        let value = self.expectimax_value(board, 0, Node::Max, &mut root_values);
        (value, root_values)
    }

    // a search leaf: either player has a winning run, or the depth
    // cutoff is reached
    fn is_terminal(&self, board: &Board, depth: usize) -> bool {
        has_run(board, Player::One, WIN_LENGTH)
            || has_run(board, Player::Two, WIN_LENGTH)
            || depth == self.depth
    }

    fn max_value(
        &self,
        board: &Board,
        mut alpha: f64,
        beta: f64,
        depth: usize,
        root_values: &mut Vec<(usize, f64)>,
    ) -> f64 {
        if self.is_terminal(board, depth) {
            return self.weights.evaluate(board, self.player);
        }

        let mut value = f64::NEG_INFINITY;
        for column in board.legal_moves() {
            let next = board.with_move(column, self.player);
            value = value.max(self.min_value(&next, alpha, beta, depth + 1, root_values));
            if value >= beta {
                return value;
            }
            alpha = alpha.max(value);
            if depth == 0 {
                root_values.push((column, value));
            }
        }
        value
    }

    fn min_value(
        &self,
        board: &Board,
        alpha: f64,
        mut beta: f64,
        depth: usize,
        root_values: &mut Vec<(usize, f64)>,
    ) -> f64 {
        if self.is_terminal(board, depth) {
            return self.weights.evaluate(board, self.player);
        }

        let mut value = f64::INFINITY;
        for column in board.legal_moves() {
            let next = board.with_move(column, self.player.other());
            value = value.min(self.max_value(&next, alpha, beta, depth + 1, root_values));
            if value <= alpha {
                return value;
            }
            beta = beta.min(value);
        }
        value
    }

    fn expectimax_value(
        &self,
        board: &Board,
        depth: usize,
        node: Node,
        root_values: &mut Vec<(usize, f64)>,
    ) -> f64 {
        if self.is_terminal(board, depth) {
            return self.weights.evaluate(board, self.player);
        }

        match node {
            Node::Max => {
                let mut value = f64::NEG_INFINITY;
                for column in board.legal_moves() {
                    let next = board.with_move(column, self.player);
                    value =
                        value.max(self.expectimax_value(&next, depth + 1, Node::Chance, root_values));
                    if depth == 0 {
                        root_values.push((column, value));
                    }
                }
                value
            }
            Node::Chance => {
                // every legal reply is equally likely; a full board
                // reaches no reply and sums to zero
                let moves = board.legal_moves();
                let probability = 1.0 / moves.len() as f64;

                let mut value = 0.0;
                for column in moves {
                    let next = board.with_move(column, self.player.other());
                    value +=
                        probability * self.expectimax_value(&next, depth + 1, Node::Max, root_values);
                }
                value
            }
        }
    }
}

// The root value is always a bit-for-bit copy of one of the recorded
// running values, so exact comparison recovers the first column that
// reached it.
fn recover_move(value: f64, root_values: &[(usize, f64)]) -> Result<usize> {
    root_values
        .iter()
        .find(|&&(_, recorded)| recorded == value)
        .map(|&(column, _)| column)
        .ok_or_else(|| anyhow!("no move available, the position is full or already decided"))
}
