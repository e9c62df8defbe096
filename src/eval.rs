//! Heuristic scoring of non-terminal positions.

use crate::board::{Board, Player};
use crate::pattern::has_run;
use crate::{WIDTH, WIN_LENGTH};

/// The weight of each evaluation feature.
///
/// The shipped values in [`Default`] are a hand tuning, not derived
/// from anything; swap in a custom table with
/// [`Searcher::with_weights`](crate::Searcher::with_weights).
#[derive(Copy, Clone, Debug)]
pub struct Weights {
    /// Opponent holds a winning run (subtracted)
    pub opponent_win: f64,
    /// Opponent holds a three-run (subtracted)
    pub opponent_three: f64,
    /// Opponent holds a two-run (subtracted)
    pub opponent_two: f64,
    /// The evaluated player holds a winning run
    pub win: f64,
    /// The evaluated player holds a three-run
    pub three: f64,
    /// The evaluated player holds a two-run
    pub two: f64,
    /// Penalty per outer column the evaluated player occupies
    pub edge_column: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            opponent_win: 18.0,
            opponent_three: 12.0,
            opponent_two: 6.0,
            win: 24.0,
            three: 15.0,
            two: 6.0,
            edge_column: 6.0,
        }
    }
}

impl Weights {
    /// Scores `board` from `player`'s perspective as a weighted sum of
    /// run indicators for both sides plus the edge-column penalties.
    pub fn evaluate(&self, board: &Board, player: Player) -> f64 {
        let opponent = player.other();
        let mut score = 0.0;

        if has_run(board, opponent, WIN_LENGTH) {
            score -= self.opponent_win;
        }
        if has_run(board, opponent, WIN_LENGTH - 1) {
            score -= self.opponent_three;
        }
        if has_run(board, opponent, WIN_LENGTH - 2) {
            score -= self.opponent_two;
        }

        if has_run(board, player, WIN_LENGTH) {
            score += self.win;
        }
        if has_run(board, player, WIN_LENGTH - 1) {
            score += self.three;
        }
        if has_run(board, player, WIN_LENGTH - 2) {
            score += self.two;
        }

        if board.column_contains(0, player) {
            score -= self.edge_column;
        }
        if board.column_contains(WIDTH - 1, player) {
            score -= self.edge_column;
        }

        score
    }
}

/// Scores `board` for `player` with the default weight table.
pub fn evaluate(board: &Board, player: Player) -> f64 {
    Weights::default().evaluate(board, player)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_scores_zero() {
        let board = Board::new();
        assert_eq!(evaluate(&board, Player::One), 0.0);
        assert_eq!(evaluate(&board, Player::Two), 0.0);
    }

    #[test]
    fn evaluation_is_idempotent() {
        let board = Board::from_moves("44552").unwrap();
        assert_eq!(evaluate(&board, Player::One), evaluate(&board, Player::One));
        assert_eq!(evaluate(&board, Player::Two), evaluate(&board, Player::Two));
    }

    #[test]
    fn winning_position_scores_every_own_run() {
        // player one wins along the bottom row, away from the edges
        let board = Board::from_moves("2737475").unwrap();
        let weights = Weights::default();

        // a four-run contains a three- and a two-run
        assert_eq!(
            evaluate(&board, Player::One),
            weights.win + weights.three + weights.two - weights.opponent_three
                - weights.opponent_two
        );
    }

    #[test]
    fn opponent_win_scores_negative() {
        let board = Board::from_moves("2737475").unwrap();
        let score = evaluate(&board, Player::Two);
        assert!(score < 0.0, "losing position scored {}", score);
    }

    #[test]
    fn edge_columns_are_penalized() {
        let weights = Weights::default();

        let left = Board::new().with_move(0, Player::One);
        assert_eq!(evaluate(&left, Player::One), -weights.edge_column);

        let right = Board::new().with_move(WIDTH - 1, Player::One);
        assert_eq!(evaluate(&right, Player::One), -weights.edge_column);

        // the opponent sitting on an edge costs the evaluated player nothing
        assert_eq!(evaluate(&left, Player::Two), 0.0);
    }

    #[test]
    fn custom_weights_are_honored() {
        let board = Board::new().with_move(3, Player::One).with_move(3, Player::One);

        let mut weights = Weights::default();
        weights.two = 100.0;
        assert_eq!(weights.evaluate(&board, Player::One), 100.0);
    }
}
