//! Run detection over every line of the board.
//!
//! One primitive walks a line of cells counting consecutive markers;
//! it is applied to the rows, the columns and both diagonal families,
//! so win checking and the evaluation's three- and two-run features all
//! share the same scan parameterized by run length.

use crate::board::{Board, Cell, Player};
use crate::{HEIGHT, WIDTH};

/// True iff `run_length` consecutive cells of `line` hold `marker`.
fn line_has_run<I>(line: I, marker: Cell, run_length: usize) -> bool
where
    I: IntoIterator<Item = Cell>,
{
    let mut run = 0;
    for cell in line {
        if cell == marker {
            run += 1;
            if run == run_length {
                return true;
            }
        } else {
            run = 0;
        }
    }
    false
}

/// Walks a diagonal from `(row, column)` downwards, stepping `step`
/// columns to the right each row.
fn diagonal(board: &Board, row: usize, column: usize, step: isize) -> impl Iterator<Item = Cell> + '_ {
    let mut row = row as isize;
    let mut column = column as isize;
    std::iter::from_fn(move || {
        if row < HEIGHT as isize && column >= 0 && column < WIDTH as isize {
            let cell = board.get(row as usize, column as usize);
            row += 1;
            column += step;
            Some(cell)
        } else {
            None
        }
    })
}

/// True iff the board contains `run_length` contiguous tiles of
/// `player` along some row, column or diagonal. Every diagonal is
/// scanned, including the short ones near the corners.
pub fn has_run(board: &Board, player: Player, run_length: usize) -> bool {
    let marker = player.cell();

    for row in 0..HEIGHT {
        if line_has_run(board.row(row).iter().copied(), marker, run_length) {
            return true;
        }
    }

    for column in 0..WIDTH {
        let cells = (0..HEIGHT).map(|row| board.get(row, column));
        if line_has_run(cells, marker, run_length) {
            return true;
        }
    }

    // diagonals start from the top row and the outer column of their
    // direction: step 1 walks down-right, step -1 down-left
    for &step in &[1isize, -1] {
        let edge = if step == 1 { 0 } else { WIDTH - 1 };
        let starts = (0..WIDTH)
            .map(|column| (0, column))
            .chain((1..HEIGHT).map(|row| (row, edge)));

        for (row, column) in starts {
            if line_has_run(diagonal(board, row, column, step), marker, run_length) {
                return true;
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_has_no_runs() {
        let board = Board::new();
        for run_length in 1..=4 {
            assert!(!has_run(&board, Player::One, run_length));
            assert!(!has_run(&board, Player::Two, run_length));
        }
    }

    #[test]
    fn horizontal_runs() {
        // player one on columns 1-4 of the bottom row
        let board = Board::from_moves("2737475").unwrap();

        assert!(has_run(&board, Player::One, 4));
        assert!(has_run(&board, Player::One, 3));
        assert!(has_run(&board, Player::One, 2));
        assert!(!has_run(&board, Player::Two, 4));
    }

    #[test]
    fn vertical_runs() {
        // player two stacks column 7 while player one spreads out
        let board = Board::from_moves("173757").unwrap();

        assert!(has_run(&board, Player::Two, 3));
        assert!(has_run(&board, Player::Two, 2));
        assert!(!has_run(&board, Player::Two, 4));
        assert!(!has_run(&board, Player::One, 2));

        let board = board.with_move(6, Player::Two);
        assert!(has_run(&board, Player::Two, 4));
    }

    #[test]
    fn down_right_diagonal_run() {
        // player one tiles at (5,0), (4,1), (3,2), (2,3)
        let board = Board::new()
            .with_move(0, Player::One)
            .with_move(1, Player::Two)
            .with_move(1, Player::One)
            .with_move(2, Player::Two)
            .with_move(2, Player::Two)
            .with_move(2, Player::One)
            .with_move(3, Player::Two)
            .with_move(3, Player::Two)
            .with_move(3, Player::Two)
            .with_move(3, Player::One);

        assert!(has_run(&board, Player::One, 4));
        assert!(!has_run(&board, Player::Two, 4));
    }

    #[test]
    fn down_left_diagonal_run() {
        // the mirror image: player one at (5,6), (4,5), (3,4), (2,3)
        let board = Board::new()
            .with_move(6, Player::One)
            .with_move(5, Player::Two)
            .with_move(5, Player::One)
            .with_move(4, Player::Two)
            .with_move(4, Player::Two)
            .with_move(4, Player::One)
            .with_move(3, Player::Two)
            .with_move(3, Player::Two)
            .with_move(3, Player::Two)
            .with_move(3, Player::One);

        assert!(has_run(&board, Player::One, 4));
        assert!(!has_run(&board, Player::Two, 4));
    }

    #[test]
    fn short_corner_diagonal_is_scanned() {
        // two-run on the length-two diagonal (4,0)-(5,1)
        let board = Board::new()
            .with_move(1, Player::One)
            .with_move(0, Player::Two)
            .with_move(0, Player::One);

        assert!(has_run(&board, Player::One, 2));
        assert!(!has_run(&board, Player::One, 3));
    }

    #[test]
    fn gaps_break_runs() {
        // columns 1, 2 and 4: a hole at column 3
        let board = Board::new()
            .with_move(0, Player::One)
            .with_move(1, Player::One)
            .with_move(3, Player::One);

        assert!(has_run(&board, Player::One, 2));
        assert!(!has_run(&board, Player::One, 3));
    }

    #[test]
    fn longer_runs_contain_shorter_ones() {
        let board = Board::from_moves("2737475").unwrap();
        for run_length in 1..=4 {
            assert!(has_run(&board, Player::One, run_length));
        }
    }

    #[test]
    fn runs_of_one_are_single_tiles() {
        let board = Board::new().with_move(5, Player::Two);
        assert!(has_run(&board, Player::Two, 1));
        assert!(!has_run(&board, Player::One, 1));
    }
}
