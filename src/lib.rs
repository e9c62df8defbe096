//! A heuristic agent for playing the board game 'Connect 4'
//!
//! This agent uses bounded-depth game tree search to pick a move for
//! any position, either assuming an optimal opponent (alpha-beta) or an
//! opponent choosing uniformly at random (expectimax).
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{Board, Player, SearchMode, Searcher};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let searcher = Searcher::new(Player::One);
//! let column = searcher.select_move(&Board::new(), SearchMode::AlphaBeta)?;
//!
//! assert!(column < connect4_minimax::WIDTH);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod pattern;

pub mod eval;

pub mod search;

pub mod agent;


/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The run length that wins the game
pub const WIN_LENGTH: usize = 4;

/// How many plies beyond the root the searches look before cutting off.
/// Deliberately shallow to keep move latency bounded
pub const SEARCH_DEPTH: usize = 3;

pub use board::{Board, Cell, Player};
pub use search::{SearchMode, Searcher};

// ensure a winning run fits on the board in every orientation
const_assert!(WIN_LENGTH <= WIDTH);
const_assert!(WIN_LENGTH <= HEIGHT);
