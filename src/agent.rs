//! The players a game loop can drive interchangeably.

use std::io::{stdin, stdout, Write};

use anyhow::{anyhow, Result};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::{Board, Player};
use crate::search::{SearchMode, Searcher};
use crate::WIDTH;

/// Picks a column for the current board.
pub trait Agent {
    fn select_move(&mut self, board: &Board) -> Result<usize>;

    fn name(&self) -> &str;
}

/// The search-driven player.
pub struct AiAgent {
    searcher: Searcher,
    mode: SearchMode,
}

impl AiAgent {
    pub fn new(player: Player, mode: SearchMode) -> Self {
        Self {
            searcher: Searcher::new(player),
            mode,
        }
    }
}

impl Agent for AiAgent {
    fn select_move(&mut self, board: &Board) -> Result<usize> {
        self.searcher.select_move(board, self.mode)
    }

    fn name(&self) -> &str {
        match self.mode {
            SearchMode::AlphaBeta => "ai (alpha-beta)",
            SearchMode::Expectimax => "ai (expectimax)",
        }
    }
}

/// Chooses uniformly between the legal columns.
pub struct RandomAgent {
    rng: SmallRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, board: &Board) -> Result<usize> {
        board
            .legal_moves()
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| anyhow!("no legal moves to choose from"))
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// Reads a 1-indexed column from standard input, re-prompting until
/// the input parses and the column is open.
pub struct HumanAgent;

impl Agent for HumanAgent {
    fn select_move(&mut self, board: &Board) -> Result<usize> {
        let legal = board.legal_moves();
        if legal.is_empty() {
            return Err(anyhow!("no legal moves to play"));
        }

        let stdin = stdin();
        loop {
            print!("Move input (1-{}) > ", WIDTH);
            stdout().flush()?;

            let mut buffer = String::new();
            stdin.read_line(&mut buffer)?;

            let column = match buffer.trim().parse::<usize>() {
                Ok(column @ 1..=WIDTH) => column - 1,
                _ => {
                    println!("Invalid number: {}", buffer.trim());
                    continue;
                }
            };

            if !legal.contains(&column) {
                let open: Vec<usize> = legal.iter().map(|&c| c + 1).collect();
                println!("Column {} full, choose from: {:?}", column + 1, open);
                continue;
            }
            return Ok(column);
        }
    }

    fn name(&self) -> &str {
        "human"
    }
}
