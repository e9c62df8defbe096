use anyhow::{anyhow, Result};
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_minimax::pattern::has_run;
use connect4_minimax::{Board, Cell, Player, HEIGHT, WIDTH, WIN_LENGTH};

#[derive(Copy, Clone, Debug)]
pub enum GameState {
    Playing,
    PlayerOneWin,
    PlayerTwoWin,
    Draw,
}

pub struct Game {
    pub board: Board,
    pub current: Player,
    pub state: GameState,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: Player::One,
            state: GameState::Playing,
        }
    }

    /// Plays `column` for the player to move, updating board, state
    /// and turn.
    pub fn play_checked(&mut self, column: usize) -> Result<GameState> {
        if column >= WIDTH {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 1 and {}",
                column + 1,
                WIDTH
            ));
        }
        if !self.board.playable(column) {
            return Err(anyhow!("Invalid move, column {} full", column + 1));
        }

        self.board = self.board.with_move(column, self.current);

        self.state = if has_run(&self.board, self.current, WIN_LENGTH) {
            match self.current {
                Player::One => GameState::PlayerOneWin,
                Player::Two => GameState::PlayerTwoWin,
            }
        } else if self.board.is_full() {
            GameState::Draw
        } else {
            GameState::Playing
        };
        self.current = self.current.other();

        Ok(self.state)
    }

    /// Draws the board under a row of column numbers.
    pub fn display(&self) -> Result<()> {
        let mut stdout = stdout();

        let columns: String = (1..=WIDTH).map(|x| x.to_string()).collect();
        stdout.queue(PrintStyledContent(style(columns + "\n")))?;

        for row in 0..HEIGHT {
            for column in 0..WIDTH {
                stdout.queue(PrintStyledContent(
                    style("O")
                        .attribute(Attribute::Bold)
                        .on(Color::DarkBlue)
                        .with(match self.board.get(row, column) {
                            Cell::PlayerOne => Color::Red,
                            Cell::PlayerTwo => Color::Yellow,
                            Cell::Empty => Color::DarkBlue,
                        }),
                ))?;
            }
            stdout.queue(PrintStyledContent(style("\n")))?;
        }
        stdout.flush()?;
        Ok(())
    }
}
