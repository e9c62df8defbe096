use anyhow::Result;

use std::io::{stdin, stdout, Stdin, Write};

use connect4_minimax::agent::{Agent, AiAgent, HumanAgent, RandomAgent};
use connect4_minimax::{Player, SearchMode};

mod game;
use game::{Game, GameState};

#[derive(Copy, Clone, Eq, PartialEq)]
enum Kind {
    Ai,
    Random,
    Human,
}

fn prompt_kind(stdin: &Stdin, label: &str) -> Result<Kind> {
    loop {
        print!("Player {} type (ai/random/human): ", label);
        stdout().flush().expect("failed to flush to stdout!");

        let mut buffer = String::new();
        stdin.read_line(&mut buffer)?;

        match buffer.trim().to_lowercase().as_str() {
            "ai" => return Ok(Kind::Ai),
            "random" => return Ok(Kind::Random),
            "human" => return Ok(Kind::Human),
            _ => println!("Unknown answer given"),
        }
    }
}

fn make_agent(kind: Kind, player: Player, opponent: Kind) -> Box<dyn Agent> {
    match kind {
        Kind::Ai => {
            // a random opponent is modeled by the expectimax search,
            // anything else by alpha-beta
            let mode = if opponent == Kind::Random {
                SearchMode::Expectimax
            } else {
                SearchMode::AlphaBeta
            };
            Box::new(AiAgent::new(player, mode))
        }
        Kind::Random => Box::new(RandomAgent::new()),
        Kind::Human => Box::new(HumanAgent),
    }
}

fn main() -> Result<()> {
    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    let kind_one = prompt_kind(&stdin, "1")?;
    let kind_two = prompt_kind(&stdin, "2")?;

    let mut player_one = make_agent(kind_one, Player::One, kind_two);
    let mut player_two = make_agent(kind_two, Player::Two, kind_one);

    let mut game = Game::new();

    // game loop
    loop {
        game.display().expect("Failed to draw board!");

        match game.state {
            GameState::Playing => {
                let (agent, kind) = match game.current {
                    Player::One => (&mut player_one, kind_one),
                    Player::Two => (&mut player_two, kind_two),
                };

                if kind == Kind::Ai {
                    println!("{} is thinking...", agent.name());
                    stdout().flush().expect("Failed to flush to stdout!");
                }

                let next_move = agent.select_move(&game.board)?;
                if let Err(err) = game.play_checked(next_move) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
            }

            // end states
            GameState::PlayerOneWin => {
                println!("Player 1 wins!");
                break;
            }
            GameState::PlayerTwoWin => {
                println!("Player 2 wins!");
                break;
            }
            GameState::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    Ok(())
}
