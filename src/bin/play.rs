use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};
use log::{debug, warn};
use owo_colors::OwoColorize;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use dropfour::agents::{Agent, Difficulty};
use dropfour::game::{Game, Outcome, Player, Scoreboard};
use dropfour::logging;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Player vs player
    Pvp,
    /// Player vs computer
    Pvc,
}

#[derive(Parser)]
#[command(name = "dropfour", about = "Play connect four in the terminal.")]
struct Opts {
    #[arg(long, value_enum, default_value_t = Mode::Pvc)]
    mode: Mode,
    /// Strength of the computer player.
    #[arg(short, long, value_enum, default_value_t)]
    difficulty: Difficulty,
    /// Overrides the difficulty with an agent configuration as JSON.
    #[arg(long)]
    config: Option<Agent>,
    /// Seed for all random decisions, entropy if omitted.
    #[arg(long)]
    seed: Option<u64>,
}

/// The human plays x, the computer o.
const COMPUTER: Player = Player::O;

fn main() -> io::Result<()> {
    logging();

    let Opts {
        mode,
        difficulty,
        config,
        seed,
    } = Opts::parse();

    let agent = config.unwrap_or_else(|| Agent::from(difficulty));
    debug!("{:?} {}", mode, agent);

    let mut rng = seed.map_or_else(SmallRng::from_entropy, SmallRng::seed_from_u64);
    let mut lines = io::stdin().lock().lines();
    let mut score = Scoreboard::default();
    let first = if rng.gen() { Player::X } else { Player::O };
    let mut game = Game::new(first);
    println!("Enter a column 0-6, or r to restart the game");

    loop {
        println!("{} starts", game.first());

        let mut restart = false;
        while game.outcome() == Outcome::None {
            let player = game.to_move();
            print!("{}", game.board);

            let col = if mode == Mode::Pvc && player == COMPUTER {
                match agent.step(&mut game.board, player, &mut rng) {
                    Ok(col) => {
                        println!("{} plays {}", player, col);
                        col
                    }
                    Err(e) => {
                        warn!("{}", e);
                        break;
                    }
                }
            } else {
                print!("{} > ", player);
                io::stdout().flush()?;
                let Some(line) = lines.next() else {
                    return Ok(());
                };
                let line = line?;
                let line = line.trim();
                if line.eq_ignore_ascii_case("r") {
                    restart = true;
                    break;
                }
                match line.parse::<usize>() {
                    Ok(col) => col,
                    Err(_) => {
                        warn!("Enter a column number");
                        continue;
                    }
                }
            };

            if let Err(e) = game.play(col) {
                warn!("{}", e);
            }
        }
        if restart {
            game.rematch();
            continue;
        }

        print!("{}", game.board);
        match game.outcome() {
            Outcome::Winner(p) => println!("{} {}", p.bright_green(), "wins!".bright_green()),
            Outcome::Draw => println!("{}", "Draw".bright_blue()),
            Outcome::None => println!("{}", "Game aborted".yellow()),
        }
        score.record(game.outcome());
        println!(
            "Score: x {} / o {} / draw {}",
            score.x, score.o, score.draws
        );

        print!("Play again? [y/n] ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(());
        };
        if !line?.trim().eq_ignore_ascii_case("y") {
            return Ok(());
        }
        game.rematch();
    }
}
