use std::time::Instant;

use clap::Parser;
use log::{error, info};
use owo_colors::OwoColorize;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use dropfour::agents::Agent;
use dropfour::game::{Game, Outcome, Player, Scoreboard};
use dropfour::logging;

#[derive(Parser)]
#[command(
    name = "dropfour simulator",
    about = "Simulate games between two computer players."
)]
struct Opts {
    #[arg(short, long, default_value_t = 1)]
    game_count: usize,
    /// Seed for all random decisions, entropy if omitted.
    #[arg(long)]
    seed: Option<u64>,
    #[arg(short, long)]
    verbose: bool,
    /// Configuration of player x.
    #[arg(default_value_t)]
    x: Agent,
    /// Configuration of player o.
    #[arg(default_value_t)]
    o: Agent,
}

fn main() {
    logging();

    let Opts {
        game_count,
        seed,
        verbose,
        x,
        o,
    } = Opts::parse();

    let mut rng = seed.map_or_else(SmallRng::from_entropy, SmallRng::seed_from_u64);
    let start = Instant::now();
    let mut score = Scoreboard::default();

    for i in 0..game_count {
        // alternate who starts
        let first = if i % 2 == 0 { Player::X } else { Player::O };
        let mut game = Game::new(first);

        while game.outcome() == Outcome::None {
            let player = game.to_move();
            let agent = match player {
                Player::X => &x,
                Player::O => &o,
            };
            let col = match agent.step(&mut game.board, player, &mut rng) {
                Ok(col) => col,
                Err(e) => {
                    error!("{}: {}", player, e);
                    return;
                }
            };
            if let Err(e) = game.play(col) {
                error!("{}: {}", player, e);
                return;
            }
            if verbose {
                info!("{} -> {}: {:?}", player, col, game);
            }
        }

        score.record(game.outcome());
        info!(
            "{}: {} {:?} {}ms",
            "Finish Game".bright_green(),
            i,
            game.outcome(),
            start.elapsed().as_millis()
        );
    }

    info!(
        "Result: x {} / o {} / draw {} of {}",
        score.x,
        score.o,
        score.draws,
        score.games()
    );
}
