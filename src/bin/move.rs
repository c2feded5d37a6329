use std::path::PathBuf;

use clap::Parser;
use log::{error, info};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use dropfour::agents::Agent;
use dropfour::game::{Board, Player};
use dropfour::logging;

#[derive(Parser)]
#[command(name = "dropfour move", about = "Compute the next move for a board.")]
struct Opts {
    /// Agent configuration as JSON.
    #[arg(long, default_value_t)]
    config: Agent,
    /// Player to move.
    #[arg(long, value_enum, default_value_t = Player::O)]
    player: Player,
    /// Seed for the tie breaking.
    #[arg(long)]
    seed: Option<u64>,
    /// File containing the board, one row per line, top row first.
    file: PathBuf,
}

fn main() {
    logging();

    let Opts {
        config,
        player,
        seed,
        file,
    } = Opts::parse();

    let txt = match std::fs::read_to_string(&file) {
        Ok(txt) => txt,
        Err(e) => {
            error!("Could not read {:?}: {}", file, e);
            return;
        }
    };
    let Some(mut board) = Board::parse(&txt) else {
        error!("Invalid board in {:?}", file);
        return;
    };
    info!("{:?}", board);

    let mut rng = seed.map_or_else(SmallRng::from_entropy, SmallRng::seed_from_u64);
    match config.step(&mut board, player, &mut rng) {
        Ok(col) => info!("Step: {}", col),
        Err(e) => error!("{}", e),
    }
}
