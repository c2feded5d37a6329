mod alphabeta;
pub use alphabeta::*;
mod heuristic;
pub use heuristic::*;

use std::fmt::Debug;

use crate::game::{Board, Player};

/// Value of a position won by the maximizing player.
pub const WIN: i64 = 100_000_000_000_000;
pub const DRAW: i64 = 0;
/// Value of a position won by the minimizing player.
///
/// Smaller in magnitude than `WIN`, both dominate every heuristic score.
pub const LOSS: i64 = -10_000_000_000_000;

/// A heuristic that evaluates the board at the leafs of a tree search.
pub trait Heuristic: Debug {
    /// How favorable the board is for `player`, higher is better.
    fn eval(&self, board: &Board, player: Player) -> i64;
}
