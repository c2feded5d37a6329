use rand::seq::IteratorRandom;
use rand::Rng;

use crate::game::Board;
use crate::{Error, Result};

/// Plays a uniformly random legal column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RandomAgent;

impl RandomAgent {
    pub fn step<R: Rng + ?Sized>(&self, board: &Board, rng: &mut R) -> Result<usize> {
        board.legal_columns().choose(rng).ok_or(Error::NoLegalMoves)
    }
}
