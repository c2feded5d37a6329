use log::debug;
use rand::Rng;

use super::Difficulty;
use crate::game::{Board, Player};
use crate::search::{alphabeta, WindowHeuristic};
use crate::Result;

/// Alpha-beta search with the window heuristic.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MinimaxAgent {
    pub depth: usize,
    pub heuristic: WindowHeuristic,
}

impl Default for MinimaxAgent {
    fn default() -> Self {
        Self::from(Difficulty::default())
    }
}

impl From<Difficulty> for MinimaxAgent {
    fn from(difficulty: Difficulty) -> Self {
        Self {
            depth: difficulty.depth(),
            heuristic: WindowHeuristic::new(difficulty.center_weight()),
        }
    }
}

impl MinimaxAgent {
    pub fn step<R: Rng + ?Sized>(
        &self,
        board: &mut Board,
        player: Player,
        rng: &mut R,
    ) -> Result<usize> {
        let result = alphabeta(board, player, self.depth, &self.heuristic, rng)?;
        debug!("minimax {}: {:?}", player, result);
        Ok(result.column)
    }
}

#[cfg(test)]
mod test {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn hard_takes_the_win() {
        let mut board = Board::parse(
            r#"
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . . o . . .
            . . . o x . .
            . . x o x . ."#,
        )
        .unwrap();
        let mut rng = SmallRng::seed_from_u64(3);
        let agent = MinimaxAgent::from(Difficulty::Hard);
        assert_eq!(agent.step(&mut board, Player::O, &mut rng), Ok(3));
    }
}
