use std::fmt;
use std::str::FromStr;

mod minimax;
pub use minimax::*;
mod random;
pub use random::*;

use rand::Rng;

use crate::game::{Board, Player};
use crate::Result;

/// Computer player configuration.
///
/// Parsed from and printed as JSON, e.g. `{"Minimax":{"depth":5}}` or `{"Random":null}`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Agent {
    Minimax(MinimaxAgent),
    Random(RandomAgent),
}

impl Default for Agent {
    fn default() -> Self {
        Self::Minimax(MinimaxAgent::default())
    }
}

impl Agent {
    /// Chooses a column for `player`.
    ///
    /// The board is used as scratch space and is unchanged afterwards.
    pub fn step<R: Rng + ?Sized>(
        &self,
        board: &mut Board,
        player: Player,
        rng: &mut R,
    ) -> Result<usize> {
        match self {
            Agent::Minimax(agent) => agent.step(board, player, rng),
            Agent::Random(agent) => agent.step(board, rng),
        }
    }
}

impl From<Difficulty> for Agent {
    fn from(difficulty: Difficulty) -> Self {
        Self::Minimax(MinimaxAgent::from(difficulty))
    }
}

impl FromStr for Agent {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

/// Difficulty tiers of the computer player.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Search depth in plies.
    pub fn depth(self) -> usize {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 3,
            Difficulty::Hard => 5,
        }
    }

    /// Bonus per mark in the center column, only the hard tier uses it.
    pub fn center_weight(self) -> i64 {
        match self {
            Difficulty::Hard => 3,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod test {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::*;
    use crate::search::WindowHeuristic;

    #[test]
    fn difficulty_tiers() {
        assert_eq!(Difficulty::Easy.depth(), 1);
        assert_eq!(Difficulty::Medium.depth(), 3);
        assert_eq!(Difficulty::Hard.depth(), 5);
        assert_eq!(Difficulty::Medium.center_weight(), 0);
        assert_eq!(Difficulty::Hard.center_weight(), 3);

        assert_eq!(
            Agent::from(Difficulty::Hard),
            Agent::Minimax(MinimaxAgent {
                depth: 5,
                heuristic: WindowHeuristic::new(3),
            })
        );
    }

    #[test]
    fn agent_config() {
        let agent: Agent = r#"{"Minimax":{"depth":2}}"#.parse().unwrap();
        assert_eq!(
            agent,
            Agent::Minimax(MinimaxAgent {
                depth: 2,
                heuristic: WindowHeuristic::default(),
            })
        );
        let agent: Agent = r#"{"Random":null}"#.parse().unwrap();
        assert_eq!(agent, Agent::Random(RandomAgent));

        let agent = Agent::default();
        assert_eq!(agent.to_string().parse::<Agent>().unwrap(), agent);

        assert!("{".parse::<Agent>().is_err());
    }

    #[test]
    fn agent_step() {
        let mut rng = SmallRng::seed_from_u64(0);
        let mut board = Board::new();
        for agent in [Agent::default(), Agent::Random(RandomAgent)] {
            let col = agent.step(&mut board, Player::X, &mut rng).unwrap();
            assert!(board.is_playable(col));
            assert_eq!(board, Board::new());
        }
    }
}
