use std::fmt::{self, Debug};

use owo_colors::OwoColorize;

use super::{Board, Player};
use crate::env::Pos;
use crate::{Error, Result};

/// The outcome of a game.
/// If the game did not end the outcome is `None`.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Outcome {
    None,
    Draw,
    Winner(Player),
}

/// A mark that has been placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub pos: Pos,
    pub player: Player,
}

/// Game holds the board and whose turn it is.
/// This also provides methods to execute moves and evaluate their outcome.
#[derive(Clone)]
pub struct Game {
    pub board: Board,
    first: Player,
    to_move: Player,
    last: Option<Move>,
    outcome: Outcome,
}

impl Game {
    pub fn new(first: Player) -> Game {
        Game {
            board: Board::new(),
            first,
            to_move: first,
            last: None,
            outcome: Outcome::None,
        }
    }

    /// Clears the board for a new game.
    pub fn reset(&mut self, first: Player) {
        self.board.reset();
        self.first = first;
        self.to_move = first;
        self.last = None;
        self.outcome = Outcome::None;
    }

    /// Starts the next game.
    /// After a finished game the other player starts, an unfinished game
    /// is restarted by the same player.
    pub fn rematch(&mut self) {
        let first = match self.outcome {
            Outcome::None => self.first,
            _ => self.first.opponent(),
        };
        self.reset(first);
    }

    /// The player who made the first move of this game.
    pub fn first(&self) -> Player {
        self.first
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Drops a mark of the player to move into `col` and passes the turn.
    pub fn play(&mut self, col: usize) -> Result<Outcome> {
        if self.outcome != Outcome::None {
            return Err(Error::GameOver);
        }

        let player = self.to_move;
        let pos = self.board.drop(col, player)?;
        self.last = Some(Move { pos, player });

        self.outcome = if self.board.has_win(pos, player) {
            Outcome::Winner(player)
        } else if self.board.is_full() {
            Outcome::Draw
        } else {
            Outcome::None
        };
        self.to_move = player.opponent();
        Ok(self.outcome)
    }
}

impl Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Game {{")?;
        for line in self.board.to_string().lines() {
            writeln!(f, "  {}", line)?;
        }
        match self.outcome {
            Outcome::None => writeln!(f, "  To move: {}", self.to_move)?,
            Outcome::Draw => writeln!(f, "  {}", "Draw".bright_blue())?,
            Outcome::Winner(p) => writeln!(f, "  Winner: {}", p.bright_green())?,
        }
        write!(f, "}}")
    }
}

/// Results over a series of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub x: usize,
    pub o: usize,
    pub draws: usize,
}

impl Scoreboard {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(Player::X) => self.x += 1,
            Outcome::Winner(Player::O) => self.o += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::None => {}
        }
    }

    pub fn wins(&self, player: Player) -> usize {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    pub fn games(&self) -> usize {
        self.x + self.o + self.draws
    }
}
