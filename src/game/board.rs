use std::fmt;
use std::ops::{Deref, DerefMut, Index};

use super::{Cell, Player};
use crate::env::{Pos, COLS, ROWS};
use crate::{Error, Result};

/// The drop-column grid.
///
/// Pieces are only ever added by [`Board::drop`], which keeps every column
/// filled contiguously from the bottom row upwards.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    pub fn new() -> Board {
        Board::default()
    }

    /// Empties all cells for a new game.
    pub fn reset(&mut self) {
        for row in &mut self.cells {
            row.fill(Cell::Empty);
        }
    }

    /// A column is playable if it exists and its top cell is empty.
    pub fn is_playable(&self, col: usize) -> bool {
        col < COLS && self.cells[0][col].is_empty()
    }

    /// Drops a mark into `col` and returns where it landed.
    pub fn drop(&mut self, col: usize, player: Player) -> Result<Pos> {
        if !self.is_playable(col) {
            return Err(Error::InvalidMove { column: col });
        }
        let row = (0..ROWS)
            .rev()
            .find(|&row| self.cells[row][col].is_empty())
            .ok_or(Error::InvalidMove { column: col })?;
        self.cells[row][col] = player.into();
        Ok(Pos::at(row, col))
    }

    /// Reverts a [`Board::drop`].
    ///
    /// `pos` has to be the exact position returned by the matching drop and
    /// no other mark may have been placed on top of it since.
    pub fn clear(&mut self, pos: Pos) {
        debug_assert!(
            pos.row() == 0 || self.cells[pos.row() - 1][pos.col()].is_empty(),
            "clear below the top of column {}",
            pos.col()
        );
        self.cells[pos.row()][pos.col()] = Cell::Empty;
    }

    /// Drops a mark and returns a guard that clears it again when dropped.
    pub fn play(&mut self, col: usize, player: Player) -> Result<Placed<'_>> {
        let pos = self.drop(col, player)?;
        Ok(Placed { board: self, pos })
    }

    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| !self.is_playable(col))
    }

    /// All playable columns in ascending order.
    pub fn legal_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..COLS).filter(move |&col| self.is_playable(col))
    }

    /// Number of marks of `player` in the given column, zero outside the board.
    pub fn count_in_col(&self, col: usize, player: Player) -> usize {
        let cell = Cell::from(player);
        self.cells
            .iter()
            .filter(|row| row.get(col) == Some(&cell))
            .count()
    }

    /// Number of marks on the board.
    pub fn marks(&self) -> usize {
        self.cells.iter().flatten().filter(|c| !c.is_empty()).count()
    }

    /// Parses textual human readable board representation used in tests.
    ///
    /// Expects `ROWS` lines of `COLS` cells (`.`, `x`, `o`), top row first.
    /// Returns `None` for malformed text or floating marks.
    pub fn parse(txt: &str) -> Option<Board> {
        let lines: Vec<&str> = txt
            .trim()
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        if lines.len() != ROWS {
            return None;
        }

        let mut board = Board::new();
        for (row, line) in lines.iter().enumerate() {
            let cells: Vec<Cell> = line
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(Cell::from_char)
                .collect::<Option<_>>()?;
            if cells.len() != COLS {
                return None;
            }
            board.cells[row].copy_from_slice(&cells);
        }

        // gravity
        for row in 1..ROWS {
            for col in 0..COLS {
                if !board.cells[row - 1][col].is_empty() && board.cells[row][col].is_empty() {
                    return None;
                }
            }
        }
        Some(board)
    }
}

impl Index<Pos> for Board {
    type Output = Cell;

    fn index(&self, p: Pos) -> &Self::Output {
        &self.cells[p.row()][p.col()]
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for row in &self.cells {
            write!(f, "  ")?;
            for cell in row {
                write!(f, "{:?} ", cell)?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                write!(f, "{:?} ", cell)?;
            }
            writeln!(f)?;
        }
        for col in 0..COLS {
            write!(f, "{} ", col)?;
        }
        writeln!(f)
    }
}

/// A mark placed by [`Board::play`], removed again when this guard goes out of scope.
pub struct Placed<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl Placed<'_> {
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl Deref for Placed<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placed<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placed<'_> {
    fn drop(&mut self) {
        self.board.clear(self.pos);
    }
}
