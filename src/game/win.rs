use super::window::{all_windows, col_windows, row_windows, windows};
use super::{Board, Player};
use crate::env::{Orientation, Pos};

impl Board {
    /// Returns if `player` has four in a row after placing a mark at `last`.
    ///
    /// Horizontal and vertical lines are only searched in the row and column
    /// of `last`. Diagonals are searched on the whole board.
    /// This is exact as long as the game is stopped at the first win.
    pub fn has_win(&self, last: Pos, player: Player) -> bool {
        row_windows(last.row())
            .chain(col_windows(last.col()))
            .chain(windows(Orientation::DiagonalDown))
            .chain(windows(Orientation::DiagonalUp))
            .any(|w| w.is_complete(self, player))
    }

    /// Exhaustive search for a complete line of `player`.
    pub fn has_line(&self, player: Player) -> bool {
        all_windows().any(|w| w.is_complete(self, player))
    }
}
