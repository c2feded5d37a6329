use std::fmt::{self, Debug};

/// Number of rows of the board.
pub const ROWS: usize = 6;
/// Number of columns of the board.
pub const COLS: usize = 7;
/// Number of consecutive marks needed to win.
pub const WIN_LENGTH: usize = 4;
/// Index of the single center column.
pub const CENTER_COL: usize = COLS / 2;

/// A cell coordinate that is always inside the board.
///
/// Row 0 is the top row and `ROWS - 1` the bottom row, pieces fall towards
/// higher row indices.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    row: u8,
    col: u8,
}

impl Pos {
    pub fn new(row: usize, col: usize) -> Option<Pos> {
        if row < ROWS && col < COLS {
            Some(Pos::at(row, col))
        } else {
            None
        }
    }

    /// Caller guarantees that the coordinates are in range.
    pub(crate) const fn at(row: usize, col: usize) -> Pos {
        debug_assert!(row < ROWS && col < COLS);
        Pos {
            row: row as u8,
            col: col as u8,
        }
    }

    pub fn row(self) -> usize {
        self.row as usize
    }

    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Moves `steps` cells along the orientation, `None` if this leaves the board.
    pub fn step(self, o: Orientation, steps: isize) -> Option<Pos> {
        let (dr, dc) = o.delta();
        let row = self.row as isize + dr * steps;
        let col = self.col as isize + dc * steps;
        if row < 0 || col < 0 {
            return None;
        }
        Pos::new(row as usize, col as usize)
    }
}

impl Debug for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four line directions a window can run along.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[repr(u8)]
pub enum Orientation {
    /// Left to right along a row
    Horizontal,
    /// Top to bottom along a column
    Vertical,
    /// Top left to bottom right
    DiagonalDown,
    /// Bottom left to top right
    DiagonalUp,
}

impl Orientation {
    pub fn iter() -> impl Iterator<Item = Orientation> {
        [
            Orientation::Horizontal,
            Orientation::Vertical,
            Orientation::DiagonalDown,
            Orientation::DiagonalUp,
        ]
        .iter()
        .copied()
    }

    /// Row and column offset of one step.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
            Orientation::DiagonalDown => (1, 1),
            Orientation::DiagonalUp => (-1, 1),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn pos_bounds() {
        assert!(Pos::new(0, 0).is_some());
        assert!(Pos::new(ROWS - 1, COLS - 1).is_some());
        assert!(Pos::new(ROWS, 0).is_none());
        assert!(Pos::new(0, COLS).is_none());
    }

    #[test]
    fn pos_step() {
        let p = Pos::new(5, 0).unwrap();
        assert_eq!(p.step(Orientation::DiagonalUp, 3), Pos::new(2, 3));
        assert_eq!(p.step(Orientation::Vertical, 1), None);
        assert_eq!(p.step(Orientation::Horizontal, -1), None);
        assert_eq!(p.step(Orientation::Horizontal, 6), Pos::new(5, 6));
    }
}
