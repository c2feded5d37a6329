use super::{Board, Cell, Player};
use crate::env::{Orientation, Pos, COLS, ROWS, WIN_LENGTH};

/// A line of `WIN_LENGTH` consecutive cells that lies fully inside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window {
    start: Pos,
    orientation: Orientation,
}

impl Window {
    pub fn new(start: Pos, orientation: Orientation) -> Option<Window> {
        start.step(orientation, WIN_LENGTH as isize - 1)?;
        Some(Window { start, orientation })
    }

    pub fn orientation(self) -> Orientation {
        self.orientation
    }

    pub fn cells(self) -> impl Iterator<Item = Pos> {
        let (dr, dc) = self.orientation.delta();
        let row = self.start.row() as isize;
        let col = self.start.col() as isize;
        (0..WIN_LENGTH as isize)
            .map(move |i| Pos::at((row + dr * i) as usize, (col + dc * i) as usize))
    }

    /// Counts the marks of `player`, of the opponent and the empty cells.
    pub fn count(self, board: &Board, player: Player) -> WindowCount {
        let mine = Cell::from(player);
        let mut count = WindowCount::default();
        for p in self.cells() {
            match board[p] {
                Cell::Empty => count.empty += 1,
                c if c == mine => count.mine += 1,
                _ => count.theirs += 1,
            }
        }
        count
    }

    /// Returns if every cell holds the mark of `player`.
    pub fn is_complete(self, board: &Board, player: Player) -> bool {
        let mine = Cell::from(player);
        self.cells().all(|p| board[p] == mine)
    }
}

/// Cell tally of a window from one player's point of view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowCount {
    pub mine: usize,
    pub theirs: usize,
    pub empty: usize,
}

/// All windows of one orientation.
pub fn windows(orientation: Orientation) -> impl Iterator<Item = Window> {
    (0..ROWS)
        .flat_map(|row| (0..COLS).map(move |col| Pos::at(row, col)))
        .filter_map(move |p| Window::new(p, orientation))
}

/// Every window of the board.
pub fn all_windows() -> impl Iterator<Item = Window> {
    Orientation::iter().flat_map(windows)
}

/// Horizontal windows inside a single row.
pub fn row_windows(row: usize) -> impl Iterator<Item = Window> {
    (0..COLS).filter_map(move |col| Window::new(Pos::new(row, col)?, Orientation::Horizontal))
}

/// Vertical windows inside a single column.
pub fn col_windows(col: usize) -> impl Iterator<Item = Window> {
    (0..ROWS).filter_map(move |row| Window::new(Pos::new(row, col)?, Orientation::Vertical))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn window_counts() {
        assert_eq!(windows(Orientation::Horizontal).count(), 24);
        assert_eq!(windows(Orientation::Vertical).count(), 21);
        assert_eq!(windows(Orientation::DiagonalDown).count(), 12);
        assert_eq!(windows(Orientation::DiagonalUp).count(), 12);
        assert_eq!(all_windows().count(), 69);
        assert_eq!(row_windows(2).count(), 4);
        assert_eq!(col_windows(6).count(), 3);
    }

    #[test]
    fn window_cells() {
        let w = Window::new(Pos::new(5, 0).unwrap(), Orientation::DiagonalUp).unwrap();
        let cells: Vec<_> = w.cells().map(|p| (p.row(), p.col())).collect();
        assert_eq!(cells, vec![(5, 0), (4, 1), (3, 2), (2, 3)]);

        assert!(Window::new(Pos::new(2, 0).unwrap(), Orientation::DiagonalUp).is_none());
        assert!(Window::new(Pos::new(0, 4).unwrap(), Orientation::Horizontal).is_none());
    }

    #[test]
    fn window_count() {
        let board = Board::parse(
            r#"
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . . . . . .
            x x o . . . ."#,
        )
        .unwrap();
        let w = Window::new(Pos::new(5, 0).unwrap(), Orientation::Horizontal).unwrap();
        assert_eq!(
            w.count(&board, Player::X),
            WindowCount {
                mine: 2,
                theirs: 1,
                empty: 1
            }
        );
        assert!(!w.is_complete(&board, Player::X));
    }
}
