use super::Heuristic;
use crate::env::{CENTER_COL, WIN_LENGTH};
use crate::game::window::{all_windows, WindowCount};
use crate::game::{Board, Player};

/// Sums a score over every window of the board.
///
/// The scores favor own lines much more than they punish opponent lines.
/// Complete lines are handled by the terminal check of the search, so these
/// values only steer between non-terminal positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WindowHeuristic {
    /// Bonus per own mark in the center column.
    pub center_weight: i64,
}

impl WindowHeuristic {
    pub fn new(center_weight: i64) -> WindowHeuristic {
        WindowHeuristic { center_weight }
    }

    /// Scores the cell tally of a single window.
    pub fn score_window(count: WindowCount) -> i64 {
        let mut score = 0;

        if count.mine == WIN_LENGTH {
            score += 10000;
        } else if count.mine == WIN_LENGTH - 1 && count.empty == 1 {
            score += 1000;
        } else if count.mine == WIN_LENGTH - 2 && count.empty == 2 {
            score += 1;
        }

        if count.theirs == WIN_LENGTH {
            score -= 100;
        } else if count.theirs == WIN_LENGTH - 1 && count.empty == 1 {
            score -= 5;
        }

        score
    }

    pub fn score_position(&self, board: &Board, player: Player) -> i64 {
        let windows: i64 = all_windows()
            .map(|w| Self::score_window(w.count(board, player)))
            .sum();
        windows + self.center_weight * board.count_in_col(CENTER_COL, player) as i64
    }
}

impl Heuristic for WindowHeuristic {
    fn eval(&self, board: &Board, player: Player) -> i64 {
        self.score_position(board, player)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn count(mine: usize, theirs: usize, empty: usize) -> WindowCount {
        WindowCount {
            mine,
            theirs,
            empty,
        }
    }

    #[test]
    fn score_window_table() {
        assert_eq!(WindowHeuristic::score_window(count(0, 0, 4)), 0);
        assert_eq!(WindowHeuristic::score_window(count(4, 0, 0)), 10000);
        assert_eq!(WindowHeuristic::score_window(count(3, 0, 1)), 1000);
        assert_eq!(WindowHeuristic::score_window(count(2, 0, 2)), 1);
        assert_eq!(WindowHeuristic::score_window(count(0, 4, 0)), -100);
        assert_eq!(WindowHeuristic::score_window(count(0, 3, 1)), -5);
        // mixed windows are dead
        assert_eq!(WindowHeuristic::score_window(count(3, 1, 0)), 0);
        assert_eq!(WindowHeuristic::score_window(count(2, 1, 1)), 0);
        assert_eq!(WindowHeuristic::score_window(count(1, 2, 1)), 0);
        assert_eq!(WindowHeuristic::score_window(count(1, 0, 3)), 0);
    }

    #[test]
    fn score_empty_board() {
        let board = Board::new();
        for player in Player::iter() {
            assert_eq!(WindowHeuristic::default().score_position(&board, player), 0);
            assert_eq!(WindowHeuristic::new(3).score_position(&board, player), 0);
        }
    }

    #[test]
    fn score_open_three() {
        // o threatens the open end at column 3
        let board = Board::parse(
            r#"
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . . . . . .
            o o o . x . ."#,
        )
        .unwrap();
        let h = WindowHeuristic::default();

        // only "o o o ." counts, every other window is mixed or holds a single mark
        assert_eq!(h.score_position(&board, Player::X), -5);
        assert_eq!(h.score_position(&board, Player::O), 1000);

        // Once x takes the open end the threat is gone
        let mut board = board;
        board.drop(3, Player::X).unwrap();
        assert_eq!(h.score_position(&board, Player::X), 1);
        assert_eq!(h.score_position(&board, Player::O), 0);
    }

    #[test]
    fn score_center_bonus() {
        let board = Board::parse(
            r#"
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . . o . . .
            . . . x . . ."#,
        )
        .unwrap();
        let plain = WindowHeuristic::default();
        let hard = WindowHeuristic::new(3);
        assert_eq!(
            hard.score_position(&board, Player::X),
            plain.score_position(&board, Player::X) + 3
        );
        assert_eq!(
            hard.eval(&board, Player::O),
            plain.eval(&board, Player::O) + 3
        );
    }
}
