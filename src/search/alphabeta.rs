use std::time::Instant;

use log::debug;
use rand::seq::IteratorRandom;
use rand::Rng;

use super::{Heuristic, DRAW, LOSS, WIN};
use crate::env::COLS;
use crate::game::{Board, Move, Player};
use crate::{Error, Result};

/// The chosen column and its minimax value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub column: usize,
    pub value: i64,
}

/// Alpha-Beta tree search.
///
/// @see https://en.wikipedia.org/wiki/Alpha%E2%80%93beta_pruning
/// - `player` is the maximizing player and moves first
/// - Moves are applied to `board` in place and reverted before returning
/// - A depth of zero is searched as depth one
/// - Each node first searches a column drawn from `rng`, then the remaining
///   columns in ascending order. Equally valued later columns never replace
///   an earlier one, so ties are broken at random.
pub fn alphabeta<R: Rng + ?Sized>(
    board: &mut Board,
    player: Player,
    depth: usize,
    heuristic: &dyn Heuristic,
    rng: &mut R,
) -> Result<SearchOutcome> {
    if board.is_full() {
        return Err(Error::NoLegalMoves);
    }

    let start = Instant::now();
    let mut search = Search {
        maximizer: player,
        heuristic,
        rng,
        nodes: 0,
    };
    let (column, value) = search.rec(board, None, depth.max(1), i64::MIN, i64::MAX);

    debug!(
        ">>> alphabeta {} {:?}ms {} nodes {:?} {}",
        depth,
        start.elapsed().as_millis(),
        search.nodes,
        column,
        value
    );

    column
        .map(|column| SearchOutcome { column, value })
        .ok_or(Error::NoLegalMoves)
}

struct Search<'a, R: ?Sized> {
    maximizer: Player,
    heuristic: &'a dyn Heuristic,
    rng: &'a mut R,
    nodes: usize,
}

impl<R: Rng + ?Sized> Search<'_, R> {
    fn rec(
        &mut self,
        board: &mut Board,
        last: Option<Move>,
        depth: usize,
        mut alpha: i64,
        mut beta: i64,
    ) -> (Option<usize>, i64) {
        self.nodes += 1;

        if let Some(last) = last {
            if board.has_win(last.pos, last.player) {
                return if last.player == self.maximizer {
                    (None, WIN)
                } else {
                    (None, LOSS)
                };
            }
        }
        if board.is_full() {
            return (None, DRAW);
        }
        if depth == 0 {
            let minimizer = self.maximizer.opponent();
            return (
                None,
                self.heuristic.eval(board, self.maximizer) - self.heuristic.eval(board, minimizer),
            );
        }

        let to_move = last.map_or(self.maximizer, |m| m.player.opponent());
        let maximizing = to_move == self.maximizer;

        let seed = board.legal_columns().choose(&mut *self.rng);
        let order = seed
            .into_iter()
            .chain((0..COLS).filter(move |&col| Some(col) != seed));
        let mut value = (seed, if maximizing { i64::MIN } else { i64::MAX });

        for col in order {
            let Ok(mut placed) = board.play(col, to_move) else {
                continue;
            };
            let last = Move {
                pos: placed.pos(),
                player: to_move,
            };
            let newval = self.rec(&mut placed, Some(last), depth - 1, alpha, beta).1;
            // the guard clears the mark here
            drop(placed);

            if maximizing {
                if newval > value.1 {
                    value = (Some(col), newval);
                }
                alpha = alpha.max(newval);
            } else {
                if newval < value.1 {
                    value = (Some(col), newval);
                }
                beta = beta.min(newval);
            }
            if alpha >= beta {
                break;
            }
        }
        value
    }
}
