/// Errors reported by the board, the game and the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Column out of range or already full.
    #[error("invalid move: column {column} is out of range or full")]
    InvalidMove { column: usize },

    #[error("no legal moves: the board is full")]
    NoLegalMoves,

    #[error("the game is already over")]
    GameOver,
}

pub type Result<T> = std::result::Result<T, Error>;
