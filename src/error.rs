//! Errors raised where external text enters the board model.

/// Recoverable errors from position setup and coordinate parsing.
///
/// Rank numbers are reported the way they are written (1..=8).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("empty placement string")]
    EmptyPlacement,

    #[error("expected 8 ranks, found {0}")]
    RankCount(usize),

    #[error("rank {rank}: unrecognized piece character '{ch}'")]
    UnknownPiece { ch: char, rank: u8 },

    #[error("rank {rank}: empty-square run '{ch}' is not in 1..=8")]
    InvalidRun { ch: char, rank: u8 },

    #[error("rank {rank} describes more than 8 files")]
    RankOverflow { rank: u8 },

    #[error("rank {rank} describes only {files} files")]
    RankUnderfilled { rank: u8, files: u8 },

    #[error("invalid side to move '{0}'")]
    InvalidSide(String),

    #[error("invalid square '{0}'")]
    InvalidSquare(String),

    #[error("malformed coordinate move '{0}'")]
    MalformedMove(String),

    #[error("move '{0}' is not legal in this position")]
    IllegalMove(String),
}

pub type BoardResult<T> = Result<T, BoardError>;
