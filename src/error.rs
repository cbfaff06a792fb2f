//! Typed error taxonomy for the core (C8).
//!
//! The core never panics on malformed external input; `apply`'s precondition
//! (a legal move) is a programmer error and uses `debug_assert!` instead (see
//! [`crate::board::Board::apply`]).

use thiserror::Error;

/// Errors the core can report. The CLI wraps these in `anyhow` at the edge.
#[derive(Debug, Error)]
pub enum HorizonError {
    #[error("board string has length {len}, expected 64")]
    InvalidBoardLength { len: usize },

    #[error("board string contains illegal character '{ch}' at position {pos}")]
    InvalidBoardChar { ch: char, pos: usize },

    #[error("could not parse '{0}' as a signed integer score")]
    InvalidScore(String),

    #[error("knowledge CSV record is missing column {0}")]
    MissingColumn(usize),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
