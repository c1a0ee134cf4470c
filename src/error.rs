//! Error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::game::Round;

/// Errors that can occur when playing a turn by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// The game is already over.
    #[error("the game is already over")]
    Finished,
    /// The guess belongs to another round.
    #[error("expected a guess for {expected:?}, got one for {found:?}")]
    WrongRound {
        /// The current round.
        expected: Round,
        /// The round the guess was made for.
        found: Round,
    },
}

/// Errors that can occur while saving results.
#[derive(Debug, Error)]
pub enum OutputError {
    /// The results file could not be created.
    #[error("cannot create {}: {source}", path.display())]
    Create {
        /// Path of the results file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// Writing to the results file failed.
    #[error("cannot write {}: {source}", path.display())]
    Write {
        /// Path of the results file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}
