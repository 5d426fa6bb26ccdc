//! Game error types.

use thiserror::Error;

/// Errors returned by game operations.
///
/// Every error is a usage error: the engine state is left exactly as it was
/// before the failing call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    /// The word list was empty or absent
    #[error("Word pool must contain at least one word")]
    EmptyWordPool,

    /// The letter is already in the guess history
    #[error("Character '{0}' is already guessed")]
    AlreadyGuessed(char),

    #[error("Game is already running. Stop it first with GameSession::stop()")]
    AlreadyRunning,

    #[error("Game is not running. Start it first with GameSession::start()")]
    NotRunning,

    /// A secret word was assigned after guessing had begun
    #[error("Cannot set the word while guesses are recorded")]
    WordLocked,
}

/// The two broad kinds of [`GameError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input to a constructor or operation
    InvalidArgument,
    /// Operation not allowed in the current lifecycle phase
    InvalidState,
}

impl GameError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyWordPool | Self::AlreadyGuessed(_) => ErrorKind::InvalidArgument,
            Self::AlreadyRunning | Self::NotRunning | Self::WordLocked => ErrorKind::InvalidState,
        }
    }
}
