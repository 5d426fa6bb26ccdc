//! Lifecycle phase of a game engine.
//!
//! An engine is either waiting for a game to start or running one. There is
//! no terminal won/lost phase: winning and losing are decided by the caller
//! from the solved flag and the strike count.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two lifecycle phases of a [`GameSession`](crate::GameSession).
///
/// # Example
///
/// ```rust
/// use hangman::core::GamePhase;
///
/// let phase = GamePhase::default();
/// assert_eq!(phase, GamePhase::NotRunning);
/// assert!(!phase.is_running());
/// assert_eq!(phase.name(), "NotRunning");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// No game is in progress. Initial phase.
    #[default]
    NotRunning,
    /// A game is in progress.
    Running,
}

impl GamePhase {
    /// Get the phase's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NotRunning => "NotRunning",
            Self::Running => "Running",
        }
    }

    /// Check whether a game is in progress.
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
