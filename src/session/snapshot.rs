//! Read-only view of a running game for presentation layers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Serializable view of a running game.
///
/// The secret word itself is left out so a snapshot can be shown to the
/// player as-is. Snapshots are views only; there is no way to resume a game
/// from one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Identifier of the session, as used in log events
    pub id: Uuid,

    /// When the session was started
    pub started_at: DateTime<Utc>,

    /// Progress string using the default separator
    pub progress: String,

    /// Guessed letters in guess order
    pub guessed: Vec<char>,

    /// Number of incorrect guesses
    pub strikes: usize,

    /// Whether every letter of the word has been guessed
    pub solved: bool,

    /// Number of characters in the secret word
    pub word_length: usize,
}
