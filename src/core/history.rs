//! Guess history tracking.
//!
//! Keeps every letter guessed during a game in the order it was guessed,
//! alongside a set for constant-time "already guessed?" checks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;

/// Record of a single guess.
///
/// # Example
///
/// ```rust
/// use hangman::core::GuessRecord;
/// use chrono::Utc;
///
/// let record = GuessRecord {
///     letter: 't',
///     hit: true,
///     timestamp: Utc::now(),
/// };
/// assert!(record.hit);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    /// The guessed letter, already case-folded
    pub letter: char,
    /// Whether the letter occurs in the secret word
    pub hit: bool,
    /// When the guess was made
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of the guesses made in one game.
///
/// A letter can be recorded at most once. Callers check
/// [`contains`](Self::contains) before recording; `record` itself returns
/// `false` and leaves the history untouched for a repeated letter.
///
/// # Example
///
/// ```rust
/// use hangman::core::GuessHistory;
///
/// let mut history = GuessHistory::new();
/// assert!(history.record('t', true));
/// assert!(history.record('z', false));
/// assert!(!history.record('t', true));
///
/// assert_eq!(history.letters(), vec!['t', 'z']);
/// assert_eq!(history.misses(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GuessHistory {
    guesses: Vec<GuessRecord>,
    seen: HashSet<char>,
}

impl GuessHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a guess made now.
    ///
    /// Returns `false` without recording anything if `letter` is already in
    /// the history.
    pub fn record(&mut self, letter: char, hit: bool) -> bool {
        if !self.seen.insert(letter) {
            return false;
        }
        self.guesses.push(GuessRecord {
            letter,
            hit,
            timestamp: Utc::now(),
        });
        true
    }

    pub fn contains(&self, letter: char) -> bool {
        self.seen.contains(&letter)
    }

    /// Get the guessed letters in guess order.
    ///
    /// Returns an owned copy; changing it has no effect on the history.
    pub fn letters(&self) -> Vec<char> {
        self.guesses.iter().map(|g| g.letter).collect()
    }

    /// Get all guesses in order.
    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }

    /// Count the guesses that missed the secret word.
    pub fn misses(&self) -> usize {
        self.guesses.iter().filter(|g| !g.hit).count()
    }

    pub fn len(&self) -> usize {
        self.guesses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guesses.is_empty()
    }

    /// Time between the first and the last guess.
    ///
    /// Returns `None` when nothing has been guessed yet.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.guesses.first(), self.guesses.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }
}
