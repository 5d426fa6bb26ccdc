//! State of one in-progress game.

use super::error::GameError;
use super::snapshot::SessionSnapshot;
use crate::core::{GuessHistory, GuessRecord, SecretWord};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Placeholder rendered for letters not yet guessed.
pub const PLACEHOLDER: char = '_';

/// Mutable state of a single game, created by `start` and dropped by `stop`.
///
/// All letters passed in are expected to be case-folded already.
#[derive(Clone, Debug)]
pub(crate) struct Session {
    id: Uuid,
    started_at: DateTime<Utc>,
    secret: SecretWord,
    history: GuessHistory,
    strikes: usize,
}

impl Session {
    /// Create a session with no word and no guesses.
    pub(crate) fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            secret: SecretWord::new(""),
            history: GuessHistory::new(),
            strikes: 0,
        }
    }

    /// Assign the secret word. Only allowed before the first guess.
    pub(crate) fn set_word(&mut self, word: &str) -> Result<(), GameError> {
        if !self.history.is_empty() {
            return Err(GameError::WordLocked);
        }
        self.secret = SecretWord::new(word);
        Ok(())
    }

    pub(crate) fn id(&self) -> Uuid {
        self.id
    }

    pub(crate) fn secret(&self) -> &SecretWord {
        &self.secret
    }

    pub(crate) fn strikes(&self) -> usize {
        self.strikes
    }

    pub(crate) fn guesses(&self) -> &[GuessRecord] {
        self.history.guesses()
    }

    pub(crate) fn guess_span(&self) -> Option<std::time::Duration> {
        self.history.duration()
    }

    pub(crate) fn guessed_letters(&self) -> Vec<char> {
        self.history.letters()
    }

    pub(crate) fn is_guessed(&self, letter: char) -> bool {
        self.history.contains(letter)
    }

    /// Record a guess. Returns whether the letter is in the word.
    pub(crate) fn guess(&mut self, letter: char) -> Result<bool, GameError> {
        if self.history.contains(letter) {
            return Err(GameError::AlreadyGuessed(letter));
        }
        let hit = self.secret.contains(letter);
        self.history.record(letter, hit);
        if !hit {
            self.strikes += 1;
        }
        debug_assert_eq!(self.strikes, self.history.misses());
        Ok(hit)
    }

    pub(crate) fn is_solved(&self) -> bool {
        self.secret.letters().all(|c| self.history.contains(c))
    }

    /// Render each position as its letter or [`PLACEHOLDER`], each one
    /// followed by `separator`, the last one included.
    pub(crate) fn progress(&self, separator: &str) -> String {
        let slot_width = 1 + separator.chars().count();
        let mut out = String::with_capacity(self.secret.len() * slot_width);
        for c in self.secret.as_str().chars() {
            if self.history.contains(c) {
                out.push(c);
            } else {
                out.push(PLACEHOLDER);
            }
            out.push_str(separator);
        }
        out
    }

    pub(crate) fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            id: self.id,
            started_at: self.started_at,
            progress: self.progress(super::DEFAULT_SEPARATOR),
            guessed: self.history.letters(),
            strikes: self.strikes,
            solved: self.is_solved(),
            word_length: self.secret.len(),
        }
    }
}
