//! The secret word of a running game.

use super::normalize::fold_word;
use std::collections::HashSet;

/// A lowercase secret word together with the set of its distinct letters.
///
/// The letter set is derived once at construction and backs the
/// "is this letter in the word" check used by every guess.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    letters: HashSet<char>,
}

impl SecretWord {
    /// Fold `word` to lowercase and index its letters.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hangman::core::SecretWord;
    ///
    /// let secret = SecretWord::new("Test");
    /// assert_eq!(secret.as_str(), "test");
    /// assert_eq!(secret.distinct_letters(), 3);
    /// assert!(secret.contains('e'));
    /// assert!(!secret.contains('z'));
    /// ```
    pub fn new(word: &str) -> Self {
        let text = fold_word(word);
        let letters = text.chars().collect();
        Self { text, letters }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Check whether `letter` occurs anywhere in the word.
    ///
    /// `letter` must already be folded.
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Iterate over the distinct letters, in no particular order.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().copied()
    }

    pub fn distinct_letters(&self) -> usize {
        self.letters.len()
    }

    /// Number of character positions in the word.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
