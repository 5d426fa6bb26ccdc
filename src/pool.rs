//! Candidate words for random selection.

use crate::core::fold_word;
use crate::session::GameError;
use rand::Rng;

/// Immutable, non-empty list of lowercase candidate words.
///
/// # Example
///
/// ```rust
/// use hangman::WordPool;
///
/// let pool = WordPool::new(["Apple", "banana"]).unwrap();
/// assert_eq!(pool.len(), 2);
/// assert_eq!(pool.as_slice(), &["apple".to_string(), "banana".to_string()]);
///
/// assert!(WordPool::new(Vec::<String>::new()).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordPool {
    words: Vec<String>,
}

impl WordPool {
    /// Build a pool from `words`, lowercasing each one.
    ///
    /// Fails with [`GameError::EmptyWordPool`] when `words` yields nothing.
    pub fn new<I, S>(words: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words.into_iter().map(|w| fold_word(w.as_ref())).collect();
        if words.is_empty() {
            return Err(GameError::EmptyWordPool);
        }
        Ok(Self { words })
    }

    /// Pick a word uniformly at random.
    pub fn choose<R: Rng>(&self, rng: &mut R) -> &str {
        let index = rng.random_range(0..self.words.len());
        &self.words[index]
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false` for a constructed pool.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }
}
