//! Builder API for configuring a game engine.
//!
//! [`GameBuilder`] collects the candidate words and, optionally, a seed for
//! the random word selection. Seeding makes the sequence of random words
//! reproducible, which is useful in tests and replays.

use crate::pool::WordPool;
use crate::session::{GameError, GameSession};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Fluent builder for [`GameSession`].
///
/// # Example
///
/// ```
/// use hangman::GameBuilder;
///
/// let mut game = GameBuilder::new()
///     .words(["alpha", "beta"])
///     .word("gamma")
///     .seed(42)
///     .build()
///     .unwrap();
///
/// game.start(None).unwrap();
/// assert!(["alpha", "beta", "gamma"].contains(&game.word().unwrap()));
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    words: Vec<String>,
    seed: Option<u64>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one candidate word.
    pub fn word(mut self, word: impl AsRef<str>) -> Self {
        self.words.push(word.as_ref().to_owned());
        self
    }

    /// Add several candidate words, keeping their order.
    pub fn words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words
            .extend(words.into_iter().map(|w| w.as_ref().to_owned()));
        self
    }

    /// Add candidate words from a list that may be absent.
    ///
    /// `None` adds nothing, so building with no other words fails.
    pub fn words_opt<I, S>(self, words: Option<I>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match words {
            Some(words) => self.words(words),
            None => self,
        }
    }

    /// Seed the random word selection.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the engine.
    /// Returns [`GameError::EmptyWordPool`] if no words were added.
    pub fn build(self) -> Result<GameSession, GameError> {
        let pool = WordPool::new(self.words)?;
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(GameSession::from_parts(pool, rng))
    }
}
