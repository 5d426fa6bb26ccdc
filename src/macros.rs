//! Macros for ergonomic engine construction.

/// Build a [`WordPool`](crate::WordPool) from a list of string expressions.
///
/// Expands to a `Result<WordPool, GameError>`; an empty list fails with
/// [`GameError::EmptyWordPool`](crate::GameError::EmptyWordPool).
///
/// # Example
///
/// ```
/// use hangman::{word_pool, GameSession};
///
/// let pool = word_pool!["Rust", "borrow", "lifetime"].unwrap();
/// assert_eq!(pool.len(), 3);
///
/// let mut game = GameSession::with_pool(pool);
/// game.start(None).unwrap();
///
/// assert!(word_pool![].is_err());
/// ```
#[macro_export]
macro_rules! word_pool {
    ($($word:expr),* $(,)?) => {{
        let words: ::std::vec::Vec<::std::string::String> =
            ::std::vec![$(::std::string::String::from($word)),*];
        $crate::WordPool::new(words)
    }};
}
