//! Case folding for every character and word entering the engine.
//!
//! Guesses, candidate words and explicitly supplied secret words all pass
//! through these two functions, so membership checks always compare the
//! same form.

/// Fold a single character to lowercase.
///
/// Some characters lowercase to more than one character (`'İ'` becomes
/// `"i̇"`). Only the first character of the expansion is kept, so a guess is
/// always exactly one character.
///
/// # Example
///
/// ```rust
/// use hangman::core::fold_char;
///
/// assert_eq!(fold_char('T'), 't');
/// assert_eq!(fold_char('t'), 't');
/// assert_eq!(fold_char('-'), '-');
/// ```
pub fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Fold a whole word to lowercase, one character at a time.
///
/// Each character is folded with [`fold_char`], never with context-aware
/// string lowercasing, so every letter of a folded word is one a single
/// guess can produce (`"ΟΔΟΣ"` becomes `"οδοσ"`, not `"οδος"`).
///
/// ```rust
/// use hangman::core::{fold_char, fold_word};
///
/// let word = fold_word("ΟΔΟΣ");
/// assert_eq!(word, "οδοσ");
/// assert!(word.contains(fold_char('Σ')));
/// ```
pub fn fold_word(word: &str) -> String {
    word.chars().map(fold_char).collect()
}
