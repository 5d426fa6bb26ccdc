//! The game engine and its running/stopped gate.
//!
//! [`GameSession`] owns the word pool and, while a game is running, one
//! session's state. Session state is held in a sum type, so nothing from a
//! previous game can be read after `stop` or before the first `start`.
//!
//! The engine is not internally synchronized. Mutating operations take
//! `&mut self`; callers embedding it in a multi-threaded host must serialize
//! access themselves (e.g. behind a `Mutex`).

mod error;
mod round;
mod snapshot;

pub use error::{ErrorKind, GameError};
pub use round::PLACEHOLDER;
pub use snapshot::SessionSnapshot;

use crate::builder::GameBuilder;
use crate::core::{fold_char, GamePhase, GuessRecord};
use crate::pool::WordPool;
use rand::rngs::StdRng;
use rand::SeedableRng;
use round::Session;
use std::fmt;
use std::time::Duration;
use tracing::{debug, trace};

/// Separator used by [`GameSession::progress`].
pub const DEFAULT_SEPARATOR: &str = " ";

enum SessionState {
    NotRunning,
    Running(Session),
}

/// A Hangman engine running at most one game at a time.
///
/// Every query except [`is_running`](Self::is_running),
/// [`phase`](Self::phase) and [`words`](Self::words) requires a running game
/// and fails with [`GameError::NotRunning`] otherwise.
///
/// The engine never ends a game by itself. Deciding that too many strikes
/// mean a loss is left to the caller.
///
/// # Example
///
/// ```rust
/// use hangman::GameSession;
///
/// let mut game = GameSession::new(["rust", "cargo"]).unwrap();
/// game.start(Some("test")).unwrap();
///
/// assert!(game.guess('t').unwrap());
/// assert!(!game.guess('z').unwrap());
/// assert!(game.guess('S').unwrap());
///
/// assert_eq!(game.strikes().unwrap(), 1);
/// assert_eq!(game.progress().unwrap(), "t _ s t ");
/// assert!(!game.is_solved().unwrap());
///
/// game.stop().unwrap();
/// assert!(game.word().is_err());
/// ```
pub struct GameSession {
    pool: WordPool,
    rng: StdRng,
    state: SessionState,
}

impl GameSession {
    /// Create an engine over `words`, lowercasing each one.
    ///
    /// Fails with [`GameError::EmptyWordPool`] if `words` is empty. Use
    /// [`GameBuilder`] to seed the random word selection.
    pub fn new<I, S>(words: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        GameBuilder::new().words(words).build()
    }

    /// Create an engine over an existing pool.
    pub fn with_pool(pool: WordPool) -> Self {
        Self::from_parts(pool, StdRng::from_os_rng())
    }

    pub(crate) fn from_parts(pool: WordPool, rng: StdRng) -> Self {
        Self {
            pool,
            rng,
            state: SessionState::NotRunning,
        }
    }

    /// Start a game.
    ///
    /// Uses `word` (lowercased) as the secret word, or a random word from the
    /// pool when `word` is `None`. Fails with [`GameError::AlreadyRunning`]
    /// if a game is in progress.
    pub fn start(&mut self, word: Option<&str>) -> Result<(), GameError> {
        if self.is_running() {
            debug!("start rejected: game already running");
            return Err(GameError::AlreadyRunning);
        }

        let word = match word {
            Some(word) => word.to_owned(),
            None => {
                let word = self.pool.choose(&mut self.rng).to_owned();
                trace!(pool_size = self.pool.len(), "picked random word");
                word
            }
        };

        let mut session = Session::new();
        session.set_word(&word)?;
        debug!(
            session_id = %session.id(),
            word_length = session.secret().len(),
            "game started"
        );
        self.state = SessionState::Running(session);
        Ok(())
    }

    /// Stop the current game and discard its state.
    ///
    /// Fails with [`GameError::NotRunning`] if no game is in progress.
    pub fn stop(&mut self) -> Result<(), GameError> {
        match std::mem::replace(&mut self.state, SessionState::NotRunning) {
            SessionState::Running(session) => {
                debug!(
                    session_id = %session.id(),
                    strikes = session.strikes(),
                    guesses = session.guesses().len(),
                    solved = session.is_solved(),
                    "game stopped"
                );
                Ok(())
            }
            SessionState::NotRunning => {
                debug!("stop rejected: game not running");
                Err(GameError::NotRunning)
            }
        }
    }

    /// Guess a letter. Case-insensitive.
    ///
    /// Returns `true` if the letter is in the word. An incorrect guess adds
    /// a strike. Fails with [`GameError::AlreadyGuessed`] if the letter was
    /// guessed before, leaving strikes and history unchanged.
    pub fn guess(&mut self, c: char) -> Result<bool, GameError> {
        let letter = fold_char(c);
        let session = self.running_mut()?;
        let id = session.id();

        match session.guess(letter) {
            Ok(hit) => {
                debug!(
                    session_id = %id,
                    letter = %letter,
                    hit,
                    strikes = session.strikes(),
                    "guess recorded"
                );
                Ok(hit)
            }
            Err(err) => {
                debug!(session_id = %id, letter = %letter, "guess rejected: {err}");
                Err(err)
            }
        }
    }

    /// Number of incorrect guesses so far.
    pub fn strikes(&self) -> Result<usize, GameError> {
        Ok(self.running()?.strikes())
    }

    /// Whether every distinct letter of the word has been guessed.
    pub fn is_solved(&self) -> Result<bool, GameError> {
        Ok(self.running()?.is_solved())
    }

    /// Whether `c` has been guessed. Case-insensitive.
    pub fn is_guessed(&self, c: char) -> Result<bool, GameError> {
        Ok(self.running()?.is_guessed(fold_char(c)))
    }

    /// The secret word of the current game.
    pub fn word(&self) -> Result<&str, GameError> {
        Ok(self.running()?.secret().as_str())
    }

    /// The guessed letters in guess order.
    ///
    /// Returns an owned copy; changing it does not affect the game.
    pub fn guessed_characters(&self) -> Result<Vec<char>, GameError> {
        Ok(self.running()?.guessed_letters())
    }

    /// Every guess with its outcome and timestamp.
    pub fn guesses(&self) -> Result<&[GuessRecord], GameError> {
        Ok(self.running()?.guesses())
    }

    /// Time between the first and the latest guess of the current game.
    ///
    /// `Ok(None)` until the first guess is made.
    pub fn elapsed(&self) -> Result<Option<Duration>, GameError> {
        Ok(self.running()?.guess_span())
    }

    /// Progress string using [`DEFAULT_SEPARATOR`], e.g. `"t _ s t "`.
    pub fn progress(&self) -> Result<String, GameError> {
        self.progress_with(DEFAULT_SEPARATOR)
    }

    /// Progress string with a custom separator.
    ///
    /// Every position, the last one included, is followed by `separator`.
    ///
    /// ```rust
    /// use hangman::GameSession;
    ///
    /// let mut game = GameSession::new(["unused"]).unwrap();
    /// game.start(Some("test")).unwrap();
    /// game.guess('e').unwrap();
    ///
    /// assert_eq!(game.progress_with("|").unwrap(), "_|e|_|_|");
    /// ```
    pub fn progress_with(&self, separator: &str) -> Result<String, GameError> {
        Ok(self.running()?.progress(separator))
    }

    /// Serializable view of the current game.
    pub fn snapshot(&self) -> Result<SessionSnapshot, GameError> {
        Ok(self.running()?.snapshot())
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, SessionState::Running(_))
    }

    pub fn phase(&self) -> GamePhase {
        match self.state {
            SessionState::NotRunning => GamePhase::NotRunning,
            SessionState::Running(_) => GamePhase::Running,
        }
    }

    /// The candidate words random games are drawn from.
    pub fn words(&self) -> &WordPool {
        &self.pool
    }

    fn running(&self) -> Result<&Session, GameError> {
        match &self.state {
            SessionState::Running(session) => Ok(session),
            SessionState::NotRunning => Err(GameError::NotRunning),
        }
    }

    fn running_mut(&mut self) -> Result<&mut Session, GameError> {
        match &mut self.state {
            SessionState::Running(session) => Ok(session),
            SessionState::NotRunning => Err(GameError::NotRunning),
        }
    }
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("words", &self.pool.len())
            .field("phase", &self.phase())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(word: &str) -> GameSession {
        let mut game = GameSession::new(["apple", "banana"]).unwrap();
        game.start(Some(word)).unwrap();
        game
    }

    #[test]
    fn new_engine_is_not_running() {
        let game = GameSession::new(["word"]).unwrap();
        assert!(!game.is_running());
        assert_eq!(game.phase(), GamePhase::NotRunning);
    }

    #[test]
    fn empty_word_list_is_invalid_argument() {
        let err = GameSession::new(Vec::<String>::new()).unwrap_err();
        assert_eq!(err, GameError::EmptyWordPool);
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn constructor_lowercases_words() {
        let game = GameSession::new(["APPLE", "Pear"]).unwrap();
        let words: Vec<&str> = game.words().iter().collect();
        assert_eq!(words, vec!["apple", "pear"]);
    }

    #[test]
    fn start_twice_is_invalid_state() {
        let mut game = started("test");
        let err = game.start(None).unwrap_err();
        assert_eq!(err, GameError::AlreadyRunning);
        assert_eq!(err.kind(), ErrorKind::InvalidState);
        assert_eq!(game.word().unwrap(), "test");
    }

    #[test]
    fn stop_without_start_is_invalid_state() {
        let mut game = GameSession::new(["word"]).unwrap();
        assert_eq!(game.stop(), Err(GameError::NotRunning));
        assert!(!game.is_running());
    }

    #[test]
    fn start_lowercases_supplied_word() {
        let game = started("TeSt");
        assert_eq!(game.word().unwrap(), "test");
    }

    #[test]
    fn start_without_word_picks_from_pool() {
        let mut game = GameSession::new(["apple", "banana"]).unwrap();
        game.start(None).unwrap();
        let word = game.word().unwrap();
        assert!(word == "apple" || word == "banana");
    }

    #[test]
    fn fresh_game_has_no_strikes_or_guesses() {
        let game = started("test");
        assert_eq!(game.strikes().unwrap(), 0);
        assert!(game.guessed_characters().unwrap().is_empty());
        assert_eq!(game.phase(), GamePhase::Running);
    }

    #[test]
    fn guess_is_case_insensitive() {
        let mut game = started("test");
        assert!(game.guess('T').unwrap());
        assert!(game.is_guessed('t').unwrap());
        assert!(game.is_guessed('T').unwrap());
        assert_eq!(game.guessed_characters().unwrap(), vec!['t']);
    }

    #[test]
    fn guess_rejects_repeated_letter_in_either_case() {
        let mut game = started("test");
        game.guess('t').unwrap();

        let err = game.guess('T').unwrap_err();
        assert_eq!(err, GameError::AlreadyGuessed('t'));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(game.guessed_characters().unwrap(), vec!['t']);
    }

    #[test]
    fn queries_fail_when_not_running() {
        let mut game = GameSession::new(["word"]).unwrap();
        assert_eq!(game.guess('a'), Err(GameError::NotRunning));
        assert_eq!(game.strikes(), Err(GameError::NotRunning));
        assert_eq!(game.is_solved(), Err(GameError::NotRunning));
        assert_eq!(game.is_guessed('a'), Err(GameError::NotRunning));
        assert_eq!(game.word(), Err(GameError::NotRunning));
        assert_eq!(game.guessed_characters(), Err(GameError::NotRunning));
        assert_eq!(game.progress(), Err(GameError::NotRunning));
        assert!(game.snapshot().is_err());
        assert!(game.guesses().is_err());
    }

    #[test]
    fn stop_discards_the_session() {
        let mut game = started("test");
        game.guess('z').unwrap();
        game.stop().unwrap();

        assert!(!game.is_running());
        assert_eq!(game.strikes(), Err(GameError::NotRunning));
    }

    #[test]
    fn restart_resets_strikes_and_guesses() {
        let mut game = started("test");
        game.guess('x').unwrap();
        game.guess('y').unwrap();
        game.stop().unwrap();

        game.start(Some("other")).unwrap();
        assert_eq!(game.strikes().unwrap(), 0);
        assert!(game.guessed_characters().unwrap().is_empty());
        assert!(!game.is_guessed('x').unwrap());
    }

    #[test]
    fn engine_does_not_end_game_on_many_strikes() {
        let mut game = started("a");
        for c in "bcdefghijklmnop".chars() {
            assert!(!game.guess(c).unwrap());
        }
        assert_eq!(game.strikes().unwrap(), 15);
        assert!(game.is_running());
    }

    #[test]
    fn non_ascii_uppercase_word_is_solvable_by_uppercase_guesses() {
        let mut game = started("ΟΔΟΣ");
        assert_eq!(game.word().unwrap(), "οδοσ");

        assert!(game.guess('Ο').unwrap());
        assert!(game.guess('Δ').unwrap());
        assert_eq!(game.progress().unwrap(), "ο δ ο _ ");
        assert!(game.guess('Σ').unwrap());

        assert!(game.is_solved().unwrap());
        assert_eq!(game.strikes().unwrap(), 0);
        assert_eq!(game.progress().unwrap(), "ο δ ο σ ");
    }

    #[test]
    fn dotted_capital_i_word_is_solvable() {
        let mut game = started("\u{130}");
        assert_eq!(game.word().unwrap(), "i");

        assert!(game.guess('\u{130}').unwrap());
        assert!(game.is_solved().unwrap());
        assert_eq!(game.progress().unwrap(), "i ");
    }

    #[test]
    fn elapsed_is_none_before_first_guess() {
        let game = started("test");
        assert_eq!(game.elapsed(), Ok(None));
    }

    #[test]
    fn elapsed_spans_first_to_latest_guess() {
        let mut game = started("test");
        game.guess('t').unwrap();
        game.guess('z').unwrap();

        let elapsed = game.elapsed().unwrap().unwrap();
        let log = game.guesses().unwrap();
        let expected = log[1]
            .timestamp
            .signed_duration_since(log[0].timestamp)
            .to_std()
            .unwrap();
        assert_eq!(elapsed, expected);
    }

    #[test]
    fn elapsed_requires_running_game() {
        let mut game = started("test");
        game.guess('t').unwrap();
        game.stop().unwrap();
        assert_eq!(game.elapsed(), Err(GameError::NotRunning));
    }

    #[test]
    fn snapshot_hides_the_word() {
        let mut game = started("secret");
        game.guess('e').unwrap();

        let snapshot = game.snapshot().unwrap();
        assert_eq!(snapshot.progress, "_ e _ _ e _ ");
        assert!(!snapshot.progress.contains("secret"));
        assert_eq!(snapshot.word_length, 6);
    }

    #[test]
    fn debug_output_shows_phase() {
        let game = started("test");
        let debug = format!("{game:?}");
        assert!(debug.contains("Running"));
        assert!(!debug.contains("test"));
    }
}
