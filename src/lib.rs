//! Hangman: a single-session word-guessing game engine
//!
//! The engine is a two-phase state machine. A [`GameSession`] starts out
//! not running; `start` creates a fresh game and `stop` throws it away.
//! While a game runs, callers guess letters and query progress. Everything
//! else (reading input, drawing the gallows, deciding when too many strikes
//! mean a loss) belongs to the caller.
//!
//! # Core Concepts
//!
//! - **WordPool**: the fixed, lowercase list of candidate words
//! - **Session**: the state of one running game, replaced on every `start`
//! - **Strike**: an incorrect guess
//! - **Progress string**: guessed letters with `_` for the rest
//!
//! # Example
//!
//! ```rust
//! use hangman::{GameError, GameSession};
//!
//! let mut game = GameSession::new(["hangman", "gallows"]).unwrap();
//! game.start(Some("test")).unwrap();
//!
//! for c in ['t', 'z', 'e', 's'] {
//!     game.guess(c).unwrap();
//! }
//!
//! assert!(game.is_solved().unwrap());
//! assert_eq!(game.strikes().unwrap(), 1);
//! assert_eq!(game.guess('t'), Err(GameError::AlreadyGuessed('t')));
//!
//! game.stop().unwrap();
//! assert_eq!(game.strikes(), Err(GameError::NotRunning));
//! ```

pub mod builder;
pub mod core;
mod macros;
pub mod pool;
pub mod session;

// Re-export commonly used types
pub use builder::GameBuilder;
pub use self::core::{GamePhase, GuessRecord};
pub use pool::WordPool;
pub use session::{ErrorKind, GameError, GameSession, SessionSnapshot};
