//! Core game types.
//!
//! This module contains the building blocks a session is made of:
//! - Case folding shared by every entry point
//! - The lifecycle phase
//! - The secret word and its letter set
//! - The ordered guess history
//!
//! Nothing here knows about the running/stopped gate; that lives in
//! [`session`](crate::session).

mod history;
mod normalize;
mod phase;
mod secret;

pub use history::{GuessHistory, GuessRecord};
pub use normalize::{fold_char, fold_word};
pub use phase::GamePhase;
pub use secret::SecretWord;
