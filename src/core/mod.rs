//! Core domain types for the guessing games
//!
//! Pure, deterministic building blocks: code scoring, phrase reveal, records,
//! player ids, and the shared error type.

mod code;
mod error;
mod identity;
mod record;
mod reveal;

pub use code::{Code, Color, Feedback};
pub use error::{GameError, LetterRejection};
pub use identity::PlayerIdentity;
pub use record::{GameRecord, PlayerId};
pub use reveal::{GuessHistory, MASK, RevealBuffer, SecretPhrase};
