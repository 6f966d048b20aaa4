//! Guess producers
//!
//! Anything that can supply the next guess to a session: a person at the
//! terminal, an automated strategy, or a fixed script. Producers never enforce
//! game rules; the session validates every guess.

mod codes;
mod human;
mod letters;
mod scripted;

pub use codes::{CodeBreaker, ConsistentCode, RandomCode};
pub use human::Prompter;
pub use letters::{CommonLetters, LetterStrategy, RandomLetters, VowelFirst};
pub use scripted::Scripted;

use crate::core::GameError;
use crate::session::GuessContext;

/// A source of guesses for a session
pub trait GuessProducer {
    /// Produce the next guess given the current round view
    ///
    /// # Errors
    /// Returns an error when no guess can be produced at all, e.g. closed
    /// input or an exhausted strategy.
    fn produce_guess(&mut self, context: &GuessContext<'_>) -> Result<String, GameError>;
}
