//! Presentation events emitted while a session runs
//!
//! The session never formats text; a renderer turns these into output.

use crate::core::{Code, Feedback, GameRecord, PlayerId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    RoundStarted {
        player: PlayerId,
        round: u32,
        /// Masked phrase for Wheel of Fortune, `None` for Mastermind
        masked: Option<String>,
        budget: u32,
    },
    GuessRejected {
        guess: String,
        reason: String,
    },
    CodeFeedback {
        guess: Code,
        feedback: Feedback,
        attempts_left: u32,
    },
    LetterRevealed {
        letter: char,
        hit: bool,
        buffer: String,
        wrong_answers_left: u32,
    },
    Won {
        score: u32,
        secret: String,
    },
    Lost {
        secret: String,
    },
    Recorded(GameRecord),
    PoolExhausted,
}
