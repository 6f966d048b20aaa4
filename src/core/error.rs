//! Error taxonomy shared by every game component
//!
//! Guess errors are recoverable: the session reports them back to the guess
//! producer and the same turn is retried.

use thiserror::Error;

/// Why a Wheel of Fortune letter guess was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterRejection {
    /// Empty input, more than one character, or a non-alphabetic character
    NotASingleLetter,
    /// The letter is already in this round's guess history
    AlreadyGuessed,
}

impl std::fmt::Display for LetterRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotASingleLetter => write!(f, "enter a single letter"),
            Self::AlreadyGuessed => write!(f, "letter already guessed"),
        }
    }
}

/// Errors produced by the games, the record store, and their collaborators
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Guess must be exactly {expected} symbols, got {actual}")]
    InvalidGuessLength { expected: usize, actual: usize },

    #[error("Invalid symbol '{0}' (valid colors: R, G, B, Y, O, P)")]
    InvalidSymbol(char),

    #[error("Invalid letter guess '{guess}': {reason}")]
    InvalidLetterGuess {
        guess: String,
        reason: LetterRejection,
    },

    #[error("No more phrases available")]
    PhrasePoolExhausted,

    #[error("Cannot aggregate an empty collection of game records")]
    EmptyCollection,

    #[error("Invalid phrase '{0}': only letters and spaces are allowed")]
    InvalidPhrase(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("The round is already over")]
    RoundOver,

    #[error("No guess available: every letter has been tried")]
    NoGuessAvailable,

    #[error("Input closed")]
    InputClosed,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GameError {
    /// Whether the guess producer may retry the same turn after this error
    #[must_use]
    pub const fn is_invalid_guess(&self) -> bool {
        matches!(
            self,
            Self::InvalidGuessLength { .. } | Self::InvalidSymbol(_) | Self::InvalidLetterGuess { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_errors_are_retryable() {
        assert!(
            GameError::InvalidGuessLength {
                expected: 4,
                actual: 3
            }
            .is_invalid_guess()
        );
        assert!(GameError::InvalidSymbol('X').is_invalid_guess());
        assert!(
            GameError::InvalidLetterGuess {
                guess: "ab".to_string(),
                reason: LetterRejection::NotASingleLetter,
            }
            .is_invalid_guess()
        );
    }

    #[test]
    fn terminal_errors_are_not_retryable() {
        assert!(!GameError::PhrasePoolExhausted.is_invalid_guess());
        assert!(!GameError::EmptyCollection.is_invalid_guess());
        assert!(!GameError::RoundOver.is_invalid_guess());
    }

    #[test]
    fn error_messages() {
        let err = GameError::InvalidGuessLength {
            expected: 4,
            actual: 5,
        };
        assert_eq!(err.to_string(), "Guess must be exactly 4 symbols, got 5");

        let err = GameError::InvalidLetterGuess {
            guess: "a".to_string(),
            reason: LetterRejection::AlreadyGuessed,
        };
        assert_eq!(
            err.to_string(),
            "Invalid letter guess 'a': letter already guessed"
        );
    }
}
