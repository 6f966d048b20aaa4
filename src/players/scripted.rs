//! Fixed guess sequences, for replays and tests

use super::GuessProducer;
use crate::core::GameError;
use crate::session::GuessContext;
use std::collections::VecDeque;

/// Replays a fixed list of guesses in order
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    guesses: VecDeque<String>,
}

impl Scripted {
    pub fn new<I, S>(guesses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            guesses: guesses.into_iter().map(Into::into).collect(),
        }
    }

    /// Guesses not yet handed out
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.guesses.len()
    }
}

impl GuessProducer for Scripted {
    fn produce_guess(&mut self, _context: &GuessContext<'_>) -> Result<String, GameError> {
        self.guesses.pop_front().ok_or(GameError::NoGuessAvailable)
    }
}
