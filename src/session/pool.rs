//! Shared phrase pool with draw-without-replacement
//!
//! One pool serves every session of a run; a drawn phrase never comes back.

use crate::core::{GameError, SecretPhrase};
use rand::Rng;

/// Phrases not yet played in this run
#[derive(Debug, Clone, Default)]
pub struct PhrasePool {
    phrases: Vec<SecretPhrase>,
}

impl PhrasePool {
    #[must_use]
    pub const fn new(phrases: Vec<SecretPhrase>) -> Self {
        Self { phrases }
    }

    /// Remove and return a random phrase
    ///
    /// # Errors
    /// Returns `PhrasePoolExhausted` once every phrase has been drawn.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<SecretPhrase, GameError> {
        if self.phrases.is_empty() {
            tracing::warn!("phrase pool exhausted");
            return Err(GameError::PhrasePoolExhausted);
        }

        let index = rng.random_range(0..self.phrases.len());
        let phrase = self.phrases.swap_remove(index);
        tracing::debug!(remaining = self.phrases.len(), "drew phrase");
        Ok(phrase)
    }

    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.phrases.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}
