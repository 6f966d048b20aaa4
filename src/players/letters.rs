//! Automated Wheel of Fortune letter strategies
//!
//! Every strategy only proposes letters missing from the round's guess
//! history; the session still validates what they return.

use super::GuessProducer;
use crate::core::{GameError, GuessHistory};
use crate::session::{GuessContext, RoundView};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

const VOWELS: &str = "aeiou";

/// English letters from most to least frequent
const FREQUENCY_ORDER: &str = "etaoinshrdlcumwfgypbvkjxqz";

fn unused(guessed: &GuessHistory, pool: &str) -> Vec<char> {
    pool.chars().filter(|c| !guessed.contains(*c)).collect()
}

fn guessed_letters<'a>(context: &GuessContext<'a>) -> Result<&'a GuessHistory, GameError> {
    match context.view {
        RoundView::Phrase { guessed, .. } => Ok(guessed),
        RoundView::Code { .. } => Err(GameError::NoGuessAvailable),
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, letters: &[char]) -> Result<String, GameError> {
    letters
        .choose(rng)
        .map(ToString::to_string)
        .ok_or(GameError::NoGuessAvailable)
}

/// Uniformly random unused letter
pub struct RandomLetters {
    rng: StdRng,
}

impl RandomLetters {
    #[must_use]
    pub const fn new(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl GuessProducer for RandomLetters {
    fn produce_guess(&mut self, context: &GuessContext<'_>) -> Result<String, GameError> {
        let guessed = guessed_letters(context)?;
        pick(&mut self.rng, &unused(guessed, FREQUENCY_ORDER))
    }
}

/// Random unused vowel while any remain, then random unused consonant
pub struct VowelFirst {
    rng: StdRng,
}

impl VowelFirst {
    #[must_use]
    pub const fn new(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl GuessProducer for VowelFirst {
    fn produce_guess(&mut self, context: &GuessContext<'_>) -> Result<String, GameError> {
        let guessed = guessed_letters(context)?;

        let vowels = unused(guessed, VOWELS);
        if !vowels.is_empty() {
            return pick(&mut self.rng, &vowels);
        }

        let consonants: Vec<char> = unused(guessed, FREQUENCY_ORDER)
            .into_iter()
            .filter(|c| !VOWELS.contains(*c))
            .collect();
        pick(&mut self.rng, &consonants)
    }
}

/// Most frequent English letter not yet guessed
#[derive(Debug, Default, Clone, Copy)]
pub struct CommonLetters;

impl GuessProducer for CommonLetters {
    fn produce_guess(&mut self, context: &GuessContext<'_>) -> Result<String, GameError> {
        let guessed = guessed_letters(context)?;
        FREQUENCY_ORDER
            .chars()
            .find(|c| !guessed.contains(*c))
            .map(|c| c.to_string())
            .ok_or(GameError::NoGuessAvailable)
    }
}

/// Enum wrapper over the letter strategies
///
/// Allows runtime selection while keeping static dispatch.
pub enum LetterStrategy {
    Random(RandomLetters),
    VowelFirst(VowelFirst),
    Common(CommonLetters),
}

impl LetterStrategy {
    /// Create a strategy from its name
    ///
    /// Supported names: "random", "vowel" / "vowel-first", "common".
    /// Defaults to random if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str, rng: StdRng) -> Self {
        match name {
            "vowel" | "vowel-first" => Self::VowelFirst(VowelFirst::new(rng)),
            "common" | "common-letters" => Self::Common(CommonLetters),
            _ => Self::Random(RandomLetters::new(rng)),
        }
    }

    /// Display name used in reports
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Random(_) => "Random",
            Self::VowelFirst(_) => "Vowel First",
            Self::Common(_) => "Common Letters",
        }
    }
}

impl GuessProducer for LetterStrategy {
    fn produce_guess(&mut self, context: &GuessContext<'_>) -> Result<String, GameError> {
        match self {
            Self::Random(s) => s.produce_guess(context),
            Self::VowelFirst(s) => s.produce_guess(context),
            Self::Common(s) => s.produce_guess(context),
        }
    }
}
