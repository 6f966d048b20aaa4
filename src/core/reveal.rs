//! Wheel of Fortune phrases and the masked reveal buffer
//!
//! The reveal buffer starts with every letter masked and spaces shown. Each
//! correct letter guess unmasks all of its positions, using the letter case
//! stored in the phrase.

use super::{GameError, LetterRejection};
use rustc_hash::FxHashSet;
use std::fmt;

/// Symbol shown for a letter that has not been revealed yet
pub const MASK: char = '*';

/// A secret phrase made of ASCII letters and spaces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretPhrase {
    text: String,
}

impl SecretPhrase {
    /// Create a phrase, rejecting anything but ASCII letters and spaces
    ///
    /// Letter guesses are limited to `a-z`, so any other letter could never
    /// be revealed.
    ///
    /// # Errors
    /// Returns `InvalidPhrase` for blank input or characters other than
    /// ASCII letters and spaces.
    pub fn new(text: impl Into<String>) -> Result<Self, GameError> {
        let text = text.into();

        let letters_and_spaces = text.chars().all(|c| c.is_ascii_alphabetic() || c == ' ');
        if text.trim().is_empty() || !letters_and_spaces {
            return Err(GameError::InvalidPhrase(text));
        }

        Ok(Self { text })
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the phrase contains `letter`, ignoring case
    #[must_use]
    pub fn contains_letter(&self, letter: char) -> bool {
        self.text.chars().any(|c| same_letter(c, letter))
    }
}

impl fmt::Display for SecretPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Masked view of a phrase, same length as the phrase for its whole life
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealBuffer(Vec<char>);

impl RevealBuffer {
    /// Mask every non-space character of `phrase`
    ///
    /// # Examples
    /// ```
    /// use guessing_games::core::{RevealBuffer, SecretPhrase};
    ///
    /// let phrase = SecretPhrase::new("cat nap").unwrap();
    /// assert_eq!(RevealBuffer::initial_mask(&phrase).to_string(), "*** ***");
    /// ```
    #[must_use]
    pub fn initial_mask(phrase: &SecretPhrase) -> Self {
        Self(
            phrase
                .text()
                .chars()
                .map(|c| if c == ' ' { ' ' } else { MASK })
                .collect(),
        )
    }

    /// Reveal every position of `letter` in `phrase`
    ///
    /// The letter must already be validated by the caller. Returns whether the
    /// phrase contains the letter at least once.
    ///
    /// # Examples
    /// ```
    /// use guessing_games::core::{RevealBuffer, SecretPhrase};
    ///
    /// let phrase = SecretPhrase::new("cat nap").unwrap();
    /// let mut buffer = RevealBuffer::initial_mask(&phrase);
    ///
    /// assert!(buffer.apply_guess(&phrase, 'a'));
    /// assert_eq!(buffer.to_string(), "*a* *a*");
    /// assert!(!buffer.apply_guess(&phrase, 'z'));
    /// ```
    pub fn apply_guess(&mut self, phrase: &SecretPhrase, letter: char) -> bool {
        debug_assert_eq!(self.0.len(), phrase.text().chars().count());

        let mut hit = false;
        for (slot, actual) in self.0.iter_mut().zip(phrase.text().chars()) {
            if same_letter(actual, letter) {
                *slot = actual;
                hit = true;
            }
        }
        hit
    }

    /// Whether the buffer now reads exactly like the phrase
    #[must_use]
    pub fn is_solved(&self, phrase: &SecretPhrase) -> bool {
        self.0.iter().copied().eq(phrase.text().chars())
    }

    /// Number of positions still masked
    #[must_use]
    pub fn masked_count(&self) -> usize {
        self.0.iter().filter(|&&c| c == MASK).count()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.0
    }
}

impl fmt::Display for RevealBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

/// Letters guessed so far in the current round, in guess order
#[derive(Debug, Clone, Default)]
pub struct GuessHistory {
    order: Vec<char>,
    seen: FxHashSet<char>,
}

impl GuessHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a raw guess and record it
    ///
    /// Returns the normalized (lowercase) letter.
    ///
    /// # Errors
    /// Returns `InvalidLetterGuess` if the input is not exactly one ASCII
    /// letter or the letter was already guessed this round.
    pub fn accept(&mut self, raw: &str) -> Result<char, GameError> {
        let reject = |reason| GameError::InvalidLetterGuess {
            guess: raw.to_string(),
            reason,
        };

        let mut chars = raw.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => normalize(c),
            _ => return Err(reject(LetterRejection::NotASingleLetter)),
        };

        if !self.seen.insert(letter) {
            return Err(reject(LetterRejection::AlreadyGuessed));
        }
        self.order.push(letter);
        Ok(letter)
    }

    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.seen.contains(&normalize(letter))
    }

    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.order
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.seen.clear();
    }
}

const fn normalize(letter: char) -> char {
    letter.to_ascii_lowercase()
}

fn same_letter(a: char, b: char) -> bool {
    a != ' ' && normalize(a) == normalize(b)
}
