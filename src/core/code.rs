//! Mastermind secret codes and guess scoring
//!
//! A code is an ordered sequence of colors drawn from a fixed six-color palette.
//! Scoring a guess against the secret yields two counts:
//! - exact: same color at the same position
//! - partial: guess color found at some *other* position of the secret
//!
//! Partial matches are counted per guess position without consuming secret
//! positions, so a secret color can back several partial matches. This is the
//! scoring the game has always reported, not the Knuth peg-counting rule.

use super::GameError;
use rand::Rng;
use std::fmt;

/// A peg color from the fixed palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
    Purple,
}

impl Color {
    /// The full palette in display order
    pub const ALL: [Self; 6] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Yellow,
        Self::Orange,
        Self::Purple,
    ];

    /// Parse a palette symbol (case-insensitive)
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'R' => Some(Self::Red),
            'G' => Some(Self::Green),
            'B' => Some(Self::Blue),
            'Y' => Some(Self::Yellow),
            'O' => Some(Self::Orange),
            'P' => Some(Self::Purple),
            _ => None,
        }
    }

    /// The single-letter symbol for this color
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Green => 'G',
            Self::Blue => 'B',
            Self::Yellow => 'Y',
            Self::Orange => 'O',
            Self::Purple => 'P',
        }
    }
}

/// An ordered sequence of palette colors, used both for secrets and guesses
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code(Vec<Color>);

impl Code {
    /// Build a code from colors
    #[must_use]
    pub const fn new(colors: Vec<Color>) -> Self {
        Self(colors)
    }

    /// Parse a guess such as "RGBY"
    ///
    /// Length is checked before symbols.
    ///
    /// # Errors
    /// - `InvalidGuessLength` if the input does not have `expected_len` symbols
    /// - `InvalidSymbol` for the first character outside the palette
    ///
    /// # Examples
    /// ```
    /// use guessing_games::core::{Code, Color};
    ///
    /// let code = Code::parse("rgby", 4).unwrap();
    /// assert_eq!(code.colors()[0], Color::Red);
    /// assert!(Code::parse("RGB", 4).is_err());
    /// assert!(Code::parse("RGBX", 4).is_err());
    /// ```
    pub fn parse(input: &str, expected_len: usize) -> Result<Self, GameError> {
        let actual = input.chars().count();
        if actual != expected_len {
            return Err(GameError::InvalidGuessLength {
                expected: expected_len,
                actual,
            });
        }

        input
            .chars()
            .map(|ch| Color::from_char(ch).ok_or(GameError::InvalidSymbol(ch)))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Generate a random code of `length` colors
    ///
    /// Without duplicates, colors already in the code are redrawn, so the
    /// caller must keep `length <= Color::ALL.len()`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, length: usize, allow_duplicates: bool) -> Self {
        debug_assert!(allow_duplicates || length <= Color::ALL.len());

        let mut colors = Vec::with_capacity(length);
        while colors.len() < length {
            let color = Color::ALL[rng.random_range(0..Color::ALL.len())];
            if allow_duplicates || !colors.contains(&color) {
                colors.push(color);
            }
        }
        Self(colors)
    }

    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.0
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
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in &self.0 {
            write!(f, "{}", color.symbol())?;
        }
        Ok(())
    }
}

/// Exact/partial match counts for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    pub exact: usize,
    pub partial: usize,
}

impl Feedback {
    /// Score `guess` against `secret`
    ///
    /// # Errors
    /// Returns `InvalidGuessLength` if the two codes differ in length.
    ///
    /// # Examples
    /// ```
    /// use guessing_games::core::{Code, Feedback};
    ///
    /// let secret = Code::parse("RGBY", 4).unwrap();
    /// let guess = Code::parse("GRYB", 4).unwrap();
    /// let feedback = Feedback::score(&secret, &guess).unwrap();
    ///
    /// assert_eq!(feedback.exact, 0);
    /// assert_eq!(feedback.partial, 4);
    /// ```
    pub fn score(secret: &Code, guess: &Code) -> Result<Self, GameError> {
        if guess.len() != secret.len() {
            return Err(GameError::InvalidGuessLength {
                expected: secret.len(),
                actual: guess.len(),
            });
        }

        let secret = secret.colors();
        let guess = guess.colors();

        let exact = guess
            .iter()
            .zip(secret)
            .filter(|(g, s)| g == s)
            .count();

        // At most one partial per guess position; secret positions are not consumed
        let partial = guess
            .iter()
            .enumerate()
            .filter(|&(i, g)| {
                secret
                    .iter()
                    .enumerate()
                    .any(|(j, s)| i != j && s == g)
            })
            .count();

        Ok(Self { exact, partial })
    }

    /// Whether this feedback solves a code of `length` colors
    #[inline]
    #[must_use]
    pub const fn is_win(self, length: usize) -> bool {
        self.exact == length
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} exact, {} partial", self.exact, self.partial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn code(s: &str) -> Code {
        Code::parse(s, s.chars().count()).unwrap()
    }

    #[test]
    fn parse_uppercases_input() {
        assert_eq!(code("rgby"), code("RGBY"));
        assert_eq!(code("RgBy").to_string(), "RGBY");
    }

    #[test]
    fn parse_checks_length_before_symbols() {
        assert!(matches!(
            Code::parse("XYZ", 4),
            Err(GameError::InvalidGuessLength {
                expected: 4,
                actual: 3
            })
        ));
        assert!(matches!(
            Code::parse("RGBX", 4),
            Err(GameError::InvalidSymbol('X'))
        ));
    }

    #[test]
    fn score_all_partial() {
        let feedback = Feedback::score(&code("RGBY"), &code("GRYB")).unwrap();
        assert_eq!(feedback, Feedback { exact: 0, partial: 4 });
        assert!(!feedback.is_win(4));
    }

    #[test]
    fn score_identical_codes() {
        let secret = code("RGBY");
        let feedback = Feedback::score(&secret, &secret).unwrap();
        assert_eq!(feedback, Feedback { exact: 4, partial: 0 });
        assert!(feedback.is_win(4));
    }

    #[test]
    fn score_no_overlap() {
        let feedback = Feedback::score(&code("RRGG"), &code("BBYY")).unwrap();
        assert_eq!(feedback, Feedback { exact: 0, partial: 0 });
    }

    #[test]
    fn score_mixed() {
        // R exact, O and G elsewhere, P absent
        let feedback = Feedback::score(&code("RGBO"), &code("ROGP")).unwrap();
        assert_eq!(feedback, Feedback { exact: 1, partial: 2 });
    }

    #[test]
    fn score_does_not_consume_secret_colors() {
        // One red in the secret backs partials at every guess position but its own
        let feedback = Feedback::score(&code("RGBY"), &code("GRRR")).unwrap();
        assert_eq!(feedback, Feedback { exact: 0, partial: 4 });
    }

    #[test]
    fn score_exact_position_can_also_be_partial() {
        // Position 0 matches exactly and red also appears at position 1 of the secret
        let feedback = Feedback::score(&code("RRBY"), &code("RGGG")).unwrap();
        assert_eq!(feedback, Feedback { exact: 1, partial: 1 });
    }

    #[test]
    fn score_rejects_length_mismatch() {
        let result = Feedback::score(&code("RGBY"), &code("RGB"));
        assert!(matches!(
            result,
            Err(GameError::InvalidGuessLength {
                expected: 4,
                actual: 3
            })
        ));
    }

    #[test]
    fn random_code_without_duplicates_is_distinct() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let secret = Code::random(&mut rng, 4, false);
            assert_eq!(secret.len(), 4);
            let mut colors = secret.colors().to_vec();
            colors.sort_by_key(|c| c.symbol());
            colors.dedup();
            assert_eq!(colors.len(), 4);
        }
    }

    #[test]
    fn random_code_full_palette() {
        let mut rng = StdRng::seed_from_u64(11);
        let secret = Code::random(&mut rng, 6, false);
        for color in Color::ALL {
            assert!(secret.colors().contains(&color));
        }
    }

    #[test]
    fn random_code_with_duplicates_longer_than_palette() {
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..20 {
            let secret = Code::random(&mut rng, 10, true);
            assert_eq!(secret.len(), 10);

            // Ten slots over six colors must repeat at least one
            let mut colors = secret.colors().to_vec();
            colors.sort_by_key(|c| c.symbol());
            colors.dedup();
            assert!(colors.len() < 10);
        }
    }

    fn arb_code(len: usize) -> impl Strategy<Value = Code> {
        proptest::collection::vec(proptest::sample::select(Color::ALL.to_vec()), len)
            .prop_map(Code::new)
    }

    fn arb_pair() -> impl Strategy<Value = (Code, Code)> {
        (1usize..8).prop_flat_map(|len| (arb_code(len), arb_code(len)))
    }

    proptest! {
        #[test]
        fn prop_score_bounds((secret, guess) in arb_pair()) {
            let feedback = Feedback::score(&secret, &guess).unwrap();
            prop_assert!(feedback.exact <= secret.len());
            prop_assert!(feedback.partial <= secret.len());
            prop_assert!(feedback.exact + feedback.partial <= 2 * secret.len());
        }

        #[test]
        fn prop_distinct_secret_scores_itself_perfectly(len in 1usize..=6, seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let secret = Code::random(&mut rng, len, false);
            let feedback = Feedback::score(&secret, &secret).unwrap();
            prop_assert_eq!(feedback, Feedback { exact: len, partial: 0 });
        }
    }
}
