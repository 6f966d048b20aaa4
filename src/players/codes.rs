//! Automated Mastermind code breakers

use super::GuessProducer;
use crate::core::{Code, Color, Feedback, GameError};
use crate::session::{GuessContext, RoundView};
use rand::Rng;
use rand::rngs::StdRng;

/// Above this many possible codes, exhaustive search falls back to random guessing
const MAX_SEARCH_SPACE: usize = 1_000_000;

fn code_view<'a>(
    context: &GuessContext<'a>,
) -> Result<(&'a [Color], usize, &'a [(Code, Feedback)]), GameError> {
    match context.view {
        RoundView::Code {
            palette,
            code_length,
            history,
            ..
        } => Ok((palette, code_length, history)),
        RoundView::Phrase { .. } => Err(GameError::NoGuessAvailable),
    }
}

fn random_code<R: Rng + ?Sized>(rng: &mut R, palette: &[Color], length: usize) -> Code {
    Code::new(
        (0..length)
            .map(|_| palette[rng.random_range(0..palette.len())])
            .collect(),
    )
}

/// Random code over the palette, repeats allowed
pub struct RandomCode {
    rng: StdRng,
}

impl RandomCode {
    #[must_use]
    pub const fn new(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl GuessProducer for RandomCode {
    fn produce_guess(&mut self, context: &GuessContext<'_>) -> Result<String, GameError> {
        let (palette, length, _) = code_view(context)?;
        if palette.is_empty() {
            return Err(GameError::NoGuessAvailable);
        }
        Ok(random_code(&mut self.rng, palette, length).to_string())
    }
}

/// Guess the first code that would have produced every feedback seen so far
///
/// The secret itself is always consistent, so the search never comes up
/// empty while the history is genuine.
pub struct ConsistentCode {
    rng: StdRng,
}

impl ConsistentCode {
    #[must_use]
    pub const fn new(rng: StdRng) -> Self {
        Self { rng }
    }

    /// Candidate codes in lexicographic palette order
    fn candidates(palette: &[Color], length: usize) -> Option<impl Iterator<Item = Code> + '_> {
        let total = u32::try_from(length)
            .ok()
            .and_then(|exp| palette.len().checked_pow(exp))
            .filter(|&total| total <= MAX_SEARCH_SPACE)?;

        Some((0..total).map(move |mut index| {
            let mut colors = vec![palette[0]; length];
            for slot in colors.iter_mut().rev() {
                *slot = palette[index % palette.len()];
                index /= palette.len();
            }
            Code::new(colors)
        }))
    }

    fn is_consistent(candidate: &Code, history: &[(Code, Feedback)]) -> bool {
        history.iter().all(|(guess, observed)| {
            Feedback::score(candidate, guess).is_ok_and(|feedback| feedback == *observed)
        })
    }
}

impl GuessProducer for ConsistentCode {
    fn produce_guess(&mut self, context: &GuessContext<'_>) -> Result<String, GameError> {
        let (palette, length, history) = code_view(context)?;
        if palette.is_empty() {
            return Err(GameError::NoGuessAvailable);
        }

        let Some(mut candidates) = Self::candidates(palette, length) else {
            tracing::debug!(length, "search space too large, guessing randomly");
            return Ok(random_code(&mut self.rng, palette, length).to_string());
        };

        candidates
            .find(|candidate| Self::is_consistent(candidate, history))
            .map(|code| code.to_string())
            .ok_or(GameError::NoGuessAvailable)
    }
}

/// Enum wrapper over the code breakers, selected by name
pub enum CodeBreaker {
    Random(RandomCode),
    Consistent(ConsistentCode),
}

impl CodeBreaker {
    /// Create a code breaker from its name
    ///
    /// Supported names: "random", "consistent". Defaults to consistent if the
    /// name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str, rng: StdRng) -> Self {
        match name {
            "random" => Self::Random(RandomCode::new(rng)),
            _ => Self::Consistent(ConsistentCode::new(rng)),
        }
    }

    /// Display name used in reports
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Random(_) => "Random Codes",
            Self::Consistent(_) => "Consistent Codes",
        }
    }
}

impl GuessProducer for CodeBreaker {
    fn produce_guess(&mut self, context: &GuessContext<'_>) -> Result<String, GameError> {
        match self {
            Self::Random(s) => s.produce_guess(context),
            Self::Consistent(s) => s.produce_guess(context),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;
    use rand::SeedableRng;

    fn context(history: &[(Code, Feedback)]) -> GuessContext<'_> {
        GuessContext {
            player: PlayerId::new(1),
            view: RoundView::Code {
                palette: &Color::ALL,
                code_length: 4,
                attempts_left: 10,
                history,
            },
            rejected: None,
        }
    }

    /// Turns needed to crack `secret`, with no attempt limit
    fn turns_to_solve(secret: &str, producer: &mut impl GuessProducer) -> Option<usize> {
        let secret = Code::parse(secret, 4).unwrap();
        let mut history: Vec<(Code, Feedback)> = Vec::new();

        for turn in 1..=1296 {
            let guess = Code::parse(&producer.produce_guess(&context(&history)).unwrap(), 4).unwrap();
            let feedback = Feedback::score(&secret, &guess).unwrap();
            if feedback.is_win(4) {
                return Some(turn);
            }
            assert!(history.iter().all(|(seen, _)| *seen != guess), "repeated {guess}");
            history.push((guess, feedback));
        }
        None
    }

    #[test]
    fn random_code_is_valid() {
        let mut producer = RandomCode::new(StdRng::seed_from_u64(4));
        for _ in 0..20 {
            let guess = producer.produce_guess(&context(&[])).unwrap();
            assert!(Code::parse(&guess, 4).is_ok());
        }
    }

    #[test]
    fn consistent_code_starts_lexicographically() {
        let mut producer = ConsistentCode::new(StdRng::seed_from_u64(4));
        assert_eq!(producer.produce_guess(&context(&[])).unwrap(), "RRRR");
    }

    #[test]
    fn consistent_code_always_cracks_the_secret() {
        for secret in ["RGBY", "PORG", "YBOP", "GYRB", "RRRR"] {
            let mut producer = ConsistentCode::new(StdRng::seed_from_u64(4));
            assert!(
                turns_to_solve(secret, &mut producer).is_some(),
                "failed to solve {secret}"
            );
        }
    }

    #[test]
    fn code_breaker_from_name() {
        let rng = || StdRng::seed_from_u64(0);
        assert_eq!(CodeBreaker::from_name("random", rng()).name(), "Random Codes");
        assert_eq!(
            CodeBreaker::from_name("anything", rng()).name(),
            "Consistent Codes"
        );

        let mut breaker = CodeBreaker::from_name("consistent", rng());
        assert_eq!(breaker.produce_guess(&context(&[])).unwrap(), "RRRR");
    }

    #[test]
    fn consistent_code_respects_history() {
        let secret = Code::parse("BYRG", 4).unwrap();
        let first = Code::parse("RRRR", 4).unwrap();
        let history = vec![(first.clone(), Feedback::score(&secret, &first).unwrap())];

        let mut producer = ConsistentCode::new(StdRng::seed_from_u64(4));
        let guess = Code::parse(&producer.produce_guess(&context(&history)).unwrap(), 4).unwrap();

        assert_ne!(guess, first);
        assert!(ConsistentCode::is_consistent(&guess, &history));
    }
}
