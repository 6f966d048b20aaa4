//! The per-game session state machine
//!
//! A session plays rounds of one game variant for one player at a time:
//! it takes guesses, evaluates them, decides win or loss, and appends exactly
//! one record per finished round.

use super::events::SessionEvent;
use super::pool::PhrasePool;
use super::round::{CodeRound, Evaluation, RoundView, WheelRound};
use crate::config::{MastermindRules, WheelRules};
use crate::core::{Code, GameError, GameRecord, PlayerId, PlayerIdentity};
use crate::players::GuessProducer;
use crate::records::RecordStore;
use rand::rngs::StdRng;

/// Points per unused attempt (Mastermind) or unused wrong answer (Wheel)
pub const POINTS_PER_REMAINING: u32 = 10;

/// Where the current round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    AwaitingGuess,
    Won { score: u32 },
    Lost,
}

impl RoundState {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::AwaitingGuess)
    }
}

/// Whether the next round keeps the player or starts a new one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    SamePlayer,
    NewPlayer,
}

/// Everything a guess producer may look at before guessing
#[derive(Debug, Clone, Copy)]
pub struct GuessContext<'a> {
    pub player: PlayerId,
    pub view: RoundView<'a>,
    /// Why the previous guess of this turn was refused, if it was
    pub rejected: Option<&'a GameError>,
}

/// Result of one accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub evaluation: Evaluation,
    pub state: RoundState,
    pub remaining: u32,
    /// Appended to the store when this guess ended the round
    pub record: Option<GameRecord>,
}

/// Summary of a finished round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    pub record: GameRecord,
    pub won: bool,
    pub guesses: u32,
}

enum Game<'p> {
    Mastermind {
        rules: MastermindRules,
        round: CodeRound,
    },
    Wheel {
        rules: WheelRules,
        pool: &'p mut PhrasePool,
        round: WheelRound,
    },
}

impl Game<'_> {
    fn evaluate(&mut self, raw: &str) -> Result<Evaluation, GameError> {
        match self {
            Self::Mastermind { round, .. } => round.evaluate(raw),
            Self::Wheel { round, .. } => round.evaluate(raw),
        }
    }

    fn is_won(&self) -> bool {
        match self {
            Self::Mastermind { round, .. } => round.is_won(),
            Self::Wheel { round, .. } => round.is_won(),
        }
    }

    const fn remaining(&self) -> u32 {
        match self {
            Self::Mastermind { round, .. } => round.remaining(),
            Self::Wheel { round, .. } => round.remaining(),
        }
    }

    fn secret_text(&self) -> String {
        match self {
            Self::Mastermind { round, .. } => round.secret().to_string(),
            Self::Wheel { round, .. } => round.phrase().text().to_string(),
        }
    }

    fn masked(&self) -> Option<String> {
        match self {
            Self::Mastermind { .. } => None,
            Self::Wheel { round, .. } => Some(round.buffer().to_string()),
        }
    }

    fn view(&self) -> RoundView<'_> {
        match self {
            Self::Mastermind { round, .. } => round.view(),
            Self::Wheel { round, .. } => round.view(),
        }
    }

    /// Replace the round with a fresh secret
    fn new_round(&mut self, rng: &mut StdRng) -> Result<(), GameError> {
        match self {
            Self::Mastermind { rules, round } => {
                let secret = Code::random(rng, rules.code_length, rules.allow_duplicates);
                *round = CodeRound::new(secret, rules);
            }
            Self::Wheel { rules, pool, round } => {
                let phrase = pool.draw(rng)?;
                *round = WheelRound::new(phrase, rules);
            }
        }
        Ok(())
    }
}

/// One player's sequence of rounds of a single game variant
pub struct Session<'p> {
    game: Game<'p>,
    player: PlayerId,
    state: RoundState,
    round_number: u32,
    guesses: u32,
    rng: StdRng,
}

impl Session<'static> {
    /// Start a Mastermind session with a random secret
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the rules fail validation.
    pub fn mastermind(
        rules: MastermindRules,
        player: PlayerId,
        mut rng: StdRng,
    ) -> Result<Self, GameError> {
        rules.validate()?;
        let secret = Code::random(&mut rng, rules.code_length, rules.allow_duplicates);
        Self::mastermind_with_secret(rules, player, secret, rng)
    }

    /// Start a Mastermind session whose first round uses `secret`
    ///
    /// Later rounds draw random secrets.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the rules fail validation or the secret
    /// length differs from the configured code length.
    pub fn mastermind_with_secret(
        rules: MastermindRules,
        player: PlayerId,
        secret: Code,
        rng: StdRng,
    ) -> Result<Self, GameError> {
        rules.validate()?;
        if secret.len() != rules.code_length {
            return Err(GameError::InvalidConfig(format!(
                "secret has {} colors, rules expect {}",
                secret.len(),
                rules.code_length
            )));
        }

        let round = CodeRound::new(secret, &rules);
        Ok(Self::start(Game::Mastermind { rules, round }, player, rng))
    }
}

impl<'p> Session<'p> {
    /// Start a Wheel of Fortune session drawing phrases from `pool`
    ///
    /// # Errors
    /// - `InvalidConfig` if the rules fail validation
    /// - `PhrasePoolExhausted` if the pool is already empty
    pub fn wheel(
        rules: WheelRules,
        pool: &'p mut PhrasePool,
        player: PlayerId,
        mut rng: StdRng,
    ) -> Result<Self, GameError> {
        rules.validate()?;
        let phrase = pool.draw(&mut rng)?;
        let round = WheelRound::new(phrase, &rules);
        Ok(Self::start(Game::Wheel { rules, pool, round }, player, rng))
    }

    fn start(game: Game<'p>, player: PlayerId, rng: StdRng) -> Self {
        tracing::info!(player = player.value(), round = 1, "round started");
        Self {
            game,
            player,
            state: RoundState::AwaitingGuess,
            round_number: 1,
            guesses: 0,
            rng,
        }
    }

    #[inline]
    #[must_use]
    pub const fn player(&self) -> PlayerId {
        self.player
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Attempts (Mastermind) or wrong answers (Wheel) left this round
    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.game.remaining()
    }

    /// 1-based index of the current round within this session
    #[inline]
    #[must_use]
    pub const fn round_number(&self) -> u32 {
        self.round_number
    }

    /// What a guess producer sees right now
    #[must_use]
    pub fn context<'a>(&'a self, rejected: Option<&'a GameError>) -> GuessContext<'a> {
        GuessContext {
            player: self.player,
            view: self.game.view(),
            rejected,
        }
    }

    /// Evaluate one guess and update the round
    ///
    /// The win check runs before the loss check, so a guess that wins on the
    /// last attempt is a win. On termination one record is appended to
    /// `store`.
    ///
    /// # Errors
    /// - `RoundOver` if the round already ended
    /// - `InvalidGuessLength`, `InvalidSymbol` or `InvalidLetterGuess` for a
    ///   guess that fails validation; the round stays open for a retry
    pub fn submit(&mut self, guess: &str, store: &mut RecordStore) -> Result<TurnReport, GameError> {
        if self.state.is_over() {
            return Err(GameError::RoundOver);
        }

        let evaluation = match self.game.evaluate(guess) {
            Ok(evaluation) => evaluation,
            Err(err) => {
                tracing::warn!(player = self.player.value(), guess, error = %err, "guess rejected");
                return Err(err);
            }
        };
        self.guesses += 1;

        let remaining = self.game.remaining();
        tracing::debug!(
            player = self.player.value(),
            guess,
            ?evaluation,
            remaining,
            "guess evaluated"
        );

        self.state = if self.game.is_won() {
            RoundState::Won {
                score: remaining.saturating_mul(POINTS_PER_REMAINING),
            }
        } else if remaining == 0 {
            RoundState::Lost
        } else {
            RoundState::AwaitingGuess
        };

        let record = self.state.is_over().then(|| {
            let score = match self.state {
                RoundState::Won { score } => score,
                _ => 0,
            };
            let record = GameRecord::new(score, self.player);
            tracing::info!(
                player = self.player.value(),
                round = self.round_number,
                won = matches!(self.state, RoundState::Won { .. }),
                score,
                "round finished"
            );
            store.append(record);
            record
        });

        Ok(TurnReport {
            evaluation,
            state: self.state,
            remaining,
            record,
        })
    }

    /// Play the current round to completion
    ///
    /// Guesses refused by validation are reported through `sink` and the
    /// producer is asked again within the same turn.
    ///
    /// # Errors
    /// Returns `RoundOver` if called on a finished round, or any error raised
    /// by the producer itself.
    pub fn play_round<P, F>(
        &mut self,
        producer: &mut P,
        store: &mut RecordStore,
        sink: &mut F,
    ) -> Result<RoundOutcome, GameError>
    where
        P: GuessProducer + ?Sized,
        F: FnMut(&SessionEvent),
    {
        if self.state.is_over() {
            return Err(GameError::RoundOver);
        }

        sink(&SessionEvent::RoundStarted {
            player: self.player,
            round: self.round_number,
            masked: self.game.masked(),
            budget: self.game.remaining(),
        });

        let mut rejected: Option<GameError> = None;
        loop {
            let guess = producer.produce_guess(&self.context(rejected.as_ref()))?;

            let report = match self.submit(&guess, store) {
                Ok(report) => report,
                Err(err) if err.is_invalid_guess() => {
                    sink(&SessionEvent::GuessRejected {
                        guess,
                        reason: err.to_string(),
                    });
                    rejected = Some(err);
                    continue;
                }
                Err(err) => return Err(err),
            };
            rejected = None;

            sink(&self.turn_event(report.evaluation));

            if let Some(record) = report.record {
                let secret = self.game.secret_text();
                sink(&match report.state {
                    RoundState::Won { score } => SessionEvent::Won { score, secret },
                    _ => SessionEvent::Lost { secret },
                });
                sink(&SessionEvent::Recorded(record));

                return Ok(RoundOutcome {
                    record,
                    won: matches!(report.state, RoundState::Won { .. }),
                    guesses: self.guesses,
                });
            }
        }
    }

    fn turn_event(&self, evaluation: Evaluation) -> SessionEvent {
        match evaluation {
            Evaluation::Code { guess, feedback } => SessionEvent::CodeFeedback {
                guess,
                feedback,
                attempts_left: self.game.remaining(),
            },
            Evaluation::Letter { letter, hit } => SessionEvent::LetterRevealed {
                letter,
                hit,
                buffer: self.game.masked().unwrap_or_default(),
                wrong_answers_left: self.game.remaining(),
            },
        }
    }

    /// Start the next round with a fresh secret
    ///
    /// With [`Continuation::NewPlayer`] a new id is taken from `ids` once the
    /// new secret is in place. An unfinished round is abandoned without a
    /// record.
    ///
    /// # Errors
    /// Returns `PhrasePoolExhausted` when a Wheel session has no phrase left;
    /// the session then keeps its finished round and cannot continue.
    pub fn reset(
        &mut self,
        continuation: Continuation,
        ids: &mut PlayerIdentity,
    ) -> Result<(), GameError> {
        self.game.new_round(&mut self.rng)?;

        if continuation == Continuation::NewPlayer {
            self.player = ids.next();
        }
        self.state = RoundState::AwaitingGuess;
        self.round_number += 1;
        self.guesses = 0;

        tracing::info!(
            player = self.player.value(),
            round = self.round_number,
            ?continuation,
            "round started"
        );
        Ok(())
    }
}
