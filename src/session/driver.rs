//! Multi-round driver
//!
//! Plays rounds back to back until the continue decision declines or the
//! phrase pool runs dry.

use super::engine::{Continuation, GuessContext, RoundOutcome, Session};
use super::events::SessionEvent;
use crate::core::{GameError, PlayerIdentity};
use crate::players::GuessProducer;
use crate::records::RecordStore;

/// Decides what happens after each finished round
pub trait ContinueDecider {
    /// Whether another round should be played
    ///
    /// # Errors
    /// Implementations reading user input may fail with I/O errors.
    fn play_again(&mut self) -> Result<bool, GameError>;

    /// Whether the next round keeps the current player
    ///
    /// # Errors
    /// Implementations reading user input may fail with I/O errors.
    fn continuation(&mut self) -> Result<Continuation, GameError>;
}

/// Keep playing as the same player until content runs out
///
/// Automated players use this: they stop only when the phrase pool is empty.
#[derive(Debug, Default, Clone, Copy)]
pub struct UntilExhausted;

impl ContinueDecider for UntilExhausted {
    fn play_again(&mut self) -> Result<bool, GameError> {
        Ok(true)
    }

    fn continuation(&mut self) -> Result<Continuation, GameError> {
        Ok(Continuation::SamePlayer)
    }
}

/// Play exactly one round
#[derive(Debug, Default, Clone, Copy)]
pub struct SingleRound;

impl ContinueDecider for SingleRound {
    fn play_again(&mut self) -> Result<bool, GameError> {
        Ok(false)
    }

    fn continuation(&mut self) -> Result<Continuation, GameError> {
        Ok(Continuation::SamePlayer)
    }
}

/// Play a fixed number of rounds as the same player
#[derive(Debug, Clone, Copy)]
pub struct FixedRounds {
    left: u32,
}

impl FixedRounds {
    /// Decider for `rounds` rounds in total, counting the one already started
    #[must_use]
    pub const fn new(rounds: u32) -> Self {
        Self {
            left: rounds.saturating_sub(1),
        }
    }
}

impl ContinueDecider for FixedRounds {
    fn play_again(&mut self) -> Result<bool, GameError> {
        if self.left == 0 {
            return Ok(false);
        }
        self.left -= 1;
        Ok(true)
    }

    fn continuation(&mut self) -> Result<Continuation, GameError> {
        Ok(Continuation::SamePlayer)
    }
}

/// A guess producer paired with a separate continue decider
///
/// A human answers both questions from one terminal; automated strategies
/// borrow their decisions from [`UntilExhausted`], [`SingleRound`] or
/// [`FixedRounds`].
#[derive(Debug, Clone)]
pub struct Player<P, D> {
    pub producer: P,
    pub decider: D,
}

impl<P, D> Player<P, D> {
    pub const fn new(producer: P, decider: D) -> Self {
        Self { producer, decider }
    }
}

impl<P: GuessProducer, D> GuessProducer for Player<P, D> {
    fn produce_guess(&mut self, context: &GuessContext<'_>) -> Result<String, GameError> {
        self.producer.produce_guess(context)
    }
}

impl<P, D: ContinueDecider> ContinueDecider for Player<P, D> {
    fn play_again(&mut self) -> Result<bool, GameError> {
        self.decider.play_again()
    }

    fn continuation(&mut self) -> Result<Continuation, GameError> {
        self.decider.continuation()
    }
}

/// Play rounds until `player` stops or the phrase pool is exhausted
///
/// Pool exhaustion is a normal stop, reported as
/// [`SessionEvent::PoolExhausted`].
///
/// # Errors
/// Propagates producer and decider errors.
pub fn play_all<A, F>(
    session: &mut Session<'_>,
    player: &mut A,
    store: &mut RecordStore,
    ids: &mut PlayerIdentity,
    sink: &mut F,
) -> Result<Vec<RoundOutcome>, GameError>
where
    A: GuessProducer + ContinueDecider + ?Sized,
    F: FnMut(&SessionEvent),
{
    let mut outcomes = Vec::new();

    loop {
        outcomes.push(session.play_round(player, store, sink)?);

        if !player.play_again()? {
            break;
        }

        let continuation = player.continuation()?;
        match session.reset(continuation, ids) {
            Ok(()) => {}
            Err(GameError::PhrasePoolExhausted) => {
                sink(&SessionEvent::PoolExhausted);
                break;
            }
            Err(err) => return Err(err),
        }
    }

    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MastermindRules, WheelRules};
    use crate::core::{Code, SecretPhrase};
    use crate::players::{RandomCode, Scripted};
    use crate::session::PhrasePool;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    struct Answers(Vec<bool>, Continuation);

    impl ContinueDecider for Answers {
        fn play_again(&mut self) -> Result<bool, GameError> {
            Ok(if self.0.is_empty() {
                false
            } else {
                self.0.remove(0)
            })
        }

        fn continuation(&mut self) -> Result<Continuation, GameError> {
            Ok(self.1)
        }
    }

    #[test]
    fn until_exhausted_plays_every_phrase() {
        let mut pool = PhrasePool::new(
            ["ab", "cd", "ef"]
                .iter()
                .map(|t| SecretPhrase::new(*t).unwrap())
                .collect(),
        );
        let mut ids = PlayerIdentity::new();
        let mut store = RecordStore::new();
        let mut events = Vec::new();

        let player = ids.next();
        let mut session = Session::wheel(
            WheelRules::AUTOMATED,
            &mut pool,
            player,
            StdRng::seed_from_u64(1),
        )
        .unwrap();
        let mut driver = Player::new(
            Scripted::new(["a", "b", "c", "d", "e", "f"].repeat(3)),
            UntilExhausted,
        );

        let outcomes = play_all(
            &mut session,
            &mut driver,
            &mut store,
            &mut ids,
            &mut |event: &SessionEvent| events.push(event.clone()),
        )
        .unwrap();

        assert_eq!(outcomes.len(), 3);
        assert_eq!(store.len(), 3);
        assert!(store.records().iter().all(|r| r.player() == player));
        assert_eq!(events.last(), Some(&SessionEvent::PoolExhausted));
    }

    #[test]
    fn new_player_on_continue() {
        let mut ids = PlayerIdentity::new();
        let mut store = RecordStore::new();
        let mut session = Session::mastermind(
            MastermindRules::default(),
            ids.next(),
            StdRng::seed_from_u64(9),
        )
        .unwrap();

        // Random valid guesses always finish a round within the attempt budget
        let mut player = Player::new(
            RandomCode::new(StdRng::seed_from_u64(5)),
            Answers(vec![true, false], Continuation::NewPlayer),
        );

        let outcomes = play_all(
            &mut session,
            &mut player,
            &mut store,
            &mut ids,
            &mut |_: &SessionEvent| {},
        )
        .unwrap();

        assert_eq!(outcomes.len(), 2);
        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0].player().value(), 1);
        assert_eq!(store.records()[1].player().value(), 2);
    }

    #[test]
    fn fixed_rounds_keeps_the_player() {
        let mut ids = PlayerIdentity::new();
        let mut store = RecordStore::new();
        let player_id = ids.next();
        let mut session = Session::mastermind(
            MastermindRules::default(),
            player_id,
            StdRng::seed_from_u64(3),
        )
        .unwrap();
        let mut player = Player::new(
            RandomCode::new(StdRng::seed_from_u64(4)),
            FixedRounds::new(3),
        );

        let outcomes = play_all(
            &mut session,
            &mut player,
            &mut store,
            &mut ids,
            &mut |_: &SessionEvent| {},
        )
        .unwrap();

        assert_eq!(outcomes.len(), 3);
        assert!(store.records().iter().all(|r| r.player() == player_id));
        assert_eq!(ids.issued(), 1);
    }

    #[test]
    fn single_round_stops_after_one() {
        let mut ids = PlayerIdentity::new();
        let mut store = RecordStore::new();
        let mut session = Session::mastermind_with_secret(
            MastermindRules::default(),
            ids.next(),
            Code::parse("RGBY", 4).unwrap(),
            StdRng::seed_from_u64(9),
        )
        .unwrap();
        let mut player = Player::new(Scripted::new(["RGBY"]), SingleRound);

        let outcomes = play_all(
            &mut session,
            &mut player,
            &mut store,
            &mut ids,
            &mut |_: &SessionEvent| {},
        )
        .unwrap();

        assert_eq!(outcomes.len(), 1);
        assert!(outcomes[0].won);
        assert_eq!(outcomes[0].record.score(), 90);
    }
}
