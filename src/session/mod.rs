//! Game sessions
//!
//! The round state machine, the multi-round driver, the shared phrase pool,
//! and the events a renderer consumes.

mod driver;
mod engine;
mod events;
mod pool;
mod round;

pub use driver::{
    ContinueDecider, FixedRounds, Player, SingleRound, UntilExhausted, play_all,
};
pub use engine::{
    Continuation, GuessContext, POINTS_PER_REMAINING, RoundOutcome, RoundState, Session,
    TurnReport,
};
pub use events::SessionEvent;
pub use pool::PhrasePool;
pub use round::{Evaluation, RoundView};
