//! Command implementations
//!
//! Every command works on one [`Arcade`]: the record store, the player id
//! allocator and the phrase pool live for the whole run and are shared by
//! every game started from it.

pub mod menu;
pub mod play;
pub mod tournament;

pub use menu::run_menu;
pub use play::{run_mastermind, run_wheel};
pub use tournament::{
    CODE_BREAKERS, STRATEGIES, TournamentEntry, play_code_breaker, play_strategy, run_tournament,
};

use crate::config::GameConfig;
use crate::core::{GameError, PlayerIdentity, SecretPhrase};
use crate::output::print_report;
use crate::records::{RecordStore, Report};
use crate::session::PhrasePool;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Run-wide state shared by every game
pub struct Arcade {
    pub config: GameConfig,
    pub store: RecordStore,
    pub ids: PlayerIdentity,
    phrases: Vec<SecretPhrase>,
    /// Pool for human Wheel of Fortune games; phrases are not repeated in a run
    pool: PhrasePool,
    rng: StdRng,
}

impl Arcade {
    /// # Errors
    /// Returns `InvalidConfig` if the rules fail validation or `phrases` is
    /// empty.
    pub fn new(config: GameConfig, phrases: Vec<SecretPhrase>) -> Result<Self, GameError> {
        config.validate()?;
        if phrases.is_empty() {
            return Err(GameError::InvalidConfig(
                "phrase list has no usable phrases".to_string(),
            ));
        }

        let rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        tracing::debug!(phrases = phrases.len(), seed = ?config.seed, "arcade ready");

        Ok(Self {
            config,
            store: RecordStore::new(),
            ids: PlayerIdentity::new(),
            pool: PhrasePool::new(phrases.clone()),
            phrases,
            rng,
        })
    }

    /// Independent generator for one session or strategy
    ///
    /// Derived from the run generator, so a fixed seed replays the whole run.
    pub fn child_rng(&mut self) -> StdRng {
        StdRng::from_rng(&mut self.rng)
    }

    /// A full pool of every loaded phrase
    #[must_use]
    pub fn fresh_pool(&self) -> PhrasePool {
        PhrasePool::new(self.phrases.clone())
    }

    /// Phrases left for human Wheel of Fortune games
    #[must_use]
    pub fn phrases_left(&self) -> usize {
        self.pool.remaining()
    }

    #[must_use]
    pub fn report(&self) -> Report {
        Report::build(&self.store, self.config.top_n)
    }
}

/// Print the aggregate score report of the run
pub fn show_report(arcade: &Arcade) {
    print_report(&arcade.report());
}
