//! Automated play
//!
//! Each letter strategy plays Wheel of Fortune as a new player against a full
//! phrase list until every phrase has been used. Code breakers play a fixed
//! number of Mastermind rounds.

use super::Arcade;
use crate::core::{GameError, GameRecord, PlayerId};
use crate::output::EventPrinter;
use crate::players::{CodeBreaker, LetterStrategy};
use crate::session::{
    FixedRounds, Player, RoundOutcome, Session, SessionEvent, UntilExhausted, play_all,
};
use indicatif::{ProgressBar, ProgressStyle};

/// Strategy names played by a tournament, in order
pub const STRATEGIES: [&str; 3] = ["random", "vowel", "common"];

/// Mastermind code breaker names
pub const CODE_BREAKERS: [&str; 2] = ["random", "consistent"];

/// How one automated player did
#[derive(Debug, Clone, PartialEq)]
pub struct TournamentEntry {
    pub name: &'static str,
    pub player: PlayerId,
    pub rounds: usize,
    pub wins: usize,
    /// `None` if the player finished no round
    pub average: Option<f64>,
    pub best: Vec<GameRecord>,
}

/// Let one letter strategy play every phrase once as a new player
///
/// # Errors
/// Returns `InvalidConfig` for invalid automated rules, or
/// `NoGuessAvailable` if the strategy runs out of letters mid-round.
pub fn play_strategy<F>(
    arcade: &mut Arcade,
    name: &str,
    sink: &mut F,
) -> Result<TournamentEntry, GameError>
where
    F: FnMut(&SessionEvent),
{
    let mut pool = arcade.fresh_pool();
    let strategy = LetterStrategy::from_name(name, arcade.child_rng());
    let rng = arcade.child_rng();
    let player = arcade.ids.next();
    tracing::info!(
        strategy = strategy.name(),
        player = player.value(),
        "automated player started"
    );

    let mut session = Session::wheel(arcade.config.automated_wheel, &mut pool, player, rng)?;
    let mut automated = Player::new(strategy, UntilExhausted);
    let outcomes = play_all(
        &mut session,
        &mut automated,
        &mut arcade.store,
        &mut arcade.ids,
        sink,
    )?;

    Ok(summarize(arcade, automated.producer.name(), player, &outcomes))
}

/// Let one code breaker play `rounds` Mastermind rounds as a new player
///
/// # Errors
/// Returns `InvalidConfig` for invalid Mastermind rules.
pub fn play_code_breaker<F>(
    arcade: &mut Arcade,
    name: &str,
    rounds: u32,
    sink: &mut F,
) -> Result<TournamentEntry, GameError>
where
    F: FnMut(&SessionEvent),
{
    let breaker = CodeBreaker::from_name(name, arcade.child_rng());
    let rng = arcade.child_rng();
    let player = arcade.ids.next();
    tracing::info!(
        strategy = breaker.name(),
        player = player.value(),
        rounds,
        "code breaker started"
    );

    let mut session = Session::mastermind(arcade.config.mastermind, player, rng)?;
    let mut automated = Player::new(breaker, FixedRounds::new(rounds));
    let outcomes = play_all(
        &mut session,
        &mut automated,
        &mut arcade.store,
        &mut arcade.ids,
        sink,
    )?;

    Ok(summarize(arcade, automated.producer.name(), player, &outcomes))
}

fn summarize(
    arcade: &Arcade,
    name: &'static str,
    player: PlayerId,
    outcomes: &[RoundOutcome],
) -> TournamentEntry {
    TournamentEntry {
        name,
        player,
        rounds: outcomes.len(),
        wins: outcomes.iter().filter(|outcome| outcome.won).count(),
        average: arcade.store.player_average(player).ok(),
        best: arcade.store.top_n_for_player(player, arcade.config.top_n),
    }
}

/// Play every strategy in [`STRATEGIES`] with a progress bar over all rounds
///
/// # Errors
/// Returns an error if the progress bar template is invalid or a strategy
/// fails to play.
pub fn run_tournament(arcade: &mut Arcade) -> anyhow::Result<Vec<TournamentEntry>> {
    let rounds_per_player = arcade.fresh_pool().remaining();
    println!(
        "🎯 {} strategies x {} phrases...",
        STRATEGIES.len(),
        rounds_per_player
    );

    let pb = ProgressBar::new((STRATEGIES.len() * rounds_per_player) as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );

    let mut printer = EventPrinter::quiet();
    let mut entries = Vec::with_capacity(STRATEGIES.len());
    for name in STRATEGIES {
        pb.set_message(name);
        let mut sink = |event: &SessionEvent| {
            if matches!(event, SessionEvent::Recorded(_)) {
                pb.inc(1);
            }
            // Quiet printer ignores round details; exhaustion is expected here
            if !matches!(event, SessionEvent::PoolExhausted) {
                printer.show(event);
            }
        };
        entries.push(play_strategy(arcade, name, &mut sink)?);
    }
    pb.finish_with_message("Complete!");

    Ok(entries)
}
