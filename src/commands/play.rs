//! Human games at the terminal

use super::Arcade;
use crate::core::GameError;
use crate::output::{EventPrinter, print_banner};
use crate::players::Prompter;
use crate::session::{RoundOutcome, Session, SessionEvent, play_all};
use std::io::{BufRead, Write};

/// Play Mastermind rounds until the player declines another game
///
/// # Errors
/// Returns `InputClosed` when input ends mid-game, or `Io` on terminal
/// failures.
pub fn run_mastermind<R: BufRead, W: Write>(
    arcade: &mut Arcade,
    prompter: &mut Prompter<R, W>,
) -> Result<Vec<RoundOutcome>, GameError> {
    let rules = arcade.config.mastermind;
    print_banner("MASTERMIND");
    println!(
        "Break the {}-color code in {} attempts{}.",
        rules.code_length,
        rules.max_attempts,
        if rules.allow_duplicates {
            " (colors may repeat)"
        } else {
            ""
        }
    );
    println!("● exact match   ○ right color, wrong position");

    let player = arcade.ids.next();
    let rng = arcade.child_rng();
    let mut session = Session::mastermind(rules, player, rng)?;

    let mut printer = EventPrinter::new();
    play_all(
        &mut session,
        prompter,
        &mut arcade.store,
        &mut arcade.ids,
        &mut |event: &SessionEvent| printer.show(event),
    )
}

/// Play Wheel of Fortune rounds from the run's shared phrase pool
///
/// Stops when the player declines another game or no phrase is left.
///
/// # Errors
/// Returns `InputClosed` when input ends mid-game, or `Io` on terminal
/// failures.
pub fn run_wheel<R: BufRead, W: Write>(
    arcade: &mut Arcade,
    prompter: &mut Prompter<R, W>,
) -> Result<Vec<RoundOutcome>, GameError> {
    let mut printer = EventPrinter::new();
    print_banner("WHEEL OF FORTUNE");

    // Checked up front so no player id is spent on a game that cannot start
    if arcade.pool.is_empty() {
        printer.show(&SessionEvent::PoolExhausted);
        return Ok(Vec::new());
    }
    println!(
        "Guess the phrase one letter at a time. {} phrases left.",
        arcade.pool.remaining()
    );

    let player = arcade.ids.next();
    let rng = arcade.child_rng();
    let mut session = Session::wheel(arcade.config.human_wheel, &mut arcade.pool, player, rng)?;

    play_all(
        &mut session,
        prompter,
        &mut arcade.store,
        &mut arcade.ids,
        &mut |event: &SessionEvent| printer.show(event),
    )
}
