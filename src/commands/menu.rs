//! Interactive main menu
//!
//! Loops over the games until the player quits or input ends. Every game
//! started here shares the arcade's records and player ids.

use super::{
    Arcade, CODE_BREAKERS, STRATEGIES, play_code_breaker, play_strategy, run_mastermind,
    run_tournament, run_wheel, show_report,
};
use crate::core::GameError;
use crate::output::{EventPrinter, print_tournament};
use crate::players::Prompter;
use crate::session::SessionEvent;
use colored::Colorize;
use std::io::{BufRead, Write};

/// What the player picked from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Mastermind,
    AutomatedMastermind,
    Wheel,
    AutomatedWheel,
    Tournament,
    Report,
    Quit,
}

impl MenuChoice {
    /// Parse a menu answer by number or name
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "1" | "mastermind" | "m" => Some(Self::Mastermind),
            "2" | "breaker" | "b" => Some(Self::AutomatedMastermind),
            "3" | "wheel" | "w" => Some(Self::Wheel),
            "4" | "auto" | "a" => Some(Self::AutomatedWheel),
            "5" | "tournament" | "t" => Some(Self::Tournament),
            "6" | "report" | "r" => Some(Self::Report),
            "7" | "quit" | "q" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

fn print_menu() {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                       Guessing Games                         ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("  1) Mastermind");
    println!("  2) Mastermind (automated code breaker)");
    println!("  3) Wheel of Fortune");
    println!("  4) Wheel of Fortune (automated player)");
    println!("  5) Tournament of automated players");
    println!("  6) Score report");
    println!("  7) Quit\n");
}

/// Run the menu loop
///
/// End of input is treated like choosing Quit.
///
/// # Errors
/// Returns terminal I/O errors and failures of the chosen game.
pub fn run_menu<R: BufRead, W: Write>(
    arcade: &mut Arcade,
    prompter: &mut Prompter<R, W>,
) -> anyhow::Result<()> {
    loop {
        print_menu();
        let answer = match prompter.ask("Choose") {
            Ok(answer) => answer,
            Err(GameError::InputClosed) => break,
            Err(err) => return Err(err.into()),
        };

        let Some(choice) = MenuChoice::parse(&answer) else {
            println!("{}", "❌ Pick a number from 1 to 7".red());
            continue;
        };

        let played = match choice {
            MenuChoice::Mastermind => run_mastermind(arcade, prompter).map(drop),
            MenuChoice::AutomatedMastermind => code_breaker(arcade, prompter),
            MenuChoice::Wheel => run_wheel(arcade, prompter).map(drop),
            MenuChoice::AutomatedWheel => automated(arcade, prompter),
            MenuChoice::Tournament => {
                let entries = run_tournament(arcade)?;
                print_tournament(&entries);
                Ok(())
            }
            MenuChoice::Report => {
                show_report(arcade);
                Ok(())
            }
            MenuChoice::Quit => break,
        };

        match played {
            Ok(()) => {}
            Err(GameError::InputClosed) => break,
            Err(err) => return Err(err.into()),
        }
    }

    println!("\n👋 Thanks for playing!\n");
    show_report(arcade);
    Ok(())
}

fn code_breaker<R: BufRead, W: Write>(
    arcade: &mut Arcade,
    prompter: &mut Prompter<R, W>,
) -> Result<(), GameError> {
    let name = prompter.ask(&format!("Code breaker ({})", CODE_BREAKERS.join("/")))?;
    let rounds = loop {
        match prompter.ask("Rounds to play")?.parse::<u32>() {
            Ok(rounds) if rounds > 0 => break rounds,
            _ => println!("{}", "❌ Enter a positive number".red()),
        }
    };

    let mut printer = EventPrinter::new();
    let entry = play_code_breaker(
        arcade,
        &name.to_lowercase(),
        rounds,
        &mut |event: &SessionEvent| printer.show(event),
    )?;
    print_tournament(std::slice::from_ref(&entry));
    Ok(())
}

fn automated<R: BufRead, W: Write>(
    arcade: &mut Arcade,
    prompter: &mut Prompter<R, W>,
) -> Result<(), GameError> {
    let name = prompter.ask(&format!("Strategy ({})", STRATEGIES.join("/")))?;
    let mut printer = EventPrinter::new();
    let entry = play_strategy(arcade, &name.to_lowercase(), &mut |event: &SessionEvent| {
        printer.show(event);
    })?;
    print_tournament(std::slice::from_ref(&entry));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::phrases::{PHRASES, loader::phrases_from_slice};
    use std::io::Cursor;

    fn arcade() -> Arcade {
        let config = GameConfig {
            seed: Some(5),
            ..GameConfig::default()
        };
        Arcade::new(config, phrases_from_slice(PHRASES)).unwrap()
    }

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn parse_choices() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Mastermind));
        assert_eq!(MenuChoice::parse(" Wheel "), Some(MenuChoice::Wheel));
        assert_eq!(MenuChoice::parse("2"), Some(MenuChoice::AutomatedMastermind));
        assert_eq!(MenuChoice::parse("q"), Some(MenuChoice::Quit));
        assert_eq!(MenuChoice::parse("9"), None);
    }

    #[test]
    fn quits_on_end_of_input() {
        let mut arcade = arcade();
        run_menu(&mut arcade, &mut prompter("nonsense\n")).unwrap();
        assert!(arcade.store.is_empty());
    }

    #[test]
    fn code_breaker_from_menu() {
        let mut arcade = arcade();
        run_menu(&mut arcade, &mut prompter("2\nconsistent\nzero\n0\n2\n7\n")).unwrap();

        assert_eq!(arcade.ids.issued(), 1);
        assert_eq!(arcade.store.len(), 2);
    }

    #[test]
    fn automated_player_shares_records_and_ids() {
        let mut arcade = arcade();
        run_menu(&mut arcade, &mut prompter("4\nvowel\n4\ncommon\n7\n")).unwrap();

        assert_eq!(arcade.ids.issued(), 2);
        assert_eq!(arcade.store.len(), PHRASES.len() * 2);
        assert_eq!(arcade.store.players().len(), 2);
    }
}
