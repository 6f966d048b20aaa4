//! Display functions for game events and reports

use super::formatters::{budget_hearts, create_progress_bar, feedback_pegs, paint_code};
use crate::commands::TournamentEntry;
use crate::records::Report;
use crate::session::SessionEvent;
use colored::Colorize;

/// Print a section heading between two rules
pub fn print_banner(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

/// Prints session events as they happen
///
/// Remembers the budget announced at round start so later events can show
/// how much of it is left.
#[derive(Debug, Default)]
pub struct EventPrinter {
    budget: u32,
    quiet: bool,
}

impl EventPrinter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            budget: 0,
            quiet: false,
        }
    }

    /// Printer that only reports round results, for automated play
    #[must_use]
    pub const fn quiet() -> Self {
        Self {
            budget: 0,
            quiet: true,
        }
    }

    pub fn show(&mut self, event: &SessionEvent) {
        match event {
            SessionEvent::RoundStarted {
                player,
                round,
                masked,
                budget,
            } => {
                self.budget = *budget;
                if self.quiet {
                    return;
                }
                println!("\n{}", "─".repeat(60).cyan());
                println!(
                    "Player {} - round {}",
                    player.to_string().bright_yellow().bold(),
                    round
                );
                match masked {
                    Some(masked) => {
                        println!("Phrase: {}", masked.bright_white().bold());
                        println!("Wrong answers allowed: {budget}");
                    }
                    None => println!("Attempts: {budget}"),
                }
                println!("{}", "─".repeat(60).cyan());
            }
            SessionEvent::GuessRejected { guess, reason } => {
                if !self.quiet {
                    println!("{} {guess:?}: {reason}", "✗ Rejected".red());
                }
            }
            SessionEvent::CodeFeedback {
                guess,
                feedback,
                attempts_left,
            } => {
                if !self.quiet {
                    println!(
                        "  {}  {:<10} {} ({} attempts left)",
                        paint_code(guess),
                        feedback_pegs(*feedback),
                        feedback.to_string().bright_black(),
                        attempts_left
                    );
                }
            }
            SessionEvent::LetterRevealed {
                letter,
                hit,
                buffer,
                wrong_answers_left,
            } => {
                if self.quiet {
                    return;
                }
                let verdict = if *hit {
                    format!("'{letter}' is in the phrase").green()
                } else {
                    format!("'{letter}' is not in the phrase").red()
                };
                println!(
                    "  {verdict}  {}  {}",
                    buffer.bright_white().bold(),
                    budget_hearts(*wrong_answers_left, self.budget).red()
                );
            }
            SessionEvent::Won { score, secret } => {
                if self.quiet {
                    return;
                }
                println!(
                    "\n{}",
                    format!("✅ Solved \"{secret}\" for {score} points!")
                        .green()
                        .bold()
                );
            }
            SessionEvent::Lost { secret } => {
                if self.quiet {
                    return;
                }
                println!(
                    "\n{}",
                    format!("❌ Out of guesses. The answer was \"{secret}\"")
                        .red()
                        .bold()
                );
            }
            SessionEvent::Recorded(record) => {
                if !self.quiet {
                    println!("   {}", record.to_string().bright_black());
                }
            }
            SessionEvent::PoolExhausted => {
                println!("\n{}", "No phrases left to play.".yellow());
            }
        }
    }
}

fn print_average(label: &str, average: f64, max: f64) {
    println!(
        "   {label:<18}[{}] {}",
        create_progress_bar(average, max, 30).green(),
        format!("{average:.2}").bright_yellow()
    );
}

/// Print the score report
pub fn print_report(report: &Report) {
    print_banner("SCORE REPORT");

    let Some(average) = report.average else {
        println!("\nNo games have been played yet.");
        return;
    };

    // Bars are scaled to the best score of the run
    let max = report
        .top
        .first()
        .map_or(0.0, |record| f64::from(record.score()));

    println!("\n📊 {}", "Overall:".bright_cyan().bold());
    println!("   Games played:     {}", report.total_games);
    print_average("Average score:", average, max);

    println!(
        "\n🏆 {}",
        format!("Top {} games:", report.top.len())
            .bright_cyan()
            .bold()
    );
    for (rank, record) in report.top.iter().enumerate() {
        println!("   {}. {record}", rank + 1);
    }

    println!("\n👤 {}", "Per player:".bright_cyan().bold());
    for summary in &report.players {
        println!(
            "   Player {} ({} games)",
            summary.player.to_string().bright_yellow().bold(),
            summary.games
        );
        print_average("  Average:", summary.average, max);
        let best: Vec<String> = summary
            .best
            .iter()
            .map(|record| record.score().to_string())
            .collect();
        println!("     Best scores:     {}", best.join(", "));
    }
}

/// Print one line per automated strategy after a tournament
pub fn print_tournament(entries: &[TournamentEntry]) {
    print_banner("TOURNAMENT RESULTS");

    for entry in entries {
        let average = entry
            .average
            .map_or_else(|| "n/a".to_string(), |avg| format!("{avg:.2}"));
        println!(
            "\n   {:<16} player {}",
            entry.name.bright_white().bold(),
            entry.player.to_string().bright_yellow()
        );
        println!(
            "     Rounds: {:3}   Wins: {:3}   Average: {}",
            entry.rounds,
            entry.wins.to_string().green(),
            average.bright_yellow()
        );
        let best: Vec<String> = entry
            .best
            .iter()
            .map(|record| record.score().to_string())
            .collect();
        println!("     Best scores: {}", best.join(", "));
    }
}
