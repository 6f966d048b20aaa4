//! Formatting utilities for terminal output

use crate::core::{Code, Color, Feedback};
use colored::{ColoredString, Colorize};

/// Color a single palette symbol with its own color
#[must_use]
pub fn paint_color(color: Color) -> ColoredString {
    let symbol = color.symbol().to_string();
    match color {
        Color::Red => symbol.red(),
        Color::Green => symbol.green(),
        Color::Blue => symbol.blue(),
        Color::Yellow => symbol.yellow(),
        Color::Orange => symbol.truecolor(255, 165, 0),
        Color::Purple => symbol.magenta(),
    }
    .bold()
}

/// Render a code with every symbol in its own color
#[must_use]
pub fn paint_code(code: &Code) -> String {
    code.colors()
        .iter()
        .map(|&c| paint_color(c).to_string())
        .collect()
}

/// Feedback as pegs: one `●` per exact match, one `○` per partial match
///
/// Partial matches may overlap exact ones, so the peg count can exceed the
/// code length.
#[must_use]
pub fn feedback_pegs(feedback: Feedback) -> String {
    let mut pegs = String::with_capacity((feedback.exact + feedback.partial) * 3);
    pegs.push_str(&"●".repeat(feedback.exact));
    pegs.push_str(&"○".repeat(feedback.partial));
    if pegs.is_empty() {
        pegs.push('-');
    }
    pegs
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Widest budget still drawn as hearts; larger ones are shown as "left/total"
const MAX_HEARTS: u32 = 20;

/// Budget left as hearts, e.g. "♥♥♥♡♡" for 3 of 5
#[must_use]
pub fn budget_hearts(left: u32, total: u32) -> String {
    if total > MAX_HEARTS || left > total {
        return format!("{left}/{total}");
    }
    let spent = total.saturating_sub(left) as usize;
    format!("{}{}", "♥".repeat(left as usize), "♡".repeat(spent))
}
