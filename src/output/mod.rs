//! Terminal output formatting
//!
//! Renders session events, score reports and tournament results.

pub mod display;
pub mod formatters;

pub use display::{EventPrinter, print_banner, print_report, print_tournament};
