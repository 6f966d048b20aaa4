//! Phrase list loading utilities
//!
//! Provides functions to load phrases from files or use the embedded list.

use crate::core::SecretPhrase;
use std::fs;
use std::io;
use std::path::Path;

/// Load phrases from a file, one per line
///
/// Blank lines and lines with characters other than ASCII letters and spaces are
/// skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use guessing_games::phrases::loader::load_from_file;
///
/// let phrases = load_from_file("phrases.txt").unwrap();
/// println!("Loaded {} phrases", phrases.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<SecretPhrase>> {
    let content = fs::read_to_string(path)?;
    Ok(phrases_from_lines(content.lines()))
}

/// Convert the embedded string slice to phrases
///
/// # Examples
/// ```
/// use guessing_games::phrases::loader::phrases_from_slice;
/// use guessing_games::phrases::PHRASES;
///
/// let phrases = phrases_from_slice(PHRASES);
/// assert_eq!(phrases.len(), PHRASES.len());
/// ```
#[must_use]
pub fn phrases_from_slice(slice: &[&str]) -> Vec<SecretPhrase> {
    phrases_from_lines(slice.iter().copied())
}

fn phrases_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<SecretPhrase> {
    lines
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                SecretPhrase::new(trimmed).ok()
            }
        })
        .collect()
}
