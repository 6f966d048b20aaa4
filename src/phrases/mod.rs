//! Phrase lists for Wheel of Fortune
//!
//! Provides the embedded default list and file loading.

mod embedded;
pub mod loader;

pub use embedded::{PHRASES, PHRASES_COUNT};
