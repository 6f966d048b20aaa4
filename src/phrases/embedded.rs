//! Embedded phrase list
//!
//! Phrases compiled into the binary at build time.

// Include generated phrase list from build script
include!(concat!(env!("OUT_DIR"), "/phrases.rs"));
