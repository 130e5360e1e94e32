//! Parsing module for lead-sheet text
//!
//! Turns typed chord tokens, chord rows and key names into values.

pub mod chord;
pub mod key;

// Re-export commonly used functions
pub use chord::{parse_chord, parse_chord_line};
pub use key::{parse_key, KeyName};
