//! Error types for chord parsing and rendering
//!
//! Defines the error hierarchy for the chord engine: user-facing parse
//! failures (ParseError) and internal errors that shouldn't occur in
//! normal operation.

use thiserror::Error;

/// Top-level chord engine error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChordError {
    /// The chord or key text could not be parsed
    #[error("{0}")]
    Parse(#[from] ParseError),

    /// Internal engine error (indicates a bug in the pitch tables)
    #[error("Internal chord engine error: {0}")]
    Internal(String),
}

/// Parse failures for chord tokens and key names
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Token does not match the chord grammar
    #[error("Found no match for chord: '{0}'")]
    NoMatch(String),

    /// Root letter and accidental do not name a known note (e.g. "Cb")
    #[error("Found no root note in {0}")]
    NoRootNote(String),

    /// Bass letter and accidental do not name a known note
    #[error("Found no bass note in {0}")]
    NoBassNote(String),

    /// Key name typed by the user is not a known note
    #[error("Unknown key: '{0}'")]
    UnknownKey(String),
}

impl ParseError {
    /// The offending input text
    pub fn input(&self) -> &str {
        match self {
            ParseError::NoMatch(s)
            | ParseError::NoRootNote(s)
            | ParseError::NoBassNote(s)
            | ParseError::UnknownKey(s) => s,
        }
    }
}
