//! Lead-sheet chord WASM API
//!
//! This module provides the JavaScript-facing API used by the song editor.
//!
//! # Module Structure
//!
//! - `helpers`: console logging macros, JS (de)serialization and error conversion
//! - `chords`: chord parsing, transposition, rendering and key editing

pub mod helpers;
pub mod chords;

pub use chords::{
    arrangement_key_js, edit_song_key_js, parse_chord_js, parse_chord_line_js, render_arrangement_js,
    render_chord_js, transpose_chord_js,
};
