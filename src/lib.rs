//! Lead-sheet Chord WASM Module
//!
//! Parses chord symbols such as "C#m7/G", transposes them and renders them
//! back with sharp/flat spelling chosen from the song's key context.

pub mod error;
pub mod models;
pub mod parse;
pub mod renderers;
pub mod transposition;
pub mod api;

// Re-export commonly used types
pub use error::{ChordError, ParseError};
pub use models::*;
pub use parse::{parse_chord, parse_chord_line, parse_key};
pub use renderers::{render, render_with_style};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if console_log::init_with_level(log::Level::Debug).is_err() {
            log::warn!("logger was already initialized");
        }
    }

    log::info!("Lead-sheet chord WASM module initialized");
}
