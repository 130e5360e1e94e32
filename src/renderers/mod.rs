//! Renderers for displaying chords and arrangements

pub mod chord_text;

pub use chord_text::{
    render, render_arrangement, render_part, render_root, render_row, render_with_style, RenderedPart,
};
