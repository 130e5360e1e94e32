//! WASM API for chord parsing, transposition and rendering
//!
//! Chords cross the boundary as `ChordRecord` objects, arrangements as the
//! stored arrangement shape (`originalKey`, `preferredSign`, `transpose`,
//! `isMinor`, `parts`).

use wasm_bindgen::prelude::*;

use super::helpers::{context_from_js, deserialize, engine_error, serialize};
use crate::models::{Chord, ChordRecord, SignStyle, SongArrangement};
use crate::parse::{parse_chord, parse_chord_line};
use crate::renderers::{render_arrangement, render_with_style};
use crate::{wasm_info, wasm_log, wasm_warn};

/// Parse a chord token into a chord record
///
/// # Parameters
/// - `token`: chord text such as "C#m7/G"
/// - `arrangement_js`: optional arrangement; a positive `transpose` shifts
///   the parsed chord back to the original key
#[wasm_bindgen(js_name = parseChord)]
pub fn parse_chord_js(token: &str, arrangement_js: JsValue) -> Result<JsValue, JsValue> {
    wasm_log!("parseChord called: token='{}'", token);

    let context = context_from_js(arrangement_js)?;
    let chord = parse_chord(token, context.as_ref()).map_err(|e| {
        wasm_warn!("parseChord rejected '{}': {}", token, e);
        JsValue::from_str(&e.to_string())
    })?;

    serialize(&chord.serialize(), "Serialization error")
}

/// Parse a whitespace-separated row of chords
///
/// # Returns
/// JavaScript array of chord records
#[wasm_bindgen(js_name = parseChordLine)]
pub fn parse_chord_line_js(line: &str, arrangement_js: JsValue) -> Result<js_sys::Array, JsValue> {
    wasm_log!("parseChordLine called: line='{}'", line);

    let context = context_from_js(arrangement_js)?;
    let chords = parse_chord_line(line, context.as_ref()).map_err(|e| {
        wasm_warn!("parseChordLine rejected '{}': {}", line, e);
        JsValue::from_str(&e.to_string())
    })?;

    let result = js_sys::Array::new();
    for chord in chords {
        result.push(&serialize(&chord.serialize(), "Serialization error")?);
    }
    Ok(result)
}

/// Render a chord record for display under an arrangement
///
/// # Parameters
/// - `glyphs`: write `♯`/`♭` instead of `#`/`b`
#[wasm_bindgen(js_name = renderChord)]
pub fn render_chord_js(chord_js: JsValue, arrangement_js: JsValue, glyphs: bool) -> Result<String, JsValue> {
    let record: ChordRecord = deserialize(chord_js, "Invalid chord record")?;
    let context = context_from_js(arrangement_js)?.unwrap_or_default();
    let style = if glyphs { SignStyle::Glyph } else { SignStyle::Ascii };
    render_with_style(&Chord::deserialize(record), &context, style).map_err(engine_error)
}

/// Shift a chord record by `delta` semitones
#[wasm_bindgen(js_name = transposeChord)]
pub fn transpose_chord_js(chord_js: JsValue, delta: i32) -> Result<JsValue, JsValue> {
    let record: ChordRecord = deserialize(chord_js, "Invalid chord record")?;
    let chord = Chord::deserialize(record).transposed(delta);
    serialize(&chord.serialize(), "Serialization error")
}

/// Displayed key name of an arrangement, following its transpose
#[wasm_bindgen(js_name = arrangementKey)]
pub fn arrangement_key_js(arrangement_js: JsValue) -> Result<String, JsValue> {
    let context = context_from_js(arrangement_js)?.unwrap_or_default();
    context.key_name().map_err(engine_error)
}

/// Apply a key typed by the user to an arrangement
///
/// # Returns
/// The updated arrangement
#[wasm_bindgen(js_name = editSongKey)]
pub fn edit_song_key_js(arrangement_js: JsValue, new_key: &str) -> Result<JsValue, JsValue> {
    wasm_info!("editSongKey called: new_key='{}'", new_key);

    let mut arrangement: SongArrangement = deserialize(arrangement_js, "Invalid arrangement")?;
    arrangement.edit_key(new_key).map_err(engine_error)?;

    wasm_info!(
        "  key is now {} (original {}, transpose {})",
        arrangement.key_name().unwrap_or_default(),
        arrangement.context.original_key,
        arrangement.context.transpose
    );
    serialize(&arrangement, "Serialization error")
}

/// Render every part of an arrangement
///
/// # Returns
/// Array of `{ id, name, rows: string[][] }`
#[wasm_bindgen(js_name = renderArrangement)]
pub fn render_arrangement_js(arrangement_js: JsValue) -> Result<JsValue, JsValue> {
    let arrangement: SongArrangement = deserialize(arrangement_js, "Invalid arrangement")?;
    let parts = render_arrangement(&arrangement).map_err(engine_error)?;
    wasm_log!("renderArrangement: {} parts", parts.len());
    serialize(&parts, "Serialization error")
}
