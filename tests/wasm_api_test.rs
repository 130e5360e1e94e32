//! WASM API test
//!
//! Exercises the JavaScript-facing functions. Runs in a browser via
//! `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use chordsheet_wasm::api::*;
use chordsheet_wasm::models::ChordRecord;
use serde_json::json;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn to_js(value: &serde_json::Value) -> JsValue {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    serde::Serialize::serialize(value, &serializer).unwrap()
}

fn arrangement(key: &str, transpose: i32, sign: &str) -> JsValue {
    to_js(&json!({
        "originalKey": key,
        "preferredSign": sign,
        "transpose": transpose,
        "isMinor": false,
        "parts": []
    }))
}

#[wasm_bindgen_test]
fn test_parse_chord_returns_record() {
    let record = parse_chord_js("C#m7/G", JsValue::UNDEFINED).unwrap();
    let record: ChordRecord = serde_wasm_bindgen::from_value(record).unwrap();
    assert_eq!(record.root_int, 1);
    assert_eq!(record.bass_int, 7);
    assert!(record.is_minor);
    assert_eq!(record.modifiers, "7");
}

#[wasm_bindgen_test]
fn test_parse_chord_rejects_garbage() {
    let err = parse_chord_js("Z", JsValue::NULL).unwrap_err();
    assert_eq!(err.as_string().unwrap(), "Found no match for chord: 'Z'");
}

#[wasm_bindgen_test]
fn test_render_chord_with_arrangement() {
    let record = parse_chord_js("Db", JsValue::UNDEFINED).unwrap();
    let text = render_chord_js(record, arrangement("C", 0, "sharp"), false).unwrap();
    assert_eq!(text, "C#");
}

#[wasm_bindgen_test]
fn test_render_chord_with_glyphs() {
    let record = parse_chord_js("Bbm7/F#", JsValue::UNDEFINED).unwrap();
    let text = render_chord_js(record, arrangement("C", 0, "natural"), true).unwrap();
    assert_eq!(text, "A♯m7/F♯");
}

#[wasm_bindgen_test]
fn test_transpose_chord() {
    let record = parse_chord_js("G/B", JsValue::UNDEFINED).unwrap();
    let moved = transpose_chord_js(record, 2).unwrap();
    let text = render_chord_js(moved, arrangement("C", 0, "natural"), false).unwrap();
    assert_eq!(text, "A/C#");
}

#[wasm_bindgen_test]
fn test_parse_chord_line_returns_array() {
    let rows = parse_chord_line_js("C G Am F", arrangement("C", 0, "natural")).unwrap();
    assert_eq!(rows.length(), 4);
}

#[wasm_bindgen_test]
fn test_edit_song_key_and_key_name() {
    let updated = edit_song_key_js(arrangement("Eb", 0, "natural"), "F").unwrap();
    assert_eq!(arrangement_key_js(updated).unwrap(), "F");
}

#[wasm_bindgen_test]
fn test_render_arrangement() {
    let value = to_js(&json!({
        "originalKey": "G",
        "preferredSign": "natural",
        "transpose": 2,
        "isMinor": false,
        "parts": [{
            "id": "p1",
            "name": "Verse",
            "chords": [[{"rootInt": 7, "rootNote": "G", "bassInt": 11, "bassNote": "B"}]]
        }]
    }));
    let parts = render_arrangement_js(value).unwrap();
    let parts: serde_json::Value = serde_wasm_bindgen::from_value(parts).unwrap();
    assert_eq!(parts[0]["rows"][0][0], "A/C#");
}
