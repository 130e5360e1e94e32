//! Key names as typed in the key editor ("D", "f#", "Ebm", "H")

use once_cell::sync::Lazy;
use regex::Regex;

use super::chord::normalize_letter;
use crate::error::ParseError;
use crate::models::note::{pitch_class_of, PitchClass};
use crate::models::symbols::{Accidental, PreferredSign};

static KEY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-hA-H])([#b])?(m)?$").expect("key pattern is a valid regex"));

/// A parsed key name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyName {
    /// Spelling as stored in the arrangement ("Eb", "F#", "B")
    pub spelling: String,
    pub pitch: PitchClass,
    /// Sign the user typed, used as the arrangement's preferred sign
    pub sign: PreferredSign,
    pub is_minor: bool,
}

pub fn parse_key(text: &str) -> Result<KeyName, ParseError> {
    let trimmed = text.trim();
    let caps = KEY_PATTERN
        .captures(trimmed)
        .ok_or_else(|| ParseError::UnknownKey(text.to_string()))?;

    let letter = normalize_letter(&caps[1]);
    let marker = caps.get(2).map_or("", |m| m.as_str());
    let spelling = format!("{}{}", letter, marker);
    let pitch = pitch_class_of(&spelling).ok_or_else(|| ParseError::UnknownKey(text.to_string()))?;

    let sign = match Accidental::from_marker(marker) {
        Accidental::Sharp => PreferredSign::Sharp,
        Accidental::Flat => PreferredSign::Flat,
        Accidental::None => PreferredSign::Natural,
    };

    Ok(KeyName {
        spelling,
        pitch,
        sign,
        is_minor: caps.get(3).is_some(),
    })
}
