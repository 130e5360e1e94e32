//! Pitch Model: note spellings and pitch classes
//!
//! A fixed table maps every accepted note spelling to a pitch class 0-11.
//! Enharmonic pairs (C#/Db, ...) share a pitch class, and "H" is the
//! Germanic alias of "B". Pitch class 12 is reserved for the clef sentinel.
//!
//! The table order matters: when rendering can't decide between two
//! spellings it falls back to the first one listed here.

use lazy_static::lazy_static;
use std::collections::HashMap;

use super::symbols::CLEF_GLYPH;

/// Integer pitch class; 0 = C ... 11 = B, 12 = clef sentinel
pub type PitchClass = i32;

/// Pitch class of the clef sentinel ("no chord / key unset")
pub const CLEF: PitchClass = 12;

/// Spelling table in enumeration order
pub const NOTE_TABLE: [(&str, PitchClass); 19] = [
    ("C", 0),
    ("C#", 1),
    ("Db", 1),
    ("D", 2),
    ("D#", 3),
    ("Eb", 3),
    ("E", 4),
    ("F", 5),
    ("F#", 6),
    ("Gb", 6),
    ("G", 7),
    ("G#", 8),
    ("Ab", 8),
    ("A", 9),
    ("A#", 10),
    ("Bb", 10),
    ("B", 11),
    ("H", 11),
    (CLEF_GLYPH, CLEF),
];

lazy_static! {
    static ref SPELLING_INDEX: HashMap<&'static str, PitchClass> =
        NOTE_TABLE.iter().copied().collect();
}

/// Look up the pitch class of a spelling such as "C#" or "H"
pub fn pitch_class_of(spelling: &str) -> Option<PitchClass> {
    SPELLING_INDEX.get(spelling).copied()
}

/// All spellings of a pitch class, in table order
///
/// Returns two entries for enharmonic pairs and for 11 ("B", "H"),
/// one entry for naturals, none for values outside the table.
pub fn spellings_of(pitch_class: PitchClass) -> Vec<&'static str> {
    NOTE_TABLE
        .iter()
        .filter(|(_, pc)| *pc == pitch_class)
        .map(|(spelling, _)| *spelling)
        .collect()
}

/// Bring an arbitrary semitone value into 0-11
pub fn wrap12(n: i32) -> PitchClass {
    n.rem_euclid(12)
}
