//! Chord value and its storage record
//!
//! A `Chord` holds the pitch classes of its root and optional bass note
//! together with the spelling as typed. Spellings are kept for reference
//! only: after a transpose they go stale and rendering always spells the
//! pitch again from the arrangement context.
//!
//! On the wire a chord is a flat `ChordRecord` with the field names the
//! song store has always used (`rootInt`, `rootNote`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::arrangement::ArrangementContext;
use super::note::{wrap12, PitchClass};
use super::symbols::{is_clef, Accidental, SignStyle, CLEF_GLYPH};
use crate::error::{ChordError, ParseError};

fn shift_pitch(pitch: PitchClass, delta: i32) -> PitchClass {
    pitch
        .checked_add(delta)
        .unwrap_or_else(|| wrap12(pitch) + wrap12(delta))
}

/// Pitch value stored for an absent root or bass note
pub const ABSENT_PITCH: i32 = -1;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "ChordRecord", into = "ChordRecord")]
pub struct Chord {
    /// Root pitch class; may leave 0-11 after `transpose_by`
    pub root_pitch: Option<PitchClass>,
    /// Root letter as typed, upper case ("H" is stored as "B")
    pub root_note: String,
    /// "#", "b" or ""
    pub root_note_sign: String,
    pub bass_pitch: Option<PitchClass>,
    pub bass_note: String,
    pub bass_note_sign: String,
    pub is_minor: bool,
    /// Everything after the quality marker, verbatim ("7", "maj7", "sus4", "+")
    pub modifiers: String,
}

impl Chord {
    /// The "no chord" placeholder shown as a clef
    pub fn no_chord() -> Self {
        Self {
            root_note: CLEF_GLYPH.to_string(),
            ..Default::default()
        }
    }

    pub fn is_no_chord(&self) -> bool {
        is_clef(&self.root_note)
    }

    pub fn has_bass(&self) -> bool {
        self.bass_pitch.is_some()
    }

    pub fn root_accidental(&self) -> Accidental {
        Accidental::from_marker(&self.root_note_sign)
    }

    pub fn bass_accidental(&self) -> Accidental {
        Accidental::from_marker(&self.bass_note_sign)
    }

    /// Parse a chord token, see [`crate::parse::parse_chord`]
    pub fn parse(token: &str, context: Option<&ArrangementContext>) -> Result<Chord, ParseError> {
        crate::parse::parse_chord(token, context)
    }

    /// Shift root and bass pitch by `delta` semitones in place
    ///
    /// Spellings are left untouched and no wrapping happens here; the
    /// renderer wraps once after adding the context transpose. A sum that
    /// would overflow `i32` is reduced to the same pitch class instead.
    /// The clef placeholder is never transposed.
    pub fn transpose_by(&mut self, delta: i32) -> &mut Self {
        if self.is_no_chord() {
            return self;
        }
        if let Some(root) = self.root_pitch.as_mut() {
            *root = shift_pitch(*root, delta);
        }
        if let Some(bass) = self.bass_pitch.as_mut() {
            *bass = shift_pitch(*bass, delta);
        }
        self
    }

    /// Copy of this chord shifted by `delta` semitones
    pub fn transposed(&self, delta: i32) -> Chord {
        let mut chord = self.clone();
        chord.transpose_by(delta);
        chord
    }

    /// Display text under the given arrangement context
    pub fn render(&self, context: &ArrangementContext) -> Result<String, ChordError> {
        crate::renderers::render(self, context)
    }

    pub fn render_with_style(
        &self,
        context: &ArrangementContext,
        style: SignStyle,
    ) -> Result<String, ChordError> {
        crate::renderers::render_with_style(self, context, style)
    }

    /// Storage record for this chord
    pub fn serialize(&self) -> ChordRecord {
        ChordRecord::from(self.clone())
    }

    /// Rebuild a chord from a storage record, copying fields as they are
    pub fn deserialize(record: ChordRecord) -> Chord {
        Chord::from(record)
    }
}

impl FromStr for Chord {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse_chord(s, None)
    }
}

/// Typed form, independent of any arrangement ("C#m7/G#")
impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_no_chord() {
            return write!(f, "{}", CLEF_GLYPH);
        }
        write!(
            f,
            "{}{}{}{}",
            self.root_note,
            self.root_note_sign,
            if self.is_minor { "m" } else { "" },
            self.modifiers
        )?;
        if self.has_bass() {
            write!(f, "/{}{}", self.bass_note, self.bass_note_sign)?;
        }
        Ok(())
    }
}

/// Flat storage shape of a chord
///
/// Absent pitches are stored as `-1`. Present pitches are stored in 0-11,
/// which renders identically to any unwrapped value the chord carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChordRecord {
    pub root_int: i32,
    pub root_note: String,
    pub root_note_sign: String,
    pub bass_int: i32,
    pub bass_note: String,
    pub bass_note_sign: String,
    pub is_minor: bool,
    pub modifiers: String,
}

impl Default for ChordRecord {
    fn default() -> Self {
        Self {
            root_int: ABSENT_PITCH,
            root_note: String::new(),
            root_note_sign: String::new(),
            bass_int: ABSENT_PITCH,
            bass_note: String::new(),
            bass_note_sign: String::new(),
            is_minor: false,
            modifiers: String::new(),
        }
    }
}

fn pitch_to_int(pitch: Option<PitchClass>) -> i32 {
    pitch.map(wrap12).unwrap_or(ABSENT_PITCH)
}

fn int_to_pitch(value: i32) -> Option<PitchClass> {
    if value == ABSENT_PITCH {
        None
    } else {
        Some(value)
    }
}

impl From<Chord> for ChordRecord {
    fn from(chord: Chord) -> Self {
        Self {
            root_int: pitch_to_int(chord.root_pitch),
            root_note: chord.root_note,
            root_note_sign: chord.root_note_sign,
            bass_int: pitch_to_int(chord.bass_pitch),
            bass_note: chord.bass_note,
            bass_note_sign: chord.bass_note_sign,
            is_minor: chord.is_minor,
            modifiers: chord.modifiers,
        }
    }
}

impl From<ChordRecord> for Chord {
    fn from(record: ChordRecord) -> Self {
        Self {
            root_pitch: int_to_pitch(record.root_int),
            root_note: record.root_note,
            root_note_sign: record.root_note_sign,
            bass_pitch: int_to_pitch(record.bass_int),
            bass_note: record.bass_note,
            bass_note_sign: record.bass_note_sign,
            is_minor: record.is_minor,
            modifiers: record.modifiers,
        }
    }
}
