//! Chord token parser
//!
//! Grammar, matched against the whole (trimmed) token:
//!
//! ```text
//! chord     := clef | root accidental? 'm'? modifiers ('/' bass accidental?)?
//! root/bass := a-h or A-H   ("h" is the Germanic name of b)
//! accidental:= '#' | 'b'
//! modifiers := run of + - 0-9 # b ( ) maj sus add dim aug alt
//! ```
//!
//! Only the note letters are case-insensitive. A leading `m` is read as the
//! minor marker unless the rest only parses with it as part of `maj`, so
//! "Cm7" is minor and "Cmaj7" is major with modifiers "maj7".

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ParseError;
use crate::models::arrangement::ArrangementContext;
use crate::models::chord::Chord;
use crate::models::note::pitch_class_of;
use crate::models::symbols::is_clef;

static CHORD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^([a-hA-H])([#b])?(m)?((?:maj|sus|add|dim|aug|alt|[+\-0-9#b()])*)(?:/([a-hA-H])([#b])?)?$",
    )
    .expect("chord pattern is a valid regex")
});

/// Upper-case a note letter and fold "H" into "B"
pub(crate) fn normalize_letter(letter: &str) -> String {
    let upper = letter.to_uppercase();
    if upper == "H" {
        "B".to_string()
    } else {
        upper
    }
}

/// Parse a chord token such as "C#m7/G#"
///
/// When a context with a positive transpose is given, the chord is assumed
/// to be typed in the transposed key and is shifted back so that every
/// stored chord is relative to the arrangement's original key.
pub fn parse_chord(token: &str, context: Option<&ArrangementContext>) -> Result<Chord, ParseError> {
    let text = token.trim();

    if is_clef(text) {
        return Ok(Chord::no_chord());
    }

    let caps = CHORD_PATTERN
        .captures(text)
        .ok_or_else(|| ParseError::NoMatch(token.to_string()))?;

    let group = |i: usize| caps.get(i).map_or("", |m| m.as_str());

    let root_note = normalize_letter(group(1));
    let root_note_sign = group(2).to_string();
    let root_pitch = pitch_class_of(&format!("{}{}", root_note, root_note_sign))
        .ok_or_else(|| ParseError::NoRootNote(token.to_string()))?;

    let mut chord = Chord {
        root_pitch: Some(root_pitch),
        root_note,
        root_note_sign,
        is_minor: caps.get(3).is_some(),
        modifiers: group(4).to_string(),
        ..Default::default()
    };

    if caps.get(5).is_some() {
        let bass_note = normalize_letter(group(5));
        let bass_note_sign = group(6).to_string();
        let bass_pitch = pitch_class_of(&format!("{}{}", bass_note, bass_note_sign))
            .ok_or_else(|| ParseError::NoBassNote(token.to_string()))?;
        chord.bass_pitch = Some(bass_pitch);
        chord.bass_note = bass_note;
        chord.bass_note_sign = bass_note_sign;
    }

    if let Some(ctx) = context {
        if ctx.transpose > 0 {
            log::warn!(
                "chord '{}' typed in a song transposed by {}, shifting it back",
                text,
                ctx.transpose
            );
            chord.transpose_by(-ctx.transpose);
        }
    }

    log::debug!("parsed '{}' as {:?}", text, chord);
    Ok(chord)
}

/// Parse a whitespace-separated row of chord tokens
pub fn parse_chord_line(
    line: &str,
    context: Option<&ArrangementContext>,
) -> Result<Vec<Chord>, ParseError> {
    line.split_whitespace()
        .map(|token| parse_chord(token, context))
        .collect()
}
