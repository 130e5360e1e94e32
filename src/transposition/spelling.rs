//! Enharmonic spelling resolution for transposed pitches
//!
//! A stored chord only knows its pitch class. When it is displayed, the
//! arrangement's transpose is applied and the resulting pitch class is
//! spelled again:
//!
//! 1. 11 is always "B" (never "H", never a flat of C)
//! 2. naturals have a single spelling
//! 3. sharp/flat pairs are decided by the preferred sign, then by the
//!    destination key, then by table order (sharp first)
//!
//! Example:
//!   pitch 1, key Eb (3), transpose 0, no preferred sign → "Db"
//!   pitch 1, key F# (6), transpose 0, no preferred sign → "C#"
//!   pitch 1, key C  (0), transpose 0, no preferred sign → "C#"

use crate::error::ChordError;
use crate::models::arrangement::ArrangementContext;
use crate::models::note::{spellings_of, wrap12, PitchClass};
use crate::models::symbols::{Accidental, PreferredSign};

/// Destination keys written with flats
pub const FLAT_KEYS: [PitchClass; 2] = [3, 10];

/// Destination keys written with sharps
pub const SHARP_KEYS: [PitchClass; 3] = [1, 6, 8];

/// Apply the context transpose to a stored pitch and wrap into 0-11
pub fn effective_pitch(pitch: PitchClass, context: &ArrangementContext) -> PitchClass {
    wrap12(wrap12(pitch) + wrap12(context.transpose))
}

/// Spell a stored pitch for display under the given arrangement context
pub fn resolve_spelling(
    pitch: PitchClass,
    context: &ArrangementContext,
) -> Result<&'static str, ChordError> {
    let pitch_class = effective_pitch(pitch, context);

    if pitch_class == 11 {
        return Ok("B");
    }

    let candidates = spellings_of(pitch_class);
    match candidates.as_slice() {
        [] => Err(ChordError::Internal(format!(
            "no spelling for pitch class {} (stored {}, transpose {})",
            pitch_class, pitch, context.transpose
        ))),
        [only] => Ok(*only),
        pair => Ok(disambiguate(pair, context)),
    }
}

/// Choose between the two spellings of an enharmonic pair
fn disambiguate(candidates: &[&'static str], context: &ArrangementContext) -> &'static str {
    let find = |wanted: Accidental| {
        candidates
            .iter()
            .copied()
            .find(|c| Accidental::of_spelling(c) == wanted)
    };

    let by_sign = match context.preferred_sign {
        PreferredSign::Sharp => find(Accidental::Sharp),
        PreferredSign::Flat => find(Accidental::Flat),
        PreferredSign::Natural => None,
    };
    if let Some(spelling) = by_sign {
        return spelling;
    }

    let first = candidates[0];
    match key_bias(context) {
        Some(Accidental::Flat) => find(Accidental::Flat).unwrap_or(first),
        Some(Accidental::Sharp) => find(Accidental::Sharp).unwrap_or(first),
        _ => {
            log::debug!("no sign preference for {:?}, using '{}'", candidates, first);
            first
        }
    }
}

/// Accidental preferred by the destination key, if the key has a bias
///
/// The destination key is `originalKey + transpose` without wrapping, so
/// a key of A transposed up by 1 (10) prefers flats but the same key
/// reached as 10 - 12 does not. A sum outside `i32` has no bias.
pub fn key_bias(context: &ArrangementContext) -> Option<Accidental> {
    let new_key = context.original_key_pitch()?.checked_add(context.transpose)?;
    if FLAT_KEYS.contains(&new_key) {
        Some(Accidental::Flat)
    } else if SHARP_KEYS.contains(&new_key) {
        Some(Accidental::Sharp)
    } else {
        None
    }
}
