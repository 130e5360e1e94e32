//! Chord text renderer
//!
//! Renders stored chords for display: the arrangement's transpose is
//! applied, every pitch is spelled again (see `transposition::spelling`)
//! and the parts are concatenated as
//! `root + "m"? + modifiers + ("/" + bass)?`.

use serde::{Deserialize, Serialize};

use crate::error::ChordError;
use crate::models::arrangement::{ArrangementContext, SongArrangement};
use crate::models::chord::Chord;
use crate::models::song::SongPart;
use crate::models::symbols::{SignStyle, CLEF_GLYPH};
use crate::transposition::resolve_spelling;

/// Render with ASCII accidentals ("C#m7/G#")
pub fn render(chord: &Chord, context: &ArrangementContext) -> Result<String, ChordError> {
    render_with_style(chord, context, SignStyle::Ascii)
}

pub fn render_with_style(
    chord: &Chord,
    context: &ArrangementContext,
    style: SignStyle,
) -> Result<String, ChordError> {
    if chord.is_no_chord() {
        return Ok(CLEF_GLYPH.to_string());
    }

    let Some(root) = render_root(chord, context, style)? else {
        log::warn!("chord without root pitch rendered as empty: {:?}", chord);
        return Ok(String::new());
    };

    let mut text = root;
    if chord.is_minor {
        text.push('m');
    }
    text.push_str(&chord.modifiers);

    if let Some(bass_pitch) = chord.bass_pitch {
        text.push('/');
        text.push_str(&style.apply(resolve_spelling(bass_pitch, context)?));
    }

    Ok(text)
}

/// Spelled root note only, `None` when the chord has no root pitch
pub fn render_root(
    chord: &Chord,
    context: &ArrangementContext,
    style: SignStyle,
) -> Result<Option<String>, ChordError> {
    chord
        .root_pitch
        .map(|pitch| resolve_spelling(pitch, context).map(|s| style.apply(s)))
        .transpose()
}

/// One part of an arrangement rendered for display
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RenderedPart {
    pub id: String,
    pub name: String,
    pub rows: Vec<Vec<String>>,
}

pub fn render_row(row: &[Chord], context: &ArrangementContext) -> Result<Vec<String>, ChordError> {
    row.iter().map(|chord| render(chord, context)).collect()
}

pub fn render_part(part: &SongPart, context: &ArrangementContext) -> Result<RenderedPart, ChordError> {
    Ok(RenderedPart {
        id: part.id.clone(),
        name: part.name.clone(),
        rows: part.render_rows(context)?,
    })
}

/// Render every part with the arrangement's own context
pub fn render_arrangement(arrangement: &SongArrangement) -> Result<Vec<RenderedPart>, ChordError> {
    arrangement
        .parts
        .iter()
        .map(|part| render_part(part, &arrangement.context))
        .collect()
}
