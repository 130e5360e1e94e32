//! Song arrangement: key context and parts
//!
//! The `ArrangementContext` is the per-song display state (original key,
//! preferred sign, transpose). Chords never store it; it is passed in at
//! render time, so re-keying a song only changes the context.

use serde::{Deserialize, Serialize};

use super::note::{PitchClass, CLEF};
use super::song::SongPart;
use super::symbols::{is_clef, PreferredSign, SignStyle, CLEF_GLYPH};
use crate::error::{ChordError, ParseError};
use crate::parse::{parse_chord, parse_chord_line, parse_key};
use crate::renderers::{render_arrangement, render_root, RenderedPart};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArrangementContext {
    /// Note spelling of the key the chords were written in, or the clef
    pub original_key: String,
    pub preferred_sign: PreferredSign,
    /// Semitones applied at render time
    pub transpose: i32,
    /// Key quality, only used for the key name
    pub is_minor: bool,
}

impl Default for ArrangementContext {
    fn default() -> Self {
        Self {
            original_key: CLEF_GLYPH.to_string(),
            preferred_sign: PreferredSign::Natural,
            transpose: 0,
            is_minor: false,
        }
    }
}

impl ArrangementContext {
    /// Context for a song written in `key` with no transpose
    pub fn in_key(key: &str) -> Self {
        Self {
            original_key: key.to_string(),
            ..Default::default()
        }
    }

    pub fn has_key(&self) -> bool {
        !is_clef(&self.original_key)
    }

    /// Pitch class of the original key; the clef counts as 12
    pub fn original_key_pitch(&self) -> Option<PitchClass> {
        if !self.has_key() {
            return Some(CLEF);
        }
        parse_key(&self.original_key).ok().map(|key| key.pitch)
    }

    /// Displayed key name, following the live transpose ("Ebm", "F#")
    pub fn key_name(&self) -> Result<String, ChordError> {
        if !self.has_key() {
            return Ok(CLEF_GLYPH.to_string());
        }
        let chord = parse_chord(&self.original_key, None)?;
        let root = render_root(&chord, self, SignStyle::Ascii)?.ok_or_else(|| {
            ChordError::Internal(format!("key '{}' parsed without a root", self.original_key))
        })?;
        Ok(format!("{}{}", root, if self.is_minor { "m" } else { "" }))
    }

    /// Apply a key typed by the user
    ///
    /// The first key typed becomes the original key. Later edits keep the
    /// original key and store the distance to it as `transpose`. The typed
    /// accidental becomes the preferred sign, so typing "D#" never shows "Eb".
    pub fn edit_key(&mut self, new_key: &str) -> Result<(), ParseError> {
        let key = parse_key(new_key)?;
        self.preferred_sign = key.sign;
        self.is_minor = key.is_minor;

        match self.original_key_pitch().filter(|_| self.has_key()) {
            Some(original) => {
                self.transpose = key.pitch - original;
                log::info!(
                    "edit key from '{}' to '{}', transpose = {}",
                    self.original_key,
                    key.spelling,
                    self.transpose
                );
            }
            None => {
                log::info!("set original key '{}'", key.spelling);
                self.original_key = key.spelling;
                self.transpose = 0;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SongArrangement {
    #[serde(flatten)]
    pub context: ArrangementContext,
    #[serde(default)]
    pub parts: Vec<SongPart>,
}

impl SongArrangement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_name(&self) -> Result<String, ChordError> {
        self.context.key_name()
    }

    pub fn edit_key(&mut self, new_key: &str) -> Result<(), ParseError> {
        self.context.edit_key(new_key)
    }

    /// Append an empty part and return it
    pub fn add_part(&mut self, name: &str) -> &mut SongPart {
        self.parts.push(SongPart::new(name));
        let last = self.parts.len() - 1;
        &mut self.parts[last]
    }

    pub fn part_mut(&mut self, id: &str) -> Option<&mut SongPart> {
        self.parts.iter_mut().find(|part| part.id == id)
    }

    /// Parse a typed chord row in this arrangement's frame of reference
    pub fn parse_row(&self, line: &str) -> Result<Vec<super::chord::Chord>, ParseError> {
        parse_chord_line(line, Some(&self.context))
    }

    pub fn render_parts(&self) -> Result<Vec<RenderedPart>, ChordError> {
        render_arrangement(self)
    }
}
