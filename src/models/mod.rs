//! Models module for lead-sheet chords
//!
//! This module contains the pitch tables, the chord value and the
//! song/arrangement records exchanged with the song store.

pub mod arrangement;
pub mod chord;
pub mod note;
pub mod song;
pub mod symbols;

// Re-export commonly used types
pub use arrangement::{ArrangementContext, SongArrangement};
pub use chord::{Chord, ChordRecord, ABSENT_PITCH};
pub use note::{pitch_class_of, spellings_of, wrap12, PitchClass, CLEF, NOTE_TABLE};
pub use song::{SetList, Song, SongNotes, SongPart};
pub use symbols::{is_clef, Accidental, MusicSymbol, PreferredSign, SignStyle, CLEF_GLYPH};
