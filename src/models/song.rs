//! Songs, parts and set lists as stored by the song store
//!
//! ```text
//! SetList { id, title, songs: [Song], users: {uid: bool} }
//! Song    { id, index, name, notes?: { arrangement?: SongArrangement } }
//! SongPart { id, name, chords: [[ChordRecord]] }
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashMap};

use super::arrangement::{ArrangementContext, SongArrangement};
use super::chord::Chord;
use crate::error::ChordError;

pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// A named section of a song holding rows of chords
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongPart {
    #[serde(default = "new_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_rows")]
    pub chords: Vec<Vec<Chord>>,
}

impl SongPart {
    /// New part with a single empty row
    pub fn new(name: &str) -> Self {
        Self {
            id: new_id(),
            name: name.to_string(),
            chords: vec![Vec::new()],
        }
    }

    pub fn push_row(&mut self, row: Vec<Chord>) {
        self.chords.push(row);
    }

    pub fn chord_count(&self) -> usize {
        self.chords.iter().map(Vec::len).sum()
    }

    /// Display text of every row under the given arrangement context
    pub fn render_rows(&self, context: &ArrangementContext) -> Result<Vec<Vec<String>>, ChordError> {
        self.chords
            .iter()
            .map(|row| crate::renderers::render_row(row, context))
            .collect()
    }
}

/// Rows as found in storage: a list, or an object keyed by row index
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredRows {
    List(Vec<Vec<Chord>>),
    Keyed(BTreeMap<String, Vec<Chord>>),
}

fn deserialize_rows<'de, D>(deserializer: D) -> Result<Vec<Vec<Chord>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<StoredRows>::deserialize(deserializer)? {
        None => Ok(Vec::new()),
        Some(StoredRows::List(rows)) => Ok(rows),
        Some(StoredRows::Keyed(map)) => {
            let mut keyed: Vec<(String, Vec<Chord>)> = map.into_iter().collect();
            keyed.sort_by_key(|(key, _)| key.parse::<usize>().unwrap_or(usize::MAX));
            Ok(keyed.into_iter().map(|(_, row)| row).collect())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SongNotes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrangement: Option<SongArrangement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    #[serde(default = "new_id")]
    pub id: String,
    #[serde(default)]
    pub index: usize,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<SongNotes>,
}

impl Song {
    pub fn new(name: &str) -> Self {
        Self {
            id: new_id(),
            index: 0,
            name: name.to_string(),
            notes: None,
        }
    }

    /// New song with an empty arrangement holding one part
    pub fn with_arrangement(name: &str, first_part: &str) -> Self {
        let mut arrangement = SongArrangement::new();
        arrangement.add_part(first_part);
        Self {
            notes: Some(SongNotes {
                arrangement: Some(arrangement),
            }),
            ..Self::new(name)
        }
    }

    pub fn arrangement(&self) -> Option<&SongArrangement> {
        self.notes.as_ref()?.arrangement.as_ref()
    }

    pub fn arrangement_mut(&mut self) -> Option<&mut SongArrangement> {
        self.notes.as_mut()?.arrangement.as_mut()
    }
}

/// A list of songs shared between users
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetList {
    #[serde(default = "new_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub songs: Vec<Song>,
    #[serde(default)]
    pub users: HashMap<String, bool>,
}

impl SetList {
    pub fn new(title: &str) -> Self {
        Self {
            id: new_id(),
            title: title.to_string(),
            songs: Vec::new(),
            users: HashMap::new(),
        }
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        let set_list: SetList = serde_json::from_str(text)?;
        Ok(set_list.without_unnamed_songs())
    }

    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        let set_list: SetList = serde_yaml::from_str(text)?;
        Ok(set_list.without_unnamed_songs())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn song(&self, id: &str) -> Option<&Song> {
        self.songs.iter().find(|song| song.id == id)
    }

    pub fn song_mut(&mut self, id: &str) -> Option<&mut Song> {
        self.songs.iter_mut().find(|song| song.id == id)
    }

    /// Append a song at the end of the list
    pub fn add_song(&mut self, mut song: Song) -> &mut Song {
        song.index = self.songs.len();
        self.songs.push(song);
        let last = self.songs.len() - 1;
        &mut self.songs[last]
    }

    fn without_unnamed_songs(mut self) -> Self {
        self.songs.retain(|song| {
            if song.name.is_empty() {
                log::warn!("skipping stored song '{}' without a name", song.id);
                false
            } else {
                true
            }
        });
        self
    }
}
