// Song records: loading stored set lists, editing keys and rendering parts

use chordsheet_wasm::models::{PreferredSign, SetList, Song, CLEF_GLYPH};
use chordsheet_wasm::parse_chord_line;
use std::io::Write;

const STORED_SET_LIST: &str = r#"{
  "id": "set-1",
  "title": "Friday Gig",
  "users": { "uid-1": true },
  "songs": [
    {
      "id": "song-1",
      "index": 0,
      "name": "Blue Monday",
      "notes": {
        "arrangement": {
          "originalKey": "Eb",
          "preferredSign": "&#9838;",
          "transpose": 0,
          "isMinor": false,
          "parts": [
            {
              "id": "part-1",
              "name": "Verse",
              "chords": [
                [
                  {"rootInt": 3, "rootNote": "E", "rootNoteSign": "b", "bassInt": -1, "bassNote": "", "bassNoteSign": "", "isMinor": false, "modifiers": "7"},
                  {"rootInt": 8, "rootNote": "A", "rootNoteSign": "b", "bassInt": 3, "bassNote": "E", "bassNoteSign": "b", "isMinor": false, "modifiers": ""}
                ],
                [
                  {"rootInt": 10, "rootNote": "B", "rootNoteSign": "b", "bassInt": -1, "bassNote": "", "bassNoteSign": "", "isMinor": false, "modifiers": "sus4"}
                ]
              ]
            }
          ]
        }
      }
    },
    { "id": "song-2", "index": 1, "name": "Untitled sketch" }
  ]
}"#;

#[test]
fn test_load_and_render_stored_song() {
    let set_list = SetList::from_json(STORED_SET_LIST).expect("stored set list should load");
    assert_eq!(set_list.title, "Friday Gig");
    assert_eq!(set_list.songs.len(), 2);

    let song = set_list.song("song-1").unwrap();
    let arrangement = song.arrangement().unwrap();
    assert_eq!(arrangement.key_name().unwrap(), "Eb");

    let parts = arrangement.render_parts().unwrap();
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].name, "Verse");
    assert_eq!(parts[0].rows, vec![vec!["Eb7", "Ab/Eb"], vec!["Bbsus4"]]);
}

#[test]
fn test_edit_key_then_render() {
    let mut set_list = SetList::from_json(STORED_SET_LIST).unwrap();
    let arrangement = set_list.song_mut("song-1").unwrap().arrangement_mut().unwrap();

    arrangement.edit_key("F").unwrap();
    assert_eq!(arrangement.context.transpose, 2);
    assert_eq!(arrangement.context.preferred_sign, PreferredSign::Natural);
    assert_eq!(arrangement.key_name().unwrap(), "F");
    let parts = arrangement.render_parts().unwrap();
    assert_eq!(parts[0].rows, vec![vec!["F7", "A#/F"], vec!["Csus4"]]);

    arrangement.edit_key("D#").unwrap();
    assert_eq!(arrangement.context.transpose, 0);
    assert_eq!(arrangement.key_name().unwrap(), "D#");
    let parts = arrangement.render_parts().unwrap();
    assert_eq!(parts[0].rows, vec![vec!["D#7", "G#/D#"], vec!["A#sus4"]]);
}

#[test]
fn test_new_song_workflow() {
    let mut set_list = SetList::new("Rehearsal");
    let song = set_list.add_song(Song::with_arrangement("New Tune", "Intro"));
    let arrangement = song.arrangement_mut().unwrap();
    assert_eq!(arrangement.key_name().unwrap(), CLEF_GLYPH);

    arrangement.edit_key("g").unwrap();
    assert_eq!(arrangement.context.original_key, "G");

    let row = arrangement.parse_row("G D/F# Em C").unwrap();
    arrangement.parts[0].chords[0] = row;

    // the band wants it in A
    arrangement.edit_key("A").unwrap();
    let row = parse_chord_line("A", Some(&arrangement.context)).unwrap();
    arrangement.parts[0].push_row(row);

    let parts = arrangement.render_parts().unwrap();
    assert_eq!(parts[0].rows, vec![vec!["A", "E/G#", "F#m", "D"], vec!["A"]]);
    assert_eq!(arrangement.parts[0].chords[1][0].root_pitch, Some(7));
}

#[test]
fn test_save_and_reload_from_disk() {
    let mut set_list = SetList::from_json(STORED_SET_LIST).unwrap();
    set_list
        .song_mut("song-1")
        .and_then(Song::arrangement_mut)
        .unwrap()
        .edit_key("Gm")
        .unwrap();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(set_list.to_json().unwrap().as_bytes()).unwrap();

    let text = std::fs::read_to_string(file.path()).unwrap();
    let reloaded = SetList::from_json(&text).unwrap();
    assert_eq!(reloaded, set_list);

    let arrangement = reloaded.song("song-1").unwrap().arrangement().unwrap();
    assert_eq!(arrangement.key_name().unwrap(), "Gm");
    assert!(arrangement.context.is_minor);
}

#[test]
fn test_load_yaml_set_list() {
    let yaml = r##"
id: set-2
title: Jam
songs:
  - name: Twelve Bar
    notes:
      arrangement:
        originalKey: A
        preferredSign: flat
        transpose: 1
        parts:
          - name: Head
            chords:
              "0":
                - { rootInt: 9, rootNote: A, modifiers: "7" }
                - { rootInt: 2, rootNote: D, modifiers: "7" }
              "1":
                - { rootInt: 4, rootNote: E, modifiers: "7", bassInt: 8, bassNote: G, bassNoteSign: "#" }
  - notes: {}
"##;
    let set_list = SetList::from_yaml(yaml).unwrap();
    assert_eq!(set_list.songs.len(), 1);

    let arrangement = set_list.songs[0].arrangement().unwrap();
    assert_eq!(arrangement.key_name().unwrap(), "Bb");
    let parts = arrangement.render_parts().unwrap();
    assert_eq!(parts[0].rows, vec![vec!["Bb7", "Eb7"], vec!["F7/A"]]);
    assert!(!arrangement.parts[0].id.is_empty());
}
