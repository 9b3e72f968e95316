// Fretboard scenarios
//
// End-to-end checks through the public API: scale resolution, string
// building, tuning shifts and the serialized shape handed to renderers.

use fretboard_core::tables::{self, NUM_FRETS, SCALE_CATALOG};
use fretboard_core::{
    Action, AppState, Notation, Note, Settings, build_fretboard, build_string, scale_notes,
};

fn notes(values: &[i32]) -> Vec<Note> {
    values.iter().map(|&v| Note::new(v)).collect()
}

#[test]
fn c_major_from_the_catalog() {
    assert_eq!(scale_notes(Note::new(4), 0).unwrap(), notes(&[4, 6, 8, 9, 11, 1, 3]));
}

#[test]
fn out_of_range_root_is_normalised() {
    assert_eq!(scale_notes(Note::new(16), 0).unwrap(), scale_notes(Note::new(4), 0).unwrap());
    assert_eq!(scale_notes(Note::new(-8), 0).unwrap()[0], Note::new(4));
}

#[test]
fn low_e_string_in_c_major() {
    let scale = scale_notes(Note::new(4), 0).unwrap();
    let string = build_string(Note::new(8), &scale, Notation::Flat);

    assert!(string.open_note_is_in_scale);
    assert!(!string.open_note_is_root);
    assert!(string.frets[7].is_root);

    let in_scale: Vec<&str> = string
        .frets
        .iter()
        .filter(|f| f.is_in_scale)
        .map(|f| f.note)
        .collect();
    assert_eq!(in_scale, ["F", "G", "A", "B", "C", "D", "E"]);
}

#[test]
fn every_string_has_twelve_frets() {
    let scale = scale_notes(Note::new(0), 16).unwrap();
    for open in Note::all() {
        let string = build_string(open, &scale, Notation::Sharp);
        assert_eq!(string.frets.len(), NUM_FRETS);
        // Chromatic scale: everything is in, exactly one root per octave.
        assert!(string.frets.iter().all(|f| f.is_in_scale));
        let roots = string.frets.iter().filter(|f| f.is_root).count()
            + usize::from(string.open_note_is_root);
        assert_eq!(roots, if open == Note::new(0) { 2 } else { 1 });
    }
}

#[test]
fn wrap_around_reaches_zero_at_fret_one() {
    let scale = scale_notes(Note::new(0), 0).unwrap();
    let string = build_string(Note::new(11), &scale, Notation::Flat);
    assert_eq!(string.frets[0].note, Note::new(0).name(Notation::Flat));
    assert!(string.frets[0].is_root);
}

#[test]
fn building_twice_gives_identical_fretboards() {
    for index in 0..SCALE_CATALOG.len() {
        let settings = Settings { scale_index: index, ..Settings::default() };
        assert_eq!(build_fretboard(&settings), build_fretboard(&settings));
    }
}

#[test]
fn shift_down_one_semitone() {
    let state = AppState::new(Settings::default())
        .and_then(|s| s.apply(Action::ShiftTuning(-1)))
        .unwrap();
    assert_eq!(state.settings.tuning.to_vec(), notes(&[7, 2, 10, 5, 0, 7]));
}

#[test]
fn flat_and_sharp_spell_the_same_pitch_class() {
    let mut settings = Settings::default();
    let flat = build_fretboard(&settings).unwrap();
    settings.notation = Notation::Sharp;
    let sharp = build_fretboard(&settings).unwrap();

    for (f_string, s_string) in flat.strings.iter().zip(sharp.strings.iter()) {
        for (f, s) in f_string.frets.iter().zip(s_string.frets.iter()) {
            assert_eq!(f.note.parse::<Note>(), s.note.parse::<Note>());
            assert_eq!(f.is_in_scale, s.is_in_scale);
            assert_eq!(f.is_root, s.is_root);
        }
    }
}

#[test]
fn serialized_fretboard_shape() {
    let fretboard = build_fretboard(&Settings::default()).unwrap();
    let json = serde_json::to_value(&fretboard).unwrap();

    let strings = json["strings"].as_array().unwrap();
    assert_eq!(strings.len(), 6);
    assert_eq!(strings[0]["openNoteIsInScale"], true);
    assert_eq!(strings[0]["openNoteIsRoot"], false);
    assert_eq!(strings[0]["frets"].as_array().unwrap().len(), 12);
    assert_eq!(strings[0]["frets"][7]["note"], "C");
    assert_eq!(strings[0]["frets"][7]["isRoot"], true);
}

#[test]
fn serialized_scale_definition_shape() {
    let blues = tables::scale(12).unwrap();
    let json = serde_json::to_value(blues).unwrap();
    assert_eq!(json["name"], "Blues scale");
    assert_eq!(json["offsets"], serde_json::json!([0, 3, 5, 6, 7, 10]));

    let settings = Settings { scale_index: 12, ..Settings::default() };
    assert_eq!(settings.scale(), Ok(blues));
}

#[test]
fn settings_round_trip_through_json() {
    let settings = Settings::default();
    let json = serde_json::to_string(&settings).unwrap();
    assert!(json.contains("\"tuning\":[8,3,11,6,1,8]"));
    let back: Settings = serde_json::from_str(&json).unwrap();
    assert_eq!(back, settings);

    // Out-of-range notes are wrapped on the way in.
    let wrapped: Settings = serde_json::from_str(
        r#"{"tuning":[20,-9,11,6,1,8],"scale_index":0,"root_note":4,"notation":"Sharp"}"#,
    )
    .unwrap();
    assert_eq!(wrapped.tuning, Settings::default().tuning);
    assert_eq!(wrapped.notation, Notation::Sharp);
}
