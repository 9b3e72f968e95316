//! # Fretboard Calculator
//!
//! Pure derivation of a [`Fretboard`] from a [`Settings`] snapshot.
//!
//! ## Pipeline
//! 1. [`scale_notes`] resolves the selected scale against the root note
//! 2. [`build_string`] walks 12 semitones up from each open note
//! 3. [`build_fretboard`] collects one string per tuning entry, in order
//!
//! Nothing is cached: a front end calls [`build_fretboard`] after every
//! settings change and replaces what it displays.

use serde::Serialize;

use crate::error::Result;
use crate::note::{Notation, Note};
use crate::settings::Settings;
use crate::tables::{self, NUM_FRETS, NUM_STRINGS};

/// A single fretted position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Fret {
    /// Name of the note to display.
    pub note: &'static str,
    pub is_in_scale: bool,
    pub is_root: bool,
}

/// One string: the open note summary plus frets 1 through 12.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuitarString {
    pub open_note_is_in_scale: bool,
    pub open_note_is_root: bool,
    pub frets: [Fret; NUM_FRETS],
}

/// All strings, in the same order as `Settings::tuning`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fretboard {
    pub strings: [GuitarString; NUM_STRINGS],
}

/// Calculates the notes of a scale built on `root_note`.
///
/// The result has one note per offset of the scale definition, in the
/// definition's order, so the first element is always the root.
///
/// # Errors
/// * `InvalidScaleIndex` - `scale_index` is outside the scale catalog
pub fn scale_notes(root_note: Note, scale_index: usize) -> Result<Vec<Note>> {
    let scale = tables::scale(scale_index)?;

    Ok(scale
        .offsets
        .iter()
        .map(|&offset| root_note.transpose(offset as i32))
        .collect())
}

/// Calculates the display properties of every fret on a string.
///
/// `scale_notes` is expected to start with the root, as returned by
/// [`scale_notes`]. A note counts as the root only when its first match in
/// `scale_notes` is at position 0, so a malformed scale that repeats the
/// root's pitch class later on still marks it by the first occurrence.
pub fn build_string(open_note: Note, scale_notes: &[Note], notation: Notation) -> GuitarString {
    let root = scale_notes.first().copied();

    let frets = std::array::from_fn(|i| {
        let note = open_note.transpose(i as i32 + 1);
        let position = scale_notes.iter().position(|&n| n == note);
        Fret {
            note: note.name(notation),
            is_in_scale: position.is_some(),
            is_root: position == Some(0),
        }
    });

    GuitarString {
        open_note_is_in_scale: scale_notes.contains(&open_note),
        open_note_is_root: root == Some(open_note),
        frets,
    }
}

/// Generates the full fretboard for the given settings.
///
/// # Errors
/// * `InvalidScaleIndex` - `settings.scale_index` is outside the scale catalog
pub fn build_fretboard(settings: &Settings) -> Result<Fretboard> {
    let notes = scale_notes(settings.root_note, settings.scale_index)?;

    let strings = settings
        .tuning
        .map(|open_note| build_string(open_note, &notes, settings.notation));

    log::debug!(
        "Built fretboard: root {}, scale {}, {:?} notation",
        settings.root_note,
        settings.scale_index,
        settings.notation
    );

    Ok(Fretboard { strings })
}
