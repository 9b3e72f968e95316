//! # Pitch Classes
//!
//! A [`Note`] is one of the 12 chromatic pitch classes, independent of how
//! it is spelled. Spelling is chosen at display time through [`Notation`].
//!
//! Every constructor normalises with true modulo, so transposing by a
//! negative amount wraps to the top of the octave instead of producing a
//! negative index.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::FretboardError;
use crate::tables::{COMBINED_NOTE_NAMES, FLAT_NOTE_NAMES, SHARP_NOTE_NAMES};

/// Number of pitch classes in an octave.
const SEMITONES: i32 = 12;

/// A pitch class in `[0, 12)`. Index 0 is G♯/A♭.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "u8")]
pub struct Note(u8);

/// Whether accidentals are displayed as flats or sharps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Notation {
    #[default]
    Flat,
    Sharp,
}

impl Notation {
    pub fn is_flat(self) -> bool {
        self == Notation::Flat
    }

    pub fn toggled(self) -> Self {
        match self {
            Notation::Flat => Notation::Sharp,
            Notation::Sharp => Notation::Flat,
        }
    }
}

impl Note {
    /// Builds a note from any integer, wrapping it into `[0, 12)`.
    pub fn new(value: i32) -> Self {
        Note(value.rem_euclid(SEMITONES) as u8)
    }

    /// Position of this note in the note tables.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Moves the note by `offset` semitones in either direction.
    pub fn transpose(self, offset: i32) -> Self {
        Note::new(self.0 as i32 + offset)
    }

    /// Display name in the given notation.
    pub fn name(self, notation: Notation) -> &'static str {
        match notation {
            Notation::Flat => FLAT_NOTE_NAMES[self.index()],
            Notation::Sharp => SHARP_NOTE_NAMES[self.index()],
        }
    }

    /// Menu label showing both spellings where a note has two.
    pub fn combined_name(self) -> &'static str {
        COMBINED_NOTE_NAMES[self.index()]
    }

    /// All twelve pitch classes in table order.
    pub fn all() -> impl Iterator<Item = Note> {
        (0..SEMITONES).map(Note::new)
    }
}

impl From<i32> for Note {
    fn from(value: i32) -> Self {
        Note::new(value)
    }
}

impl From<Note> for u8 {
    fn from(note: Note) -> Self {
        note.0
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.combined_name())
    }
}

/// Every accepted spelling mapped to its pitch class.
///
/// Built once from the three note tables, plus ASCII forms (`C#`, `Db`)
/// so names can be typed without the Unicode accidentals.
static NAME_MAP: Lazy<BTreeMap<String, Note>> = Lazy::new(|| {
    let mut map = BTreeMap::new();
    for note in Note::all() {
        for name in [
            FLAT_NOTE_NAMES[note.index()],
            SHARP_NOTE_NAMES[note.index()],
            COMBINED_NOTE_NAMES[note.index()],
        ] {
            map.insert(name.to_string(), note);
            map.insert(name.replace('\u{266d}', "b").replace('\u{266f}', "#"), note);
        }
    }
    map
});

impl FromStr for Note {
    type Err = FretboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NAME_MAP
            .get(s.trim())
            .copied()
            .ok_or_else(|| FretboardError::UnknownNoteName(s.to_string()))
    }
}
