//! # Music Theory Tables
//!
//! Static lookup data used by the fretboard calculator and by the
//! selection menus of a front end.
//!
//! ## Contents
//! - Flat, sharp and combined note spellings for the 12 pitch classes
//! - The scale catalog (name + semitone offsets from the root)
//! - Fretboard dimensions and the default tuning
//!
//! Pitch class 0 is G♯/A♭. Every table below is indexed by pitch class.

use serde::Serialize;

use crate::error::{FretboardError, Result};

/// Number of frets drawn after the open string.
pub const NUM_FRETS: usize = 12;

/// Number of strings on the instrument.
pub const NUM_STRINGS: usize = 6;

/// Note names spelled with flats.
pub const FLAT_NOTE_NAMES: [&str; 12] = [
    "A\u{266d}", "A", "B\u{266d}", "B", "C", "D\u{266d}", "D", "E\u{266d}", "E", "F", "G\u{266d}", "G",
];

/// Note names spelled with sharps.
pub const SHARP_NOTE_NAMES: [&str; 12] = [
    "G\u{266f}", "A", "A\u{266f}", "B", "C", "C\u{266f}", "D", "D\u{266f}", "E", "F", "F\u{266f}", "G",
];

/// Note names for selection menus. Accidentals show both spellings,
/// natural notes show a single name.
pub const COMBINED_NOTE_NAMES: [&str; 12] = [
    "G\u{266f}/A\u{266d}",
    "A",
    "A\u{266f}/B\u{266d}",
    "B",
    "C",
    "C\u{266f}/D\u{266d}",
    "D",
    "D\u{266f}/E\u{266d}",
    "E",
    "F",
    "F\u{266f}/G\u{266d}",
    "G",
];

/// Standard tuning, highest-pitched string first: E B G D A E.
pub const DEFAULT_TUNING: [u8; NUM_STRINGS] = [8, 3, 11, 6, 1, 8];

/// Default scale: Major scale.
pub const DEFAULT_SCALE_INDEX: usize = 0;

/// Default root note: C.
pub const DEFAULT_ROOT_NOTE: u8 = 4;

/// A named scale, given as semitone offsets from its root.
///
/// Offsets start at 0 and are strictly ascending within `[0, 12)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScaleDefinition {
    pub name: &'static str,
    pub offsets: &'static [u8],
}

/// Every scale a user can pick. The position in this array is the
/// stable identifier stored in `Settings::scale_index`.
pub static SCALE_CATALOG: [ScaleDefinition; 20] = [
    ScaleDefinition { name: "Major scale", offsets: &[0, 2, 4, 5, 7, 9, 11] },
    ScaleDefinition { name: "Mixolydian mode", offsets: &[0, 2, 4, 5, 7, 9, 10] },
    ScaleDefinition { name: "Lydian mode", offsets: &[0, 2, 4, 6, 7, 9, 11] },
    ScaleDefinition { name: "Lydian dominant mode", offsets: &[0, 2, 4, 6, 7, 9, 10] },
    ScaleDefinition { name: "Phrygian dominant mode", offsets: &[0, 2, 4, 5, 7, 8, 11] },
    ScaleDefinition { name: "Harmonic major scale", offsets: &[0, 2, 4, 5, 7, 8, 11] },
    ScaleDefinition { name: "Natural minor scale", offsets: &[0, 2, 3, 5, 7, 8, 10] },
    ScaleDefinition { name: "Dorian mode", offsets: &[0, 2, 3, 5, 7, 9, 10] },
    ScaleDefinition { name: "Harmonic minor scale", offsets: &[0, 2, 3, 5, 7, 8, 11] },
    ScaleDefinition { name: "Melodic minor scale", offsets: &[0, 2, 3, 5, 7, 9, 11] },
    ScaleDefinition { name: "Phrygian mode", offsets: &[0, 1, 3, 5, 7, 8, 10] },
    ScaleDefinition { name: "Locrian mode", offsets: &[0, 1, 3, 5, 6, 8, 10] },
    ScaleDefinition { name: "Blues scale", offsets: &[0, 3, 5, 6, 7, 10] },
    ScaleDefinition { name: "Altered scale", offsets: &[0, 1, 3, 4, 6, 8, 10] },
    ScaleDefinition { name: "Major pentatonic scale", offsets: &[0, 2, 4, 7, 9] },
    ScaleDefinition { name: "Minor pentatonic scale", offsets: &[0, 3, 5, 7, 10] },
    ScaleDefinition { name: "Chromatic Scale", offsets: &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11] },
    ScaleDefinition { name: "Whole tone scale", offsets: &[0, 2, 4, 6, 8, 10] },
    ScaleDefinition { name: "Octatonic scale", offsets: &[0, 2, 3, 5, 6, 8, 9, 11] },
    ScaleDefinition { name: "Hexatonic scale", offsets: &[0, 3, 4, 7, 8, 11] },
];

/// Looks up a scale by its catalog index.
///
/// # Errors
/// * `InvalidScaleIndex` - `index` is outside the scale catalog
pub fn scale(index: usize) -> Result<&'static ScaleDefinition> {
    SCALE_CATALOG.get(index).ok_or(FretboardError::InvalidScaleIndex {
        index,
        len: SCALE_CATALOG.len(),
    })
}
