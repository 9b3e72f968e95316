use serde::{Deserialize, Serialize};

use crate::error::{FretboardError, Result};
use crate::note::{Notation, Note};
use crate::tables::{
    self, DEFAULT_ROOT_NOTE, DEFAULT_SCALE_INDEX, DEFAULT_TUNING, NUM_STRINGS, ScaleDefinition,
};

/// User-selected inputs to the fretboard calculator.
///
/// `tuning[0]` is the highest-pitched string, drawn as the top line of
/// the diagram. The calculator only preserves this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub tuning: [Note; NUM_STRINGS],
    pub scale_index: usize,
    pub root_note: Note,
    pub notation: Notation,
}

impl Default for Settings {
    /// Standard tuning, C major, flat notation.
    fn default() -> Self {
        Self {
            tuning: DEFAULT_TUNING.map(|n| Note::new(n as i32)),
            scale_index: DEFAULT_SCALE_INDEX,
            root_note: Note::new(DEFAULT_ROOT_NOTE as i32),
            notation: Notation::Flat,
        }
    }
}

impl Settings {
    /// The scale definition selected by `scale_index`.
    pub fn scale(&self) -> Result<&'static ScaleDefinition> {
        tables::scale(self.scale_index)
    }

    /// Transposes every string by `offset` semitones, wrapping into `[0, 12)`.
    pub fn shift_tuning(&mut self, offset: i32) {
        self.tuning = self.tuning.map(|note| note.transpose(offset));
    }

    /// Retunes a single string.
    pub fn set_string_tuning(&mut self, string: usize, note: Note) -> Result<()> {
        let slot = self
            .tuning
            .get_mut(string)
            .ok_or(FretboardError::InvalidStringIndex {
                index: string,
                len: NUM_STRINGS,
            })?;
        *slot = note;
        Ok(())
    }
}
