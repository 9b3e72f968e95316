//! # Application State
//!
//! Everything a front end needs to render one frame: the current settings,
//! the fretboard computed from them, and which selection dropdown is open.
//!
//! The state is never edited in place. [`AppState::apply`] takes an
//! [`Action`] and returns the next state, recomputing the fretboard
//! whenever the action touches the settings.

use crate::calculator::{Fretboard, build_fretboard};
use crate::error::{FretboardError, Result};
use crate::note::{Notation, Note};
use crate::settings::Settings;

/// Selection menus. At most one is open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dropdown {
    /// Note list for retuning the selected string
    Tuner,
    RootNote,
    Scale,
}

/// Discrete user interactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    HideAllDropdowns,
    /// Select a string (by tuning index) and toggle the tuner dropdown for it.
    ToggleTunerDropdown(usize),
    ToggleRootNoteDropdown,
    ToggleScaleDropdown,
    ChangeRootNote(Note),
    ChangeScale(usize),
    /// Retune the string chosen by the last `ToggleTunerDropdown`.
    ChangeTuning(Note),
    ChangeNotation(Notation),
    /// Transpose every string by a number of semitones.
    ShiftTuning(i32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub settings: Settings,
    pub fretboard: Fretboard,
    pub open_dropdown: Option<Dropdown>,
    pub selected_string: Option<usize>,
}

impl AppState {
    /// Builds the initial state for the given settings.
    ///
    /// # Errors
    /// * `InvalidScaleIndex` - `settings.scale_index` is outside the scale catalog
    pub fn new(settings: Settings) -> Result<Self> {
        Ok(Self {
            fretboard: build_fretboard(&settings)?,
            settings,
            open_dropdown: None,
            selected_string: None,
        })
    }

    pub fn is_open(&self, dropdown: Dropdown) -> bool {
        self.open_dropdown == Some(dropdown)
    }

    /// Returns the state that follows `action`.
    ///
    /// On error `self` is left as it was, so the caller keeps rendering the
    /// previous state.
    ///
    /// # Errors
    /// * `InvalidScaleIndex` - `ChangeScale` with an index outside the catalog
    /// * `InvalidStringIndex` - `ToggleTunerDropdown` with a string that does not exist
    /// * `NoStringSelected` - `ChangeTuning` before any string was selected
    pub fn apply(&self, action: Action) -> Result<Self> {
        log::debug!("Applying {:?}", action);

        let mut next = self.clone();
        match action {
            Action::HideAllDropdowns => {
                next.open_dropdown = None;
            }
            Action::ToggleTunerDropdown(string) => {
                if string >= next.settings.tuning.len() {
                    return Err(FretboardError::InvalidStringIndex {
                        index: string,
                        len: next.settings.tuning.len(),
                    });
                }
                next.selected_string = Some(string);
                next.open_dropdown = toggle(self.open_dropdown, Dropdown::Tuner);
            }
            Action::ToggleRootNoteDropdown => {
                next.open_dropdown = toggle(self.open_dropdown, Dropdown::RootNote);
            }
            Action::ToggleScaleDropdown => {
                next.open_dropdown = toggle(self.open_dropdown, Dropdown::Scale);
            }
            Action::ChangeRootNote(note) => {
                next.settings.root_note = note;
                next.close(Dropdown::RootNote);
                next.refresh()?;
            }
            Action::ChangeScale(index) => {
                next.settings.scale_index = index;
                next.close(Dropdown::Scale);
                next.refresh()?;
            }
            Action::ChangeTuning(note) => {
                let string = self.selected_string.ok_or(FretboardError::NoStringSelected)?;
                next.settings.set_string_tuning(string, note)?;
                next.close(Dropdown::Tuner);
                next.refresh()?;
            }
            Action::ChangeNotation(notation) => {
                next.settings.notation = notation;
                next.refresh()?;
            }
            Action::ShiftTuning(offset) => {
                next.settings.shift_tuning(offset);
                next.refresh()?;
            }
        }
        Ok(next)
    }

    fn close(&mut self, dropdown: Dropdown) {
        if self.open_dropdown == Some(dropdown) {
            self.open_dropdown = None;
        }
    }

    fn refresh(&mut self) -> Result<()> {
        self.fretboard = build_fretboard(&self.settings)?;
        Ok(())
    }
}

/// Opening one dropdown closes any other.
fn toggle(current: Option<Dropdown>, target: Dropdown) -> Option<Dropdown> {
    if current == Some(target) { None } else { Some(target) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn initial() -> AppState {
        AppState::new(Settings::default()).unwrap()
    }

    #[test]
    fn starts_with_everything_closed() {
        let state = initial();
        assert_eq!(state.open_dropdown, None);
        assert_eq!(state.selected_string, None);
        assert_eq!(state.fretboard, build_fretboard(&Settings::default()).unwrap());
    }

    #[test]
    fn dropdowns_are_mutually_exclusive() {
        let state = initial().apply(Action::ToggleRootNoteDropdown).unwrap();
        assert!(state.is_open(Dropdown::RootNote));

        let state = state.apply(Action::ToggleScaleDropdown).unwrap();
        assert!(state.is_open(Dropdown::Scale));
        assert!(!state.is_open(Dropdown::RootNote));

        let state = state.apply(Action::ToggleScaleDropdown).unwrap();
        assert_eq!(state.open_dropdown, None);
    }

    #[test]
    fn tuner_dropdown_remembers_string() {
        let state = initial().apply(Action::ToggleTunerDropdown(2)).unwrap();
        assert!(state.is_open(Dropdown::Tuner));
        assert_eq!(state.selected_string, Some(2));

        let state = state.apply(Action::ChangeTuning(Note::new(0))).unwrap();
        assert_eq!(state.open_dropdown, None);
        assert_eq!(state.settings.tuning[2], Note::new(0));
        assert_eq!(state.fretboard, build_fretboard(&state.settings).unwrap());
    }

    #[test]
    fn clicking_another_string_closes_tuner_and_moves_selection() {
        let state = initial()
            .apply(Action::ToggleTunerDropdown(1))
            .and_then(|s| s.apply(Action::ToggleTunerDropdown(3)))
            .unwrap();
        assert_eq!(state.open_dropdown, None);
        assert_eq!(state.selected_string, Some(3));

        // Retuning now applies to the newly selected string.
        let state = state.apply(Action::ChangeTuning(Note::new(0))).unwrap();
        assert_eq!(state.settings.tuning[3], Note::new(0));
        assert_eq!(state.settings.tuning[1], Settings::default().tuning[1]);
    }

    #[test]
    fn change_tuning_needs_a_selected_string() {
        assert_eq!(
            initial().apply(Action::ChangeTuning(Note::new(0))),
            Err(FretboardError::NoStringSelected)
        );
    }

    #[test]
    fn tuner_dropdown_rejects_missing_string() {
        assert_eq!(
            initial().apply(Action::ToggleTunerDropdown(6)),
            Err(FretboardError::InvalidStringIndex { index: 6, len: 6 })
        );
    }

    #[test]
    fn invalid_scale_leaves_state_untouched() {
        let state = initial();
        let before = state.clone();
        assert!(state.apply(Action::ChangeScale(42)).is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn root_change_recomputes_and_closes_menu() {
        let state = initial()
            .apply(Action::ToggleRootNoteDropdown)
            .and_then(|s| s.apply(Action::ChangeRootNote(Note::new(1))))
            .unwrap();
        assert_eq!(state.open_dropdown, None);
        assert_eq!(state.settings.root_note, Note::new(1));
        // Open A string is now the root.
        assert!(state.fretboard.strings[4].open_note_is_root);
    }

    #[test]
    fn notation_and_shift_keep_menus_as_they_are() {
        let state = initial()
            .apply(Action::ToggleScaleDropdown)
            .and_then(|s| s.apply(Action::ChangeNotation(Notation::Sharp)))
            .and_then(|s| s.apply(Action::ShiftTuning(-1)))
            .unwrap();
        assert!(state.is_open(Dropdown::Scale));
        assert_eq!(state.settings.notation, Notation::Sharp);
        assert_eq!(state.settings.tuning[4], Note::new(0));
        // Open G♯ string: fret 1 is A in any notation.
        assert_eq!(state.fretboard.strings[4].frets[0].note, "A");
    }
}
