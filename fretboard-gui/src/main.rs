//! # Flexfrets - Guitar Scale Fretboard GUI
//!
//! Desktop front end for the fretboard calculator. It shows which frets of
//! a 6-string, 12-fret neck belong to the selected scale and lets the user
//! change the root note, scale, tuning and notation.
//!
//! ## Architecture
//! - **State**: a single `AppState` from `fretboard-core`, replaced on every action
//! - **Messages**: widget interactions are mapped onto core `Action`s
//! - **Rendering**: header controls and dropdowns built from iced widgets,
//!   the neck itself drawn on a canvas

mod ui;
mod widgets;

use fretboard_core::{Action, AppState, Note, Settings};
use iced::{Element, Task, Theme};
use ui::main_display::create_main_view;

/// Main entry point for the Flexfrets application.
///
/// Builds the initial state from the default settings and hands it to the
/// Iced runtime with the dark theme.
pub fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Starting Flexfrets...");

    let state = AppState::new(Settings::default())?;
    let app = FretboardApp { state };

    iced::application("Flexfrets", FretboardApp::update, FretboardApp::view)
        .theme(FretboardApp::theme)
        .window_size((1100.0, 560.0))
        .run_with(move || (app, Task::none()))?;

    log::info!("Flexfrets closed");
    Ok(())
}

/// Application message types for the Iced GUI framework.
#[derive(Debug, Clone)]
pub enum Message {
    // Fretboard interactions
    StringClicked(usize),      // Open-note cell of a string was clicked

    // Header controls
    RootNoteMenu,              // Show/hide the root note dropdown
    ScaleMenu,                 // Show/hide the scale dropdown
    NotationToggled,           // Switch between flats and sharps
    ShiftTuning(i32),          // Transpose all strings

    // Dropdown selections
    RootNoteSelected(Note),
    ScaleSelected(usize),
    TuningSelected(Note),      // New open note for the selected string
    CloseMenus,
}

impl Message {
    /// The core action this message stands for.
    fn action(&self, state: &AppState) -> Action {
        match *self {
            Message::StringClicked(string) => Action::ToggleTunerDropdown(string),
            Message::RootNoteMenu => Action::ToggleRootNoteDropdown,
            Message::ScaleMenu => Action::ToggleScaleDropdown,
            Message::NotationToggled => Action::ChangeNotation(state.settings.notation.toggled()),
            Message::ShiftTuning(offset) => Action::ShiftTuning(offset),
            Message::RootNoteSelected(note) => Action::ChangeRootNote(note),
            Message::ScaleSelected(index) => Action::ChangeScale(index),
            Message::TuningSelected(note) => Action::ChangeTuning(note),
            Message::CloseMenus => Action::HideAllDropdowns,
        }
    }
}

/// Main application state for Flexfrets.
#[derive(Debug)]
struct FretboardApp {
    state: AppState,
}

impl FretboardApp {
    /// Applies the action behind `message`.
    ///
    /// A rejected action is logged and the current state is kept, so the
    /// screen keeps showing the last valid fretboard.
    fn update(&mut self, message: Message) {
        log::debug!("Received message: {:?}", message);

        let action = message.action(&self.state);
        match self.state.apply(action) {
            Ok(next) => self.state = next,
            Err(e) => log::warn!("Ignoring {:?}: {}", action, e),
        }
    }

    /// Renders the main application interface.
    ///
    /// Delegates all UI rendering to the main_display module.
    fn view(&self) -> Element<'_, Message> {
        create_main_view(&self.state)
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}
