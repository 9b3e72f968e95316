// fretboard-core/src/lib.rs

//! The core logic for the Flexfrets fretboard viewer.
//! This crate turns a tuning, a root note and a scale into a description
//! of every fret on a 6-string, 12-fret neck. It is completely headless
//! and contains no GUI code.

pub mod app_state;
pub mod calculator;
pub mod error;
pub mod note;
pub mod settings;
pub mod tables;

pub use app_state::{Action, AppState, Dropdown};
pub use calculator::{Fret, Fretboard, GuitarString, build_fretboard, build_string, scale_notes};
pub use error::{FretboardError, Result};
pub use note::{Notation, Note};
pub use settings::Settings;
