//! Custom canvas widgets.

pub mod fretboard;
