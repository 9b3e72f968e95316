//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

/// Everything that can go wrong while building a fretboard or applying
/// a user action.
///
/// Note values never appear here: they are normalised into `[0, 12)`
/// instead of being rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FretboardError {
    #[error("scale index {index} is out of range (catalog has {len} scales)")]
    InvalidScaleIndex { index: usize, len: usize },

    #[error("string index {index} is out of range (fretboard has {len} strings)")]
    InvalidStringIndex { index: usize, len: usize },

    #[error("no string is selected for retuning")]
    NoStringSelected,

    #[error("unknown note name: {0:?}")]
    UnknownNoteName(String),
}

pub type Result<T> = std::result::Result<T, FretboardError>;
