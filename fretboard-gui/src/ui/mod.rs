//! # UI Module
//!
//! Layout and controls for the Flexfrets window.

pub mod main_display;
