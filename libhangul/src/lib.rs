//! # libhangul
//!
//! Hangul text entry for constrained on-screen keyboards, built on
//! libhangul-core. Wires a [`Composer`] to an editing surface that can only
//! append and remove its last glyph.

pub mod config;
pub mod editor;

// Re-export the composition core
pub use libhangul_core::*;

pub use config::HangulConfig;
pub use editor::{DisplaySink, HangulInput, InputMode, KeyEvent, KeyResult, NameEdit};
