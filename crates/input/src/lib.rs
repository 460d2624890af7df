//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into peg labels and recognizes the quit chord.
//! Command assembly (two labels make a move) stays in the shell; invalid
//! characters surface as `None` so the shell can silently re-prompt.

pub mod map;

pub use tui_hanoi_types as types;

pub use map::{peg_for_key, should_quit};
