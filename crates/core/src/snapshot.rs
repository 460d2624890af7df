//! Read-only copies of engine state for the presentation layer.

use crate::types::{Phase, Slot, DISK_COUNT, PEG_COUNT};

/// Everything a renderer needs for one frame
///
/// Plain copied data; holding one never borrows the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Peg slots left to right, each top to bottom
    pub pegs: [[Slot; DISK_COUNT]; PEG_COUNT],
    pub phase: Phase,
    /// Applied moves so far
    pub moves: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            pegs: [[None; DISK_COUNT]; PEG_COUNT],
            phase: Phase::Greeting,
            moves: 0,
        }
    }
}
