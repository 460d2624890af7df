//! Shared types module - game vocabulary and board constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core rules, input mapping, scene rendering).
//!
//! # Board Geometry
//!
//! The classic puzzle layout, fixed at three of everything:
//!
//! - **Pegs**: 3, labeled left / middle / right
//! - **Disks**: 3, one of each size
//! - **Slots per peg**: 3, indexed 0 (top) to 2 (bottom)
//!
//! All three disks start on the left peg, largest at the bottom.
//!
//! # Disk Sizes
//!
//! Disks are totally ordered by size; a disk may only rest on a strictly
//! larger one. The renderer gives each size a distinct color:
//!
//! | Disk | Order | Color |
//! |----------|-------|--------|
//! | `Small` | 1st | Red |
//! | `Medium` | 2nd | Orange |
//! | `Large` | 3rd | Yellow |
//!
//! # Command Characters
//!
//! A move is two keystrokes, source peg then destination peg, using the
//! lowercase characters `l`, `m`, `r`. Parsing is case-sensitive: `L` is
//! not a peg label.
//!
//! # Examples
//!
//! ```
//! use tui_hanoi_types::{Disk, MoveCommand, PegLabel};
//!
//! // The size order drives move legality.
//! assert!(Disk::Small < Disk::Medium);
//! assert!(Disk::Medium < Disk::Large);
//!
//! // Peg labels parse from their command characters only.
//! assert_eq!(PegLabel::from_char('m'), Some(PegLabel::Middle));
//! assert_eq!(PegLabel::from_char('M'), None);
//!
//! // Two characters make a command.
//! let cmd = MoveCommand::from_chars('l', 'r').unwrap();
//! assert_eq!(cmd.from, PegLabel::Left);
//! assert_eq!(cmd.to, PegLabel::Right);
//! ```

/// Number of pegs on the board
pub const PEG_COUNT: usize = 3;

/// Number of disks in play; also the slot capacity of each peg
pub const DISK_COUNT: usize = 3;

/// The three disk sizes, smallest first
///
/// The derived `Ord` follows declaration order, so
/// `Small < Medium < Large` — exactly the comparison the size rule needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Disk {
    Small,
    Medium,
    Large,
}

/// A disk slot on a peg
///
/// - `None`: empty slot
/// - `Some(Disk)`: slot holding the given disk
///
/// Used by the board as fixed arrays of three slots per peg, index 0 at
/// the top and index 2 at the bottom.
pub type Slot = Option<Disk>;

/// The three peg positions, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PegLabel {
    Left,
    Middle,
    Right,
}

impl PegLabel {
    /// All labels in left-to-right order, for iteration
    pub const ALL: [PegLabel; PEG_COUNT] = [PegLabel::Left, PegLabel::Middle, PegLabel::Right];

    /// Parse a label from its command character
    ///
    /// Case-sensitive: only the lowercase `l`, `m`, `r` are labels.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_hanoi_types::PegLabel;
    ///
    /// assert_eq!(PegLabel::from_char('l'), Some(PegLabel::Left));
    /// assert_eq!(PegLabel::from_char('r'), Some(PegLabel::Right));
    /// assert_eq!(PegLabel::from_char('R'), None);
    /// assert_eq!(PegLabel::from_char('x'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'l' => Some(PegLabel::Left),
            'm' => Some(PegLabel::Middle),
            'r' => Some(PegLabel::Right),
            _ => None,
        }
    }

    /// The command character for this label
    pub fn as_char(&self) -> char {
        match self {
            PegLabel::Left => 'l',
            PegLabel::Middle => 'm',
            PegLabel::Right => 'r',
        }
    }

    /// Board array index for this label (left to right)
    pub fn index(&self) -> usize {
        match self {
            PegLabel::Left => 0,
            PegLabel::Middle => 1,
            PegLabel::Right => 2,
        }
    }
}

/// A move command: take the top disk of `from`, settle it onto `to`
///
/// Commands carry no legality guarantee of their own beyond label
/// validity; the engine assesses them against the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveCommand {
    pub from: PegLabel,
    pub to: PegLabel,
}

impl MoveCommand {
    pub fn new(from: PegLabel, to: PegLabel) -> Self {
        Self { from, to }
    }

    /// Parse a command from its two keystrokes, source then destination
    ///
    /// Returns `None` if either character is not a peg label. Source and
    /// destination being the same peg is a legality matter, not a parse
    /// error, and is left to the engine.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_hanoi_types::{MoveCommand, PegLabel};
    ///
    /// let cmd = MoveCommand::from_chars('m', 'r').unwrap();
    /// assert_eq!(cmd, MoveCommand::new(PegLabel::Middle, PegLabel::Right));
    ///
    /// assert_eq!(MoveCommand::from_chars('m', '?'), None);
    /// assert!(MoveCommand::from_chars('l', 'l').is_some());
    /// ```
    pub fn from_chars(from: char, to: char) -> Option<Self> {
        Some(Self {
            from: PegLabel::from_char(from)?,
            to: PegLabel::from_char(to)?,
        })
    }
}

/// Result of submitting a move command
///
/// Rejections are deliberately undifferentiated here: the player-facing
/// contract is that an illegal command is silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The command was illegal or out of phase; the board is unchanged
    Rejected,
    /// One disk transferred; the game continues
    Applied,
    /// One disk transferred and it completed the tower; the game is won
    Won,
}

/// The high-level game phase driving the shell's screens
///
/// The shell dispatches on the phase each pass through its loop:
///
/// - `Greeting`: welcome screen, any key advances
/// - `AwaitingMove`: towers screen, two keys form a command
/// - `Won`: win screen, any key advances
/// - `Exiting`: the session ends
///
/// Command assessment happens inside `submit_command` and finishes before
/// it returns, so no in-between phase is ever observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Greeting,
    AwaitingMove,
    Won,
    Exiting,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disk_order_is_small_medium_large() {
        assert!(Disk::Small < Disk::Medium);
        assert!(Disk::Medium < Disk::Large);
        assert!(Disk::Small < Disk::Large);
    }

    #[test]
    fn peg_label_round_trips_through_command_chars() {
        for label in PegLabel::ALL {
            assert_eq!(PegLabel::from_char(label.as_char()), Some(label));
        }
    }

    #[test]
    fn peg_label_rejects_non_command_chars() {
        for c in ['L', 'M', 'R', 'x', '1', ' ', '\n'] {
            assert_eq!(PegLabel::from_char(c), None);
        }
    }

    #[test]
    fn peg_label_indices_cover_the_board() {
        let indices: Vec<usize> = PegLabel::ALL.iter().map(|l| l.index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn command_parses_only_from_two_valid_labels() {
        assert_eq!(
            MoveCommand::from_chars('l', 'r'),
            Some(MoveCommand::new(PegLabel::Left, PegLabel::Right))
        );
        assert_eq!(MoveCommand::from_chars('q', 'r'), None);
        assert_eq!(MoveCommand::from_chars('l', 'Q'), None);
        // Same source and destination parses; the engine rejects it later.
        assert_eq!(
            MoveCommand::from_chars('m', 'm'),
            Some(MoveCommand::new(PegLabel::Middle, PegLabel::Middle))
        );
    }
}
