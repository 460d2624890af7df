//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the whole of the Towers of Hanoi rules and state.
//! It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: the same command sequence always produces the same game
//! - **Testable**: every rule is reachable from plain unit tests
//! - **Portable**: can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: pegs of gravity-packed disk slots and the one-disk transfer
//! - [`rules`]: the read-only move-legality assessment and its error taxonomy
//! - [`game`]: the phase machine (greeting, awaiting a move, won, exiting)
//! - [`snapshot`]: copied-out state for renderers
//!
//! # Game Rules
//!
//! - Three pegs, three disks, all disks starting on the left peg
//! - A move takes the top disk of one peg and settles it on another
//! - A disk may only land on an empty peg or a strictly larger disk
//! - Illegal commands are silently rejected; the board never changes
//! - Restacking all three disks on a peg other than the left one wins
//!
//! # Example
//!
//! ```
//! use tui_hanoi_core::Game;
//! use tui_hanoi_types::{MoveCommand, MoveOutcome, Phase};
//!
//! let mut game = Game::new();
//! game.acknowledge_greeting();
//!
//! let cmd = MoveCommand::from_chars('l', 'r').unwrap();
//! assert_eq!(game.submit_command(cmd), MoveOutcome::Applied);
//!
//! // The same command again is illegal (Medium onto Small) and is
//! // absorbed without touching the board.
//! assert_eq!(game.submit_command(cmd), MoveOutcome::Rejected);
//! assert_eq!(game.phase(), Phase::AwaitingMove);
//! ```

pub mod board;
pub mod game;
pub mod rules;
pub mod snapshot;

pub use tui_hanoi_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Peg};
pub use game::Game;
pub use rules::{assess, MoveError};
pub use snapshot::GameSnapshot;
