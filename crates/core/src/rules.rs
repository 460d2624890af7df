//! Rules module - move legality assessment
//!
//! [`assess`] is a pure, read-only query against a board. The checks run in
//! a fixed order and the first failure wins; only after a clean pass does
//! the game apply the move. Nothing here mutates anything.
//!
//! The error variants exist for the engine and its tests. The player never
//! sees them: every one of them collapses to a silent rejection at the
//! command boundary. (A fifth cause, an invalid peg character, never reaches
//! this layer - the `PegLabel` type makes it unrepresentable, so input
//! mapping absorbs it.)

use thiserror::Error;

use crate::board::Board;
use crate::types::MoveCommand;

/// Why a proposed move is illegal
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("source and destination are the same peg")]
    SamePeg,
    #[error("source peg holds no disk")]
    EmptySource,
    #[error("destination peg is already full")]
    FullDestination,
    #[error("a disk may only rest on a strictly larger one")]
    SizeViolation,
}

/// Assess a command against a board without touching it
///
/// Check order: same-peg, empty source, full destination, size rule.
pub fn assess(board: &Board, cmd: MoveCommand) -> Result<(), MoveError> {
    if cmd.from == cmd.to {
        return Err(MoveError::SamePeg);
    }

    let source = board.peg(cmd.from);
    let top = source.top().ok_or(MoveError::EmptySource)?;

    let dest = board.peg(cmd.to);
    if dest.is_full() {
        return Err(MoveError::FullDestination);
    }

    // Legal onto an empty peg, or onto any strictly larger disk.
    match dest.top() {
        Some(target) if top >= target => Err(MoveError::SizeViolation),
        _ => Ok(()),
    }
}
