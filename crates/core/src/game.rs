//! Game module - the phase machine driving a session
//!
//! `Game` owns the board and the current [`Phase`] and exposes the handful
//! of operations the shell drives it with. Command assessment and the apply
//! step both happen inside [`Game::submit_command`], so callers only ever
//! observe `Greeting`, `AwaitingMove`, `Won` and `Exiting`.
//!
//! Operations invoked outside their valid phase are deliberately no-ops
//! rather than errors: the shell's dispatch loop stays a plain `match`, and
//! the engine stays total. `submit_command` out of phase reports
//! [`MoveOutcome::Rejected`] and mutates nothing.

use crate::board::Board;
use crate::rules;
use crate::snapshot::GameSnapshot;
use crate::types::{MoveCommand, MoveOutcome, PegLabel, Phase};

/// One Towers of Hanoi session: board, phase, move count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    phase: Phase,
    /// The peg the tower started on; finishing the tower here is not a win
    start_peg: PegLabel,
    /// Applied moves only; rejected commands do not count
    moves: u32,
}

impl Game {
    /// Start a fresh session: canonical board, `Greeting` phase
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            phase: Phase::Greeting,
            start_peg: PegLabel::Left,
            moves: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Read-only view of the pegs for rendering
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Owned copy of the board
    pub fn board_snapshot(&self) -> Board {
        self.board.clone()
    }

    /// Everything the renderer needs, copied out in one value
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            pegs: PegLabel::ALL.map(|label| *self.board.peg(label).slots()),
            phase: self.phase,
            moves: self.moves,
        }
    }

    /// Count of applied moves so far
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Leave the greeting screen; no-op outside `Greeting`
    pub fn acknowledge_greeting(&mut self) {
        if self.phase == Phase::Greeting {
            self.phase = Phase::AwaitingMove;
        }
    }

    /// Assess a command and, if legal, apply it
    ///
    /// The legality checks are a pure query; the board mutates only after
    /// they all pass, and only by the one-disk transfer. A winning move is
    /// one that completes the tower on a peg other than the starting one.
    pub fn submit_command(&mut self, cmd: MoveCommand) -> MoveOutcome {
        if self.phase != Phase::AwaitingMove {
            return MoveOutcome::Rejected;
        }

        if rules::assess(&self.board, cmd).is_err() {
            // Act as if we never heard the command.
            return MoveOutcome::Rejected;
        }

        self.board.transfer(cmd.from, cmd.to);
        self.moves += 1;

        if cmd.to != self.start_peg && self.board.peg(cmd.to).is_complete_tower() {
            self.phase = Phase::Won;
            MoveOutcome::Won
        } else {
            MoveOutcome::Applied
        }
    }

    /// Leave the win screen; no-op outside `Won`
    pub fn acknowledge_win(&mut self) {
        if self.phase == Phase::Won {
            self.phase = Phase::Exiting;
        }
    }

    /// Build a session mid-game for tests
    #[cfg(test)]
    pub(crate) fn with_board(board: Board, phase: Phase) -> Self {
        Self {
            board,
            phase,
            start_peg: PegLabel::Left,
            moves: 0,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
