//! Board module - pegs and the disks stacked on them
//!
//! A peg is a fixed array of three slots, index 0 at the top and index 2 at
//! the bottom. Disks are gravity-packed: every occupied slot sits below every
//! empty one, so a one-disk peg is `[None, None, Some(disk)]`.
//!
//! The board is three pegs, addressed by [`PegLabel`]. The only mutation it
//! supports is [`Board::transfer`], which moves one top disk between pegs and
//! preserves the packing invariant by construction. Legality is not checked
//! here; that is the rules module's job.

use crate::types::{Disk, PegLabel, Slot, DISK_COUNT, PEG_COUNT};

/// One peg: three gravity-packed disk slots, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Peg {
    /// Slots in top-to-bottom order (index 2 is the bottom)
    slots: [Slot; DISK_COUNT],
}

impl Peg {
    /// An empty peg
    pub const EMPTY: Peg = Peg {
        slots: [None; DISK_COUNT],
    };

    /// Build a peg from explicit slots, top to bottom
    ///
    /// Returns `None` if the slots are not gravity-packed (an occupied slot
    /// above an empty one). Intended for tests and benches that need boards
    /// mid-game; gameplay only ever constructs pegs through [`Board::new`].
    pub fn from_slots(slots: [Slot; DISK_COUNT]) -> Option<Self> {
        let packed = slots.windows(2).all(|w| !(w[0].is_some() && w[1].is_none()));
        packed.then_some(Self { slots })
    }

    /// Slots in top-to-bottom order
    pub fn slots(&self) -> &[Slot; DISK_COUNT] {
        &self.slots
    }

    pub fn is_empty(&self) -> bool {
        self.slots[DISK_COUNT - 1].is_none()
    }

    pub fn is_full(&self) -> bool {
        self.slots[0].is_some()
    }

    /// The disk currently on top, if any
    pub fn top(&self) -> Option<Disk> {
        self.slots.iter().find_map(|slot| *slot)
    }

    /// Index of the slot a settling disk would come to rest in
    ///
    /// Scans bottom-up for the deepest empty slot. `None` means the peg is
    /// full.
    pub fn landing_slot(&self) -> Option<usize> {
        (0..DISK_COUNT).rev().find(|&i| self.slots[i].is_none())
    }

    /// Index of the topmost occupied slot, or `None` for an empty peg
    fn top_slot(&self) -> Option<usize> {
        (0..DISK_COUNT).find(|&i| self.slots[i].is_some())
    }

    /// All three disks present, largest at the bottom
    ///
    /// Packing plus the size rule mean a full peg can only be stacked one
    /// way, but the check spells out the whole stack rather than trusting
    /// the caller to have maintained that.
    pub fn is_complete_tower(&self) -> bool {
        self.slots == [Some(Disk::Small), Some(Disk::Medium), Some(Disk::Large)]
    }

    fn pop(&mut self) -> Option<Disk> {
        let i = self.top_slot()?;
        self.slots[i].take()
    }

    fn push(&mut self, disk: Disk) {
        if let Some(i) = self.landing_slot() {
            self.slots[i] = Some(disk);
        }
    }
}

/// The three pegs, indexed by [`PegLabel`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pegs: [Peg; PEG_COUNT],
}

impl Board {
    /// The canonical starting board: all three disks on the left peg,
    /// largest at the bottom; middle and right empty
    pub fn new() -> Self {
        let left = Peg {
            slots: [Some(Disk::Small), Some(Disk::Medium), Some(Disk::Large)],
        };
        Self {
            pegs: [left, Peg::EMPTY, Peg::EMPTY],
        }
    }

    /// Build a board from explicit pegs, left to right
    ///
    /// For tests and benches; see [`Peg::from_slots`].
    pub fn from_pegs(pegs: [Peg; PEG_COUNT]) -> Self {
        Self { pegs }
    }

    pub fn peg(&self, label: PegLabel) -> &Peg {
        &self.pegs[label.index()]
    }

    /// Move the top disk of `from` onto `to`, in place
    ///
    /// Assumes the move has already passed the legality checks; callers
    /// outside this crate go through the game's command submission, which
    /// assesses first. A pop from an empty peg is a bug upstream.
    pub(crate) fn transfer(&mut self, from: PegLabel, to: PegLabel) {
        debug_assert_ne!(from, to);
        if let Some(disk) = self.pegs[from.index()].pop() {
            self.pegs[to.index()].push(disk);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
