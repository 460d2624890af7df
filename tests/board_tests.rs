//! Board tests - peg geometry and stack queries through the facade

use tui_hanoi::core::{Board, Peg};
use tui_hanoi::types::{Disk, PegLabel, DISK_COUNT, PEG_COUNT};

#[test]
fn test_new_board_canonical_layout() {
    let board = Board::new();

    assert_eq!(
        board.peg(PegLabel::Left).slots(),
        &[Some(Disk::Small), Some(Disk::Medium), Some(Disk::Large)]
    );
    for label in [PegLabel::Middle, PegLabel::Right] {
        assert!(board.peg(label).is_empty());
        assert_eq!(board.peg(label).slots(), &[None; DISK_COUNT]);
    }
}

#[test]
fn test_peg_top_scans_from_the_top() {
    assert_eq!(Peg::EMPTY.top(), None);

    let one = Peg::from_slots([None, None, Some(Disk::Large)]).unwrap();
    assert_eq!(one.top(), Some(Disk::Large));

    let two = Peg::from_slots([None, Some(Disk::Small), Some(Disk::Medium)]).unwrap();
    assert_eq!(two.top(), Some(Disk::Small));

    let full = Peg::from_slots([Some(Disk::Small), Some(Disk::Medium), Some(Disk::Large)]).unwrap();
    assert_eq!(full.top(), Some(Disk::Small));
}

#[test]
fn test_landing_slot_is_the_deepest_empty_slot() {
    assert_eq!(Peg::EMPTY.landing_slot(), Some(2));

    let one = Peg::from_slots([None, None, Some(Disk::Large)]).unwrap();
    assert_eq!(one.landing_slot(), Some(1));

    let two = Peg::from_slots([None, Some(Disk::Medium), Some(Disk::Large)]).unwrap();
    assert_eq!(two.landing_slot(), Some(0));

    let full = Peg::from_slots([Some(Disk::Small), Some(Disk::Medium), Some(Disk::Large)]).unwrap();
    assert_eq!(full.landing_slot(), None);
}

#[test]
fn test_from_slots_enforces_gravity_packing() {
    // A disk floating above an empty slot is not a peg.
    assert!(Peg::from_slots([Some(Disk::Small), None, None]).is_none());
    assert!(Peg::from_slots([Some(Disk::Small), None, Some(Disk::Large)]).is_none());
    assert!(Peg::from_slots([None, Some(Disk::Medium), None]).is_none());

    // Packed stacks of every height are accepted.
    assert!(Peg::from_slots([None, None, None]).is_some());
    assert!(Peg::from_slots([None, None, Some(Disk::Small)]).is_some());
    assert!(Peg::from_slots([None, Some(Disk::Medium), Some(Disk::Large)]).is_some());
    assert!(Peg::from_slots([Some(Disk::Small), Some(Disk::Medium), Some(Disk::Large)]).is_some());
}

#[test]
fn test_complete_tower_is_exactly_the_full_ordered_stack() {
    let done = Peg::from_slots([Some(Disk::Small), Some(Disk::Medium), Some(Disk::Large)]).unwrap();
    assert!(done.is_complete_tower());

    // Large alone in the bottom slot is not enough.
    let large_only = Peg::from_slots([None, None, Some(Disk::Large)]).unwrap();
    assert!(!large_only.is_complete_tower());

    let two_high = Peg::from_slots([None, Some(Disk::Medium), Some(Disk::Large)]).unwrap();
    assert!(!two_high.is_complete_tower());
    assert!(!Peg::EMPTY.is_complete_tower());
}

#[test]
fn test_board_from_pegs_preserves_order() {
    let board = Board::from_pegs([
        Peg::EMPTY,
        Peg::from_slots([None, None, Some(Disk::Small)]).unwrap(),
        Peg::from_slots([None, Some(Disk::Medium), Some(Disk::Large)]).unwrap(),
    ]);

    assert!(board.peg(PegLabel::Left).is_empty());
    assert_eq!(board.peg(PegLabel::Middle).top(), Some(Disk::Small));
    assert_eq!(board.peg(PegLabel::Right).top(), Some(Disk::Medium));
    assert_eq!(PegLabel::ALL.len(), PEG_COUNT);
}
