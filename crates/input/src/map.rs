//! Key mapping from terminal events to peg labels.

use crate::types::PegLabel;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key event to the peg it names, if any.
///
/// Only the lowercase command characters `l`, `m`, `r` are labels; the
/// mapping is case-sensitive to match the original interaction model.
/// Everything else (including uppercase, arrows, function keys) is `None`,
/// which the shell treats as part of an unparsable command.
pub fn peg_for_key(key: KeyEvent) -> Option<PegLabel> {
    match key.code {
        KeyCode::Char(c) => PegLabel::from_char(c),
        _ => None,
    }
}

/// Check if a key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
