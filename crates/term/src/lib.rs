//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids ratatui widgets/layout and instead renders into a
//! simple framebuffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Draw the towers scene from snapshots, never from live engine state
//! - Own the terminal session (raw mode, alternate screen) in one place

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_hanoi_core as core;
pub use tui_hanoi_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport, SCENE_WIDTH, TOWER_WIDTH};
pub use renderer::{encode_full_into, TerminalRenderer};
