//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! One screen exists per phase: the greeting, the towers with the command
//! help, and the win screen (towers still visible above the text). Every
//! screen carries the title banner. Each tower is a 15-column stack of
//! disk rows over a grey base plate, with the peg's command key shown
//! beneath it.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Disk, PegLabel, Phase, DISK_COUNT};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Width of one tower column; also the width of the largest disk.
pub const TOWER_WIDTH: u16 = 15;
/// Columns between adjacent towers.
const TOWER_GAP: u16 = 4;
/// Full width of the three-tower scene.
pub const SCENE_WIDTH: u16 = TOWER_WIDTH * 3 + TOWER_GAP * 2;

const BANNER: [&str; 3] = [
    ".==========================.",
    "|   THE TOWERS OF HANOI    |",
    ".==========================.",
];

const HELP_KEYS: &str = "Enter a move as two keys: source peg, then destination peg.";
const HELP_GOAL: &str = "Stack all three disks on a new peg to win.";
const HELP_QUIT: &str = "Press q to quit.";
const TOO_SMALL: &str = "Terminal too small for the towers.";

/// Rows used by the towers screen: banner, towers, help.
const PLAY_HEIGHT: u16 = 15;
/// Widest line on the towers screen; the help text outspans the scene.
const PLAY_WIDTH: u16 = HELP_KEYS.len() as u16;
/// Rows used by the win screen.
const WIN_HEIGHT: u16 = 13;
/// Rows used by the greeting screen.
const GREETING_HEIGHT: u16 = 7;

/// A lightweight terminal renderer for the Hanoi scene.
pub struct GameView {
    anchor_y: AnchorY,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render the screen for the snapshot's phase into a fresh framebuffer.
    ///
    /// The game redraws on state transitions, not at a frame rate, so a
    /// full allocation per draw costs nothing worth optimizing away.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        match snap.phase {
            Phase::Greeting => self.draw_greeting(&mut fb),
            Phase::AwaitingMove => self.draw_play(snap, &mut fb),
            // Exiting is only ever rendered for the instant before the
            // session is torn down; the win screen stands in.
            Phase::Won | Phase::Exiting => self.draw_won(snap, &mut fb),
        }
        fb
    }

    fn draw_greeting(&self, fb: &mut FrameBuffer) {
        let y = self.block_top(fb, GREETING_HEIGHT);
        let y = draw_banner(fb, y);
        draw_centered(fb, y + 1, "Welcome!");
        draw_centered(fb, y + 3, "Press any key to start.");
    }

    fn draw_play(&self, snap: &GameSnapshot, fb: &mut FrameBuffer) {
        if !self.scene_fits(fb, PLAY_WIDTH, PLAY_HEIGHT) {
            let mid = fb.height() / 2;
            draw_centered(fb, mid, TOO_SMALL);
            return;
        }

        let y = self.block_top(fb, PLAY_HEIGHT);
        let y = draw_banner(fb, y);
        let y = draw_towers(fb, snap, y + 1);

        draw_centered(fb, y + 1, HELP_KEYS);
        draw_centered(fb, y + 2, HELP_GOAL);

        let style = CellStyle::default();
        let counter_x = fb.width().saturating_sub(SCENE_WIDTH) / 2;
        fb.put_str(counter_x, y + 4, "Moves: ", style);
        fb.put_u32(counter_x + 7, y + 4, snap.moves, style);

        draw_centered(fb, y + 5, HELP_QUIT);
    }

    fn draw_won(&self, snap: &GameSnapshot, fb: &mut FrameBuffer) {
        if !self.scene_fits(fb, SCENE_WIDTH, WIN_HEIGHT) {
            let mid = fb.height() / 2;
            draw_centered(fb, mid, "Congratulations! Press any key to exit.");
            return;
        }

        let y = self.block_top(fb, WIN_HEIGHT);
        let y = draw_banner(fb, y);
        let y = draw_towers(fb, snap, y + 1);

        draw_centered(fb, y + 1, "Congratulations!");
        draw_centered(fb, y + 2, "You have won the game.");
        draw_centered(fb, y + 3, "Press any key to exit.");
    }

    fn scene_fits(&self, fb: &FrameBuffer, block_w: u16, block_h: u16) -> bool {
        fb.width() >= block_w && fb.height() >= block_h
    }

    fn block_top(&self, fb: &FrameBuffer, block_h: u16) -> u16 {
        match self.anchor_y {
            AnchorY::Center => fb.height().saturating_sub(block_h) / 2,
            AnchorY::Top => 0,
        }
    }
}

/// Draw the three-line title banner; returns the row below it.
fn draw_banner(fb: &mut FrameBuffer, y: u16) -> u16 {
    for (i, line) in BANNER.iter().enumerate() {
        draw_centered(fb, y + i as u16, line);
    }
    y + BANNER.len() as u16
}

/// Draw the towers, base plates and key labels; returns the row below them.
fn draw_towers(fb: &mut FrameBuffer, snap: &GameSnapshot, y: u16) -> u16 {
    let scene_x = fb.width().saturating_sub(SCENE_WIDTH) / 2;
    let base_style = CellStyle::text(Rgb::new(77, 77, 77));

    for (t, label) in PegLabel::ALL.iter().enumerate() {
        let tower_x = scene_x + (t as u16) * (TOWER_WIDTH + TOWER_GAP);

        // Disk rows, slot 0 at the top. Empty slots stay background.
        for (s, slot) in snap.pegs[t].iter().enumerate() {
            if let Some(disk) = slot {
                let w = disk_width(*disk);
                let pad = (TOWER_WIDTH - w) / 2;
                let style = CellStyle::text(disk_color(*disk));
                fb.fill_rect(tower_x + pad, y + s as u16, w, 1, '█', style);
            }
        }

        let base_y = y + DISK_COUNT as u16;
        fb.fill_rect(tower_x, base_y, TOWER_WIDTH, 1, '█', base_style);

        // Command key centered under the base plate.
        fb.put_char(
            tower_x + TOWER_WIDTH / 2,
            base_y + 1,
            label.as_char(),
            CellStyle::default(),
        );
    }

    y + DISK_COUNT as u16 + 2
}

fn draw_centered(fb: &mut FrameBuffer, y: u16, s: &str) {
    let w = s.chars().count() as u16;
    let x = fb.width().saturating_sub(w) / 2;
    fb.put_str(x, y, s, CellStyle::default());
}

fn disk_width(disk: Disk) -> u16 {
    match disk {
        Disk::Small => 7,
        Disk::Medium => 11,
        Disk::Large => 15,
    }
}

fn disk_color(disk: Disk) -> Rgb {
    match disk {
        Disk::Small => Rgb::new(255, 0, 0),
        Disk::Medium => Rgb::new(255, 128, 0),
        Disk::Large => Rgb::new(255, 255, 0),
    }
}
