//! Terminal Hanoi runner (default binary).
//!
//! This is the gameplay entrypoint. It owns the terminal session and the
//! phase-dispatch loop: render the current screen, block for input, drive
//! the engine. It uses crossterm for input and a custom framebuffer-based
//! renderer (no ratatui widgets/layout).

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use tui_hanoi::core::Game;
use tui_hanoi::input::{peg_for_key, should_quit};
use tui_hanoi::term::{GameView, TerminalRenderer, Viewport};
use tui_hanoi::types::{MoveCommand, Phase};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = Game::new();
    let view = GameView::default();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&game.snapshot(), Viewport::new(w, h));
        term.draw(&fb)?;

        match game.phase() {
            Phase::Greeting => {
                let key = next_key_press()?;
                if should_quit(key) {
                    return Ok(());
                }
                game.acknowledge_greeting();
            }
            Phase::AwaitingMove => {
                // A command is exactly two keystrokes, both read before any
                // validation. An unparsable pair is dropped exactly like an
                // illegal move: the loop silently redraws the prompt.
                let first = next_key_press()?;
                if should_quit(first) {
                    return Ok(());
                }
                let second = next_key_press()?;
                if should_quit(second) {
                    return Ok(());
                }

                if let (Some(from), Some(to)) = (peg_for_key(first), peg_for_key(second)) {
                    game.submit_command(MoveCommand::new(from, to));
                }
            }
            Phase::Won => {
                let key = next_key_press()?;
                if should_quit(key) {
                    return Ok(());
                }
                game.acknowledge_win();
            }
            Phase::Exiting => return Ok(()),
        }
    }
}

/// Block until a key press, skipping repeats, releases and non-key events.
fn next_key_press() -> Result<KeyEvent> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(key);
            }
        }
    }
}
