//! Input diagnostics: prints raw key events and what the debouncer makes of them.
//!
//! Useful for checking whether a terminal reports key releases. Press `q` to quit.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;

use offline_tetris::input::{should_quit, InputHandler};

fn main() -> Result<()> {
    let releases = terminal::supports_keyboard_enhancement().unwrap_or(false);
    println!("key release events supported: {releases}");
    println!("press keys (q to quit)\r");

    terminal::enable_raw_mode()?;
    let result = run();
    let _ = terminal::disable_raw_mode();
    result
}

fn run() -> Result<()> {
    let mut input = InputHandler::new();
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && should_quit(key) {
                return Ok(());
            }
            match key.kind {
                KeyEventKind::Press => {
                    let action = input.handle_key_press(key.code);
                    println!("press   {:?} -> {:?}\r", key.code, action);
                }
                KeyEventKind::Repeat => println!("repeat  {:?}\r", key.code),
                KeyEventKind::Release => {
                    input.handle_key_release(key.code);
                    println!("release {:?}\r", key.code);
                }
            }
        }
    }
}
