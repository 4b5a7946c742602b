//! Terminal Tetris runner (default binary).
//!
//! Plays the engine in a terminal: crossterm for input, the framebuffer
//! renderer for output, and a fixed-step loop that drives gravity.
//! Configuration comes from `TETRIS_*` environment variables.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use offline_tetris::core::BoardSnapshot;
use offline_tetris::input::{should_quit, InputHandler};
use offline_tetris::term::{FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};
use offline_tetris::{logging, Config, Session};

/// Fixed loop step (~60 FPS).
const TICK_MS: u32 = 16;

/// Redraw an unchanged frame at least this often.
const REFRESH_MS: u64 = 500;

fn main() -> Result<()> {
    let config = Config::from_env();
    logging::init(config.log_path.as_deref())?;
    info!(
        seed = config.seed,
        gravity_ms = config.gravity_ms,
        randomizer = ?config.randomizer,
        "starting"
    );

    let mut term = TerminalRenderer::new();
    let key_releases = term.enter()?;

    let result = run(&mut term, &config, key_releases);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &Config, key_releases: bool) -> Result<()> {
    let input = if key_releases {
        InputHandler::new()
    } else {
        InputHandler::new().with_key_release_timeout_ms(config.key_release_timeout_ms)
    };

    let mut session = Session::new(config.piece_source(), config.gravity_ms).with_input(input);
    session.start();

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = BoardSnapshot::default();
    let mut throttle = RenderThrottle::new(REFRESH_MS);

    let started = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        session.snapshot_into(&mut snap);
        if throttle.should_render(started.elapsed().as_millis() as u64, &snap) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            break;
                        }
                        session.key_down(key.code);
                    }
                    KeyEventKind::Repeat => {
                        // Device auto-repeat; a held key acts once.
                    }
                    KeyEventKind::Release => session.key_up(key.code),
                },
                Event::Resize(_, _) => {
                    term.invalidate();
                    throttle.invalidate();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick(TICK_MS);
        }
    }

    session.stop();
    info!(
        lines = session.game().lines_removed(),
        pieces = session.game().pieces_placed(),
        "quit"
    );
    Ok(())
}
