//! Session: the host side of one game.
//!
//! Owns the engine together with the collaborators the engine deliberately
//! leaves out: the debounced key source and the gravity timer. `start()` and
//! `stop()` mirror a view being opened and dismissed; a stopped session
//! ignores every event.

use crossterm::event::KeyCode;
use tracing::debug;

use crate::core::{BoardSnapshot, GameState, MoveOutcome, PieceSource};
use crate::input::InputHandler;
use crate::types::GameAction;

#[derive(Debug, Clone)]
pub struct Session {
    game: GameState,
    input: InputHandler,
    gravity_ms: u32,
    gravity_acc_ms: u32,
    running: bool,
}

impl Session {
    pub fn new(source: PieceSource, gravity_ms: u32) -> Self {
        Self::with_game(GameState::with_source(source), gravity_ms)
    }

    pub fn with_game(game: GameState, gravity_ms: u32) -> Self {
        Self {
            game,
            input: InputHandler::new(),
            gravity_ms,
            gravity_acc_ms: 0,
            running: false,
        }
    }

    /// Swap in a different input handler (e.g. one with auto-release).
    pub fn with_input(mut self, input: InputHandler) -> Self {
        self.input = input;
        self
    }

    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.gravity_acc_ms = 0;
        debug!(gravity_ms = self.gravity_ms, "session started");
    }

    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.input.reset();
        debug!(
            lines = self.game.lines_removed(),
            pieces = self.game.pieces_placed(),
            "session stopped"
        );
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut GameState {
        &mut self.game
    }

    /// Key-down from the host. Returns whether the game changed.
    pub fn key_down(&mut self, code: KeyCode) -> bool {
        if !self.running {
            return false;
        }
        match self.input.handle_key_press(code) {
            Some(action) => self.apply(action),
            None => false,
        }
    }

    /// Key-up from the host.
    pub fn key_up(&mut self, code: KeyCode) {
        if self.running {
            self.input.handle_key_release(code);
        }
    }

    /// Advance host timers by `elapsed_ms`.
    ///
    /// Returns how many gravity steps were applied.
    pub fn tick(&mut self, elapsed_ms: u32) -> u32 {
        if !self.running {
            return 0;
        }
        self.input.update(elapsed_ms);

        if self.gravity_ms == 0 || self.game.is_game_over() {
            self.gravity_acc_ms = 0;
            return 0;
        }

        self.gravity_acc_ms = self.gravity_acc_ms.saturating_add(elapsed_ms);
        let mut steps = 0;
        while self.gravity_acc_ms >= self.gravity_ms {
            self.gravity_acc_ms -= self.gravity_ms;
            steps += 1;
            if let MoveOutcome::Placed { .. } = self.game.move_tetromino(0, 1) {
                // A fresh piece starts with a full interval.
                self.gravity_acc_ms = 0;
                break;
            }
        }
        steps
    }

    fn apply(&mut self, action: GameAction) -> bool {
        let changed = self.game.apply_action(action);
        if changed && action == GameAction::Restart {
            self.gravity_acc_ms = 0;
        }
        changed
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.game.draw_board()
    }

    pub fn snapshot_into(&self, out: &mut BoardSnapshot) {
        self.game.draw_board_into(out);
    }
}
