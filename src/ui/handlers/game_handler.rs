//! Game state transitions driven by the view.

use crate::history::MoveOutcome;

use super::super::app::App;

/// Helper struct for forwarding board and history clicks to the game history.
pub struct GameHandler<'a> {
    app: &'a mut App,
}

impl<'a> GameHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Place the next mark on the displayed board. Invalid cells are ignored.
    pub fn play(&mut self, index: usize) -> MoveOutcome {
        self.app.history.apply_move(index)
    }

    pub fn jump(&mut self, target: usize) -> bool {
        self.app.history.jump_to(target)
    }

    pub fn step_back(&mut self) -> bool {
        match self.app.history.cursor().checked_sub(1) {
            Some(target) => self.jump(target),
            None => false,
        }
    }

    pub fn step_forward(&mut self) -> bool {
        let target = self.app.history.cursor() + 1;
        self.jump(target)
    }

    pub fn jump_to_start(&mut self) -> bool {
        self.jump(0)
    }

    pub fn jump_to_latest(&mut self) -> bool {
        let target = self.app.history.len().saturating_sub(1);
        self.jump(target)
    }
}
