//! Keyboard and mouse handling.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

use super::super::{app::App, layout::ViewLayout};
use super::GameHandler;

/// Helper struct for managing keyboard input and mouse clicks.
pub struct InputHandler<'a> {
    app: &'a mut App,
}

impl<'a> InputHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Returns `true` when the user asked to exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('c' | 'C' | 'q' | 'Q'), KeyModifiers::CONTROL) => {
                self.app.log("Exit requested");
                return true;
            }

            (KeyCode::Char('q' | 'Q'), _) | (KeyCode::Esc, _) => {
                self.app.log("Exit requested");
                return true;
            }

            (KeyCode::Char(c @ '1'..='9'), _) => {
                // Keys 1-9 map to cells 0-8, row-major like a phone keypad.
                let index = (c as u8 - b'1') as usize;
                GameHandler::new(self.app).play(index);
            }

            (KeyCode::Up | KeyCode::Left, _) => {
                GameHandler::new(self.app).step_back();
            }

            (KeyCode::Down | KeyCode::Right, _) => {
                GameHandler::new(self.app).step_forward();
            }

            (KeyCode::Home, _) => {
                GameHandler::new(self.app).jump_to_start();
            }

            (KeyCode::End, _) => {
                GameHandler::new(self.app).jump_to_latest();
            }

            (KeyCode::Char('l' | 'L'), _) => {
                self.app.show_logs = !self.app.show_logs;
                self.app.mark_dirty();
            }

            _ => {}
        }
        false
    }

    /// Left clicks on a board cell play a move; on a history entry they jump.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let layout = ViewLayout::new(self.app.viewport, self.app.show_logs);
        let pos = Position::new(mouse.column, mouse.row);

        if let Some(index) = layout.cell_at(pos) {
            GameHandler::new(self.app).play(index);
        } else if let Some(target) = layout.move_entry_at(pos, self.app.history.len()) {
            GameHandler::new(self.app).jump(target);
        }
    }
}
