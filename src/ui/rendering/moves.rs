//! Move list: one clickable entry per snapshot.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::{ui::app::App, winner::detect_winner};

/// Label for the history entry at `index`.
pub fn move_label(index: usize) -> String {
    if index == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{}", index)
    }
}

impl App {
    pub(in crate::ui) fn draw_moves(&self, f: &mut Frame, area: Rect) {
        let cursor = self.history.cursor();

        let lines: Vec<Line> = self
            .history
            .snapshots()
            .iter()
            .enumerate()
            .map(|(k, board)| {
                // Entries that end the game are shown in green.
                let mut style = match detect_winner(board) {
                    Some(_) => Style::default().fg(Color::Green),
                    None => Style::default(),
                };
                if k == cursor {
                    style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
                }
                Line::styled(move_label(k), style)
            })
            .collect();

        f.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Moves")),
            area,
        );
    }
}
