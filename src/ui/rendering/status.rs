use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::{history::Status, ui::app::App};

impl App {
    pub(in crate::ui) fn draw_title(&self, f: &mut Frame, area: Rect) {
        f.render_widget(
            Paragraph::new("Tic Tac Toe")
                .alignment(Alignment::Center)
                .style(Style::default().add_modifier(Modifier::BOLD))
                .block(Block::default().borders(Borders::ALL)),
            area,
        );
    }

    pub(in crate::ui) fn draw_status(&self, f: &mut Frame, area: Rect) {
        let status = self.history.status();

        let color = match status {
            Status::Winner(_) => Color::Green,
            Status::NextPlayer(_) => Color::White,
        };

        f.render_widget(
            Paragraph::new(status.to_string())
                .alignment(Alignment::Center)
                .style(Style::default().fg(color))
                .block(Block::default().borders(Borders::ALL).title("Status")),
            area,
        );
    }

    pub(in crate::ui) fn draw_help(&self, f: &mut Frame, area: Rect) {
        let logs = if self.show_logs { "hide" } else { "show" };
        let help = format!(
            "Click a cell or 1-9: play | Click a move or ↑/↓: rewind | l: {} logs | q: quit",
            logs
        );

        f.render_widget(
            Paragraph::new(help)
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().borders(Borders::ALL)),
            area,
        );
    }
}
