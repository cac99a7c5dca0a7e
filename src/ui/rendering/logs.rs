//! Log panel: the newest moves and jumps, timestamps dimmed.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::app::App;

/// Splits a `LogBuffer` line into its timestamp and message.
fn log_line(entry: &str) -> Line<'_> {
    match entry.split_once(' ') {
        Some((time, msg)) => Line::from(vec![
            Span::styled(time, Style::default().fg(Color::DarkGray)),
            Span::raw(" "),
            Span::raw(msg),
        ]),
        None => Line::from(entry),
    }
}

impl App {
    pub(in crate::ui) fn draw_logs(&self, f: &mut Frame, area: Rect) {
        let entries = self.logs.lines();
        let visible = area.height.saturating_sub(2) as usize;
        let skip = entries.len().saturating_sub(visible);

        let lines: Vec<Line> = entries.iter().skip(skip).map(|e| log_line(e)).collect();
        let title = format!("Logs ({})", entries.len());

        f.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title)),
            area,
        );
    }
}
