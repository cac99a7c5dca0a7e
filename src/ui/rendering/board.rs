//! 3×3 grid rendering.

use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    board::{BOARD_WIDTH, Cell, Mark},
    ui::{app::App, layout::ViewLayout},
    winner::winning_line,
};

fn cell_style(cell: Cell, on_winning_line: bool) -> Style {
    if on_winning_line {
        return Style::default()
            .bg(Color::Green)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD);
    }

    match cell {
        Cell::Marked(Mark::X) => Style::default().fg(Color::Cyan),
        Cell::Marked(Mark::O) => Style::default().fg(Color::Magenta),
        Cell::Empty => Style::default(),
    }
    .add_modifier(Modifier::BOLD)
}

impl App {
    pub(in crate::ui) fn draw_board(&self, f: &mut Frame, layout: &ViewLayout) {
        let board = self.history.current();
        let line = winning_line(board);

        for (row, cells) in board.rows().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                let index = row * BOARD_WIDTH + col;
                let area = layout.cells[index];
                if area.is_empty() {
                    continue;
                }

                let highlighted = line.is_some_and(|l| l.contains(&index));

                f.render_widget(
                    Paragraph::new(cell.to_string())
                        .alignment(Alignment::Center)
                        .style(cell_style(cell, highlighted))
                        .block(Block::default().borders(Borders::ALL)),
                    area,
                );
            }
        }
    }
}
