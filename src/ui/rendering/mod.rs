mod board;
mod logs;
pub mod moves;
mod status;

use ratatui::Frame;

use crate::ui::{app::App, layout::ViewLayout};

impl App {
    pub(in crate::ui) fn draw(&self, f: &mut Frame) {
        let layout = ViewLayout::new(f.area(), self.show_logs);

        self.draw_title(f, layout.title);
        self.draw_status(f, layout.status);
        self.draw_board(f, &layout);
        self.draw_moves(f, layout.moves);
        self.draw_help(f, layout.help);

        if let Some(area) = layout.logs {
            self.draw_logs(f, area);
        }
    }
}
