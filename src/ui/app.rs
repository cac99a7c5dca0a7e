use std::{cell::Cell as Flag, fmt::Display, io::Stdout, rc::Rc};

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use tracing::info;

use crate::history::{GameHistory, HistoryChange};

use super::{handlers::InputHandler, rendering::moves::move_label, types::LogBuffer};

/// Main application state container.
pub struct App {
    pub(in crate::ui) history: GameHistory,
    pub(in crate::ui) logs: LogBuffer,
    pub(in crate::ui) show_logs: bool,
    pub(in crate::ui) viewport: Rect,
    pub(in crate::ui) dirty: Rc<Flag<bool>>,
}

impl App {
    pub fn new(logs: LogBuffer, show_logs: bool) -> Self {
        let dirty = Rc::new(Flag::new(true));
        let mut history = GameHistory::new();

        let flag = Rc::clone(&dirty);
        let sink = logs.clone();
        history.subscribe(move |change| {
            flag.set(true);
            sink.push(describe(change));
        });

        Self {
            history,
            logs,
            show_logs,
            viewport: Rect::default(),
            dirty,
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        info!("UI started");
        self.log("UI started");

        loop {
            if self.dirty.replace(false) {
                let frame = terminal.draw(|f| self.draw(f))?;
                self.viewport = frame.area;
            }

            match event::read()? {
                Event::Key(key) => {
                    if InputHandler::new(self).handle_key(key) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => InputHandler::new(self).handle_mouse(mouse),
                Event::Resize(..) => self.mark_dirty(),
                _ => {}
            }
        }
    }

    pub(in crate::ui) fn mark_dirty(&self) {
        self.dirty.set(true);
    }

    pub(in crate::ui) fn log(&self, msg: impl Into<String> + Display) {
        tracing::info!("{}", &msg);
        self.logs.push(msg);
    }
}

fn describe(change: &HistoryChange) -> String {
    match *change {
        HistoryChange::MovePlayed {
            index,
            mark,
            cursor,
        } => format!("{} played cell {} (move #{})", mark, index + 1, cursor),
        HistoryChange::Jumped { cursor } => format!("Jumped: {}", move_label(cursor)),
    }
}
