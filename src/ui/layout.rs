//! Screen geometry shared by drawing and mouse hit-testing.

use ratatui::layout::{Constraint, Direction, Layout, Margin, Position, Rect};

use crate::board::{BOARD_SIZE, BOARD_WIDTH};

pub const CELL_WIDTH: u16 = 7;
pub const CELL_HEIGHT: u16 = 3;
const BOARD_PIXEL_WIDTH: u16 = CELL_WIDTH * BOARD_WIDTH as u16;
const BOARD_PIXEL_HEIGHT: u16 = CELL_HEIGHT * BOARD_WIDTH as u16;
const LOG_PANEL_HEIGHT: u16 = 8;
// Every snapshot of a full game (10) plus the list border.
const BODY_MIN_HEIGHT: u16 = BOARD_SIZE as u16 + 3;

/// Where every widget goes for a given terminal area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewLayout {
    pub title: Rect,
    pub status: Rect,
    pub board: Rect,
    pub cells: [Rect; BOARD_SIZE],
    pub moves: Rect,
    pub help: Rect,
    pub logs: Option<Rect>,
}

impl ViewLayout {
    pub fn new(area: Rect, show_logs: bool) -> Self {
        let mut constraints = vec![
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(BODY_MIN_HEIGHT),
            Constraint::Length(3),
        ];
        if show_logs {
            constraints.push(Constraint::Length(LOG_PANEL_HEIGHT));
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(BOARD_PIXEL_WIDTH),
                Constraint::Length(2),
                Constraint::Min(24),
            ])
            .split(rows[2]);

        let board = Rect::new(
            body[0].x,
            body[0].y,
            body[0].width,
            BOARD_PIXEL_HEIGHT.min(body[0].height),
        );

        let cells = std::array::from_fn(|i| {
            let row = (i / BOARD_WIDTH) as u16;
            let col = (i % BOARD_WIDTH) as u16;
            Rect::new(
                board.x.saturating_add(col * CELL_WIDTH),
                board.y.saturating_add(row * CELL_HEIGHT),
                CELL_WIDTH,
                CELL_HEIGHT,
            )
            .intersection(board)
        });

        Self {
            title: rows[0],
            status: rows[1],
            board,
            cells,
            moves: body[2],
            help: rows[3],
            logs: show_logs.then(|| rows[4]),
        }
    }

    /// Board cell under a screen position.
    pub fn cell_at(&self, pos: Position) -> Option<usize> {
        self.cells
            .iter()
            .position(|cell| !cell.is_empty() && cell.contains(pos))
    }

    /// Inner area of the bordered move list.
    pub fn moves_inner(&self) -> Rect {
        self.moves.inner(Margin::new(1, 1))
    }

    /// History entry under a screen position, given how many entries exist.
    pub fn move_entry_at(&self, pos: Position, entries: usize) -> Option<usize> {
        let inner = self.moves_inner();
        if !inner.contains(pos) {
            return None;
        }

        let index = (pos.y - inner.y) as usize;
        (index < entries).then_some(index)
    }
}
