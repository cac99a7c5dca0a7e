use std::fmt;

pub const BOARD_SIZE: usize = 9;
pub const BOARD_WIDTH: usize = 3;

/// A player's mark.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Mark whose turn it is when `cursor` moves have been played.
    pub fn for_cursor(cursor: usize) -> Self {
        if cursor % 2 == 0 { Mark::X } else { Mark::O }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Marked(Mark),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => write!(f, " "),
            Cell::Marked(mark) => write!(f, "{mark}"),
        }
    }
}

/// One immutable board state, indexed 0-8 in row-major order.
///
/// Placing a mark never touches an existing board; [`Board::with_mark`]
/// hands back a fresh copy instead.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Hash)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(BOARD_WIDTH)
    }

    /// Returns a new board with `mark` at `index`.
    ///
    /// Callers are expected to have checked that `index` is in range and
    /// the cell is empty; `None` is returned otherwise.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Option<Self> {
        match self.get(index) {
            Some(Cell::Empty) => {
                let mut cells = self.cells;
                cells[index] = Cell::Marked(mark);
                Some(Self { cells })
            }
            _ => None,
        }
    }
}

#[cfg(test)]
impl Board {
    pub(crate) fn marked_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    pub(crate) fn is_full(&self) -> bool {
        self.marked_count() == BOARD_SIZE
    }
}

/// Builds a board from a 9-character pattern of `X`, `O` and `_`/`.`/space.
#[cfg(test)]
pub(crate) fn parse_board(pattern: &str) -> anyhow::Result<Board> {
    let cells: Vec<Cell> = pattern
        .chars()
        .map(|c| match c.to_ascii_uppercase() {
            '_' | '.' | ' ' => Ok(Cell::Empty),
            'X' => Ok(Cell::Marked(Mark::X)),
            'O' => Ok(Cell::Marked(Mark::O)),
            bad => Err(anyhow::anyhow!("invalid board character: {}", bad)),
        })
        .collect::<anyhow::Result<_>>()?;

    let cells: [Cell; BOARD_SIZE] = cells
        .try_into()
        .map_err(|v: Vec<Cell>| anyhow::anyhow!("expected {} cells, got {}", BOARD_SIZE, v.len()))?;

    Ok(Board { cells })
}
