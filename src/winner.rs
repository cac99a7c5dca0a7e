//! Win detection over the eight fixed lines.

use crate::board::{Board, Cell, Mark};

/// Rows, then columns, then diagonals. Earlier lines take precedence.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// First line fully held by one mark, in [`WINNING_LINES`] order.
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    let cells = board.cells();

    WINNING_LINES.iter().copied().find(|&[a, b, c]| {
        cells[a] != Cell::Empty && cells[a] == cells[b] && cells[a] == cells[c]
    })
}

/// Mark occupying the first complete line, if any.
///
/// A full board without a complete line is simply `None`; there is no draw.
pub fn detect_winner(board: &Board) -> Option<Mark> {
    winning_line(board).and_then(|[a, _, _]| board.cells()[a].mark())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::parse_board;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(detect_winner(&Board::empty()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = parse_board("XXX______").unwrap();
        assert_eq!(detect_winner(&board), Some(Mark::X));
        assert_eq!(winning_line(&board), Some([0, 1, 2]));
    }

    #[test]
    fn test_winner_left_column() {
        let board = parse_board("O__O__O__").unwrap();
        assert_eq!(detect_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = parse_board("__X_X_X__").unwrap();
        assert_eq!(winning_line(&board), Some([2, 4, 6]));
    }

    #[test]
    fn test_full_board_without_line_has_no_winner() {
        let board = parse_board("XOXOXOOXO").unwrap();
        assert!(board.is_full());
        assert_eq!(detect_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = parse_board("XXO______").unwrap();
        assert_eq!(detect_winner(&board), None);
    }

    #[test]
    fn test_first_line_wins_on_artificial_tie() {
        // Bottom row for O comes after top row for X.
        let board = parse_board("XXX___OOO").unwrap();
        assert_eq!(detect_winner(&board), Some(Mark::X));
    }
}
