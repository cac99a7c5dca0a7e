pub mod args;
pub mod board;
pub mod history;
pub mod logging;
pub mod ui;
pub mod winner;

pub use board::{Board, Cell, Mark};
pub use history::{GameHistory, HistoryChange, MoveOutcome, Rejection, Status};
pub use winner::detect_winner;
