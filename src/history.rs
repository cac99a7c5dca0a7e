//! Board snapshots, the cursor into them, and the two operations that move
//! the game forward or back in time.

use std::fmt;

use tracing::{debug, info};

use crate::{
    board::{BOARD_SIZE, Board, Cell, Mark},
    winner::detect_winner,
};

/// Why a move was ignored.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Rejection {
    OutOfRange,
    Occupied,
    GameOver,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Placed {
        index: usize,
        mark: Mark,
        cursor: usize,
    },
    Rejected(Rejection),
}

/// Notification sent to subscribers after the history or cursor changed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HistoryChange {
    MovePlayed {
        index: usize,
        mark: Mark,
        cursor: usize,
    },
    Jumped {
        cursor: usize,
    },
}

/// Status line for a displayed snapshot.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Status {
    Winner(Mark),
    NextPlayer(Mark),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Winner(mark) => write!(f, "Winner: {mark}"),
            Status::NextPlayer(mark) => write!(f, "Next player: {mark}"),
        }
    }
}

/// Derives the status from a snapshot and the cursor it is displayed at.
///
/// Whose turn it is comes from the cursor alone, not from counting marks.
pub fn status(board: &Board, cursor: usize) -> Status {
    match detect_winner(board) {
        Some(mark) => Status::Winner(mark),
        None => Status::NextPlayer(Mark::for_cursor(cursor)),
    }
}

type Subscriber = Box<dyn FnMut(&HistoryChange)>;

/// Ordered board snapshots plus the index of the one on display.
///
/// Element 0 is always the empty board and each later element adds exactly
/// one mark to its predecessor.
pub struct GameHistory {
    snapshots: Vec<Board>,
    cursor: usize,
    subscribers: Vec<Subscriber>,
}

impl GameHistory {
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::empty()],
            cursor: 0,
            subscribers: Vec::new(),
        }
    }

    /// Registers a callback run after every successful move or jump.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&HistoryChange) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn current(&self) -> &Board {
        &self.snapshots[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of snapshots, never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    pub fn next_mark(&self) -> Mark {
        Mark::for_cursor(self.cursor)
    }

    pub fn winner(&self) -> Option<Mark> {
        detect_winner(self.current())
    }

    pub fn status(&self) -> Status {
        status(self.current(), self.cursor)
    }

    /// Places the next mark at `index` on the displayed snapshot.
    ///
    /// Occupied cells, out-of-range indices and finished games leave the
    /// history untouched. Any snapshots after the cursor are dropped before
    /// the new one is appended.
    pub fn apply_move(&mut self, index: usize) -> MoveOutcome {
        if index >= BOARD_SIZE {
            return self.reject(index, Rejection::OutOfRange);
        }
        if !self.current().get(index).is_some_and(Cell::is_empty) {
            return self.reject(index, Rejection::Occupied);
        }
        if self.winner().is_some() {
            return self.reject(index, Rejection::GameOver);
        }

        let mark = self.next_mark();
        let Some(next) = self.current().with_mark(index, mark) else {
            return self.reject(index, Rejection::Occupied);
        };

        let discarded = self.snapshots.len() - (self.cursor + 1);
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(next);
        self.cursor = self.snapshots.len() - 1;

        info!(index, %mark, cursor = self.cursor, discarded, "move played");

        self.notify(HistoryChange::MovePlayed {
            index,
            mark,
            cursor: self.cursor,
        });

        MoveOutcome::Placed {
            index,
            mark,
            cursor: self.cursor,
        }
    }

    /// Moves the cursor to `target` without touching the snapshots.
    ///
    /// Returns `false` and does nothing when `target` is past the end.
    pub fn jump_to(&mut self, target: usize) -> bool {
        if target >= self.snapshots.len() {
            debug!(target, len = self.snapshots.len(), "jump ignored");
            return false;
        }

        self.cursor = target;
        info!(cursor = target, "jumped");
        self.notify(HistoryChange::Jumped { cursor: target });
        true
    }

    fn reject(&self, index: usize, reason: Rejection) -> MoveOutcome {
        debug!(index, ?reason, cursor = self.cursor, "move ignored");
        MoveOutcome::Rejected(reason)
    }

    fn notify(&mut self, change: HistoryChange) {
        for subscriber in &mut self.subscribers {
            subscriber(&change);
        }
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GameHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameHistory")
            .field("snapshots", &self.snapshots)
            .field("cursor", &self.cursor)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
