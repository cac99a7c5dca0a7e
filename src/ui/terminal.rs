//! Terminal setup and teardown.

use std::io::Write;

use crossterm::{
    cursor::Show,
    event::DisableMouseCapture,
    execute,
    terminal::{LeaveAlternateScreen, disable_raw_mode},
};

/// Restores the terminal when dropped, on every exit path.
///
/// Create it right after raw mode is enabled. Restore errors are logged and
/// otherwise ignored so they never hide the error that caused the exit.
pub struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        restore(&mut self.out);
    }
}

/// Leave raw mode, the alternate screen and mouse capture, and show the cursor.
pub fn restore(out: &mut impl Write) {
    if let Err(e) = disable_raw_mode() {
        tracing::warn!(error = %e, "failed to disable raw mode");
    }
    if let Err(e) = execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show) {
        tracing::warn!(error = %e, "failed to restore terminal");
    }
}
