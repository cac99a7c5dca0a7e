mod app;
mod handlers;
mod layout;
mod rendering;
mod terminal;
mod types;

pub use app::App;
pub use layout::ViewLayout;
pub use rendering::moves::move_label;
pub use types::LogBuffer;

use anyhow::{Context, Result};
use crossterm::{
    event::EnableMouseCapture,
    execute,
    terminal::{EnterAlternateScreen, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::stdout;

use terminal::TerminalGuard;

/// Entry point for running the UI.
pub fn run_ui(show_logs: bool) -> Result<()> {
    let logs = LogBuffer::new();
    let mut app = App::new(logs, show_logs);

    enable_raw_mode().context("Failed to enable raw mode")?;
    let _guard = TerminalGuard::new(stdout());

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = app.run(&mut terminal);

    if let Err(ref e) = result {
        tracing::error!(error = %e, "UI exited with error");
    }

    result
}
