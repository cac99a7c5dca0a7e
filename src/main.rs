use anyhow::Result;
use clap::Parser;
use tracing::info;

use tictactoe_timetravel::{args::Args, logging, ui::run_ui};

fn main() -> Result<()> {
    let args = Args::parse();

    let log_dir = logging::resolve_log_dir(args.log_dir.as_deref());
    let _guard = logging::init(&log_dir, &args.log_level)?;
    info!(log_dir = %log_dir.display(), "starting tic-tac-toe");

    run_ui(args.show_logs)
}
