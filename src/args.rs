use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tic-tac-toe", about = "Tic-tac-toe with a clickable move history")]
pub struct Args {
    /// Directory for the log file (defaults to the platform data directory)
    #[arg(long, value_name = "PATH")]
    pub log_dir: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub log_level: String,

    /// Start with the log panel open
    #[arg(long)]
    pub show_logs: bool,
}
