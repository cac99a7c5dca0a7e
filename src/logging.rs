//! File-backed tracing setup. The terminal belongs to the UI, so nothing is
//! written to stdout or stderr while the game runs.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_NAME: &str = "tic-tac-toe.log";

/// Resolve the log directory: explicit path, else the platform data dir,
/// else `./logs`.
pub fn resolve_log_dir(explicit: Option<&Path>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }

    match dirs::data_local_dir() {
        Some(mut path) => {
            path.push("tic-tac-toe");
            path.push("logs");
            path
        }
        None => PathBuf::from("logs"),
    }
}

/// Create the log directory if needed and return the full log file path.
pub fn prepare_log_dir(dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    Ok(dir.join(LOG_FILE_NAME))
}

/// Install the global subscriber. Keep the returned guard alive until exit
/// or buffered lines are lost.
pub fn init(dir: &Path, default_level: &str) -> Result<WorkerGuard> {
    prepare_log_dir(dir)?;

    let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .context("Invalid log level")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_dir_wins() {
        let dir = resolve_log_dir(Some(Path::new("/tmp/somewhere")));
        assert_eq!(dir, PathBuf::from("/tmp/somewhere"));
    }

    #[test]
    fn test_default_dir_ends_with_logs() {
        let dir = resolve_log_dir(None);
        assert!(dir.ends_with("logs"));
    }

    #[test]
    fn test_prepare_log_dir_creates_nested_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a").join("b");

        let file = prepare_log_dir(&nested).unwrap();

        assert!(nested.is_dir());
        assert_eq!(file, nested.join(LOG_FILE_NAME));
    }
}
