use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Install the tracing subscriber for this run.
///
/// The terminal UI owns the screen, so an interactive run only logs when a
/// log file is configured. Batch runs fall back to stderr.
pub fn init(config: &Config) -> io::Result<()> {
    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter("info"))
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .try_init();
    } else if config.is_batch() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter("warn"))
            .with_writer(io::stderr)
            .try_init();
    }
    Ok(())
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}
