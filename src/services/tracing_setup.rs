//! Tracing subscriber setup for the `scratch` binary.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set
const DEFAULT_FILTER: &str = "scratch=info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber, writing to `log_file` if given and stderr otherwise
///
/// Calling this more than once is harmless; later calls leave the first subscriber
/// in place.
pub fn init_global(log_file: Option<&Path>) -> io::Result<()> {
    match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(io::stderr)
                .try_init();
        }
    }
    Ok(())
}
