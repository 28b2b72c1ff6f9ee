//! File logging. The terminal belongs to the UI, so `tracing` output goes to
//! a log file instead of stderr.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

use crate::config::{self, LogSettings};

/// Environment variable holding a filter that overrides `log.filter`.
pub const LOG_ENV: &str = "MINITUNE_LOG";

pub fn log_file_path(settings: &LogSettings) -> Option<PathBuf> {
    settings.file.clone().or_else(config::default_log_path)
}

/// Install the global subscriber. Returns the log file in use, or `None`
/// when no location could be resolved.
pub fn init(settings: &LogSettings) -> io::Result<Option<PathBuf>> {
    let Some(path) = log_file_path(settings) else {
        return Ok(None);
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(
            EnvFilter::try_from_env(LOG_ENV)
                .unwrap_or_else(|_| EnvFilter::new(&settings.filter)),
        )
        .try_init()
        .map_err(|e| io::Error::other(e.to_string()))?;

    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_file_wins_over_default() {
        let settings = LogSettings {
            file: Some(PathBuf::from("/tmp/minitune-test.log")),
            ..LogSettings::default()
        };
        assert_eq!(
            log_file_path(&settings),
            Some(PathBuf::from("/tmp/minitune-test.log"))
        );
    }
}
