//! `tracing` subscriber setup.
//!
//! The terminal UI owns stdout, so it logs to a file; one-shot modes log to
//! stderr. `RUST_LOG` takes precedence over the configured level.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

const LOG_FILE_NAME: &str = "shelfview.log";

pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

impl LogTarget {
    /// The configured file, else `{cache_dir}/shelfview/shelfview.log`.
    pub fn file_for(config: &LoggingConfig) -> Self {
        let path = config.file.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("shelfview")
                .join(LOG_FILE_NAME)
        });
        LogTarget::File(path)
    }
}

pub fn init_tracing(config: &LoggingConfig, target: LogTarget) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_timer(UtcTime::rfc_3339());

    let result = match target {
        LogTarget::Stderr => builder.with_writer(io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = open_log_file(&path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };
    result.map_err(io::Error::other)
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_file_wins() {
        let config = LoggingConfig {
            file: Some(PathBuf::from("/tmp/custom.log")),
            ..LoggingConfig::default()
        };
        match LogTarget::file_for(&config) {
            LogTarget::File(path) => assert_eq!(path, PathBuf::from("/tmp/custom.log")),
            LogTarget::Stderr => panic!("expected file target"),
        }
    }

    #[test]
    fn default_file_lives_under_shelfview_dir() {
        match LogTarget::file_for(&LoggingConfig::default()) {
            LogTarget::File(path) => {
                assert!(path.ends_with("shelfview/shelfview.log"));
            }
            LogTarget::Stderr => panic!("expected file target"),
        }
    }

    #[test]
    fn log_file_parent_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(LOG_FILE_NAME);
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }
}
