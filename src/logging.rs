//! Tracing setup. The terminal belongs to the UI, so logs go to a file.

use anyhow::{anyhow, Context};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// `<cache_dir>/clipsum/clipsum.log`, or `./clipsum.log` when there is no
/// cache directory.
pub fn default_log_path() -> PathBuf {
    match dirs::cache_dir() {
        Some(dir) => dir.join("clipsum").join("clipsum.log"),
        None => PathBuf::from("clipsum.log"),
    }
}

/// Build the env filter: explicit `level` wins, then `RUST_LOG`, then `info`.
pub fn build_filter(level: Option<&str>) -> EnvFilter {
    match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    }
}

/// Install the global subscriber writing to `path` (appending).
pub fn init_tracing(path: &Path, level: Option<&str>) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory '{}'", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file '{}'", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(level))
        .with_target(true)
        .with_level(true)
        .with_thread_names(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(Arc::new(file))
        .try_init()
        .map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_log_path_ends_with_file_name() {
        assert!(default_log_path().ends_with("clipsum.log"));
    }

    #[test]
    fn explicit_level_is_used() {
        let filter = build_filter(Some("debug"));
        assert_eq!(filter.to_string(), "debug");
    }
}
