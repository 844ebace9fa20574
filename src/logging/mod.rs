//! Tracing subscriber initialization.
//!
//! The TUI owns the terminal, so diagnostics (transport failures, health
//! outcomes, stale lookups) are written to a file instead. Users can monitor
//! them via `tail -f` in a separate terminal.

use crate::config::ResolvedConfig;
use reqwest::Url;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Crates under the HTTP client that log every connection at debug/info.
pub const HTTP_STACK_TARGETS: &[&str] = &["reqwest", "hyper", "hyper_util", "h2", "rustls"];

/// Filter directives used when `RUST_LOG` is unset.
///
/// Everything at info, except the HTTP stack which is capped at warn so a
/// lookup is one line in the log rather than a connection trace.
pub fn default_directives() -> String {
    std::iter::once("info".to_string())
        .chain(HTTP_STACK_TARGETS.iter().map(|target| format!("{target}=warn")))
        .collect::<Vec<_>>()
        .join(",")
}

/// Error type for logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to create log directory
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// The directory path that failed to be created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid log file path (no filename component)
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// Log path has no parent directory
    #[error("Log path has no parent directory: {0:?}")]
    NoParentDirectory(PathBuf),

    /// Tracing subscriber already initialized
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Initialize the tracing subscriber with file-based logging.
///
/// Logs are written to a file for users to monitor with `tail -f`.
/// Respects RUST_LOG environment variable, defaults to [`default_directives`].
///
/// Creates the log directory if it doesn't exist.
///
/// # Errors
///
/// Fails if the subscriber was already initialized or the directory could
/// not be created.
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    // Create log directory if it doesn't exist
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| LoggingError::DirectoryCreation {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    // Get log file name and directory
    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;

    let directory = log_path
        .parent()
        .ok_or_else(|| LoggingError::NoParentDirectory(log_path.to_path_buf()))?;

    // Create file appender
    let file_appender = tracing_appender::rolling::never(directory, file_name);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives()));

    // Initialize subscriber with file output
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(file_appender)
        .with_ansi(false) // No ANSI colors in log files
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}

/// Record the session's service endpoint and client settings.
///
/// `base_url` is the normalised URL the client will join paths onto, which
/// can differ from the configured text (trailing slash, whitespace).
pub fn log_session_start(base_url: &Url, config: &ResolvedConfig) {
    let examples: Vec<u64> = config.example_member_ids.iter().map(|id| id.get()).collect();
    info!(
        base_url = %base_url,
        timeout_ms = config.request_timeout.map(|t| t.as_millis() as u64),
        examples = ?examples,
        banner_hold_ms = config.banner_timings.hold.as_millis() as u64,
        log_file = %config.log_file_path.display(),
        "session started"
    );
}
