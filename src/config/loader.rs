//! Configuration file loading with precedence handling.

use crate::model::MemberId;
use crate::state::notification::BannerTimings;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Base URL used when nothing else is configured (Flask's default port).
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "SKILLFORGE_CONFIG";

/// Environment variable overriding the service base URL.
pub const BASE_URL_ENV_VAR: &str = "SKILLFORGE_BASE_URL";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/skillforge/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Root URL of the recommendation service.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Per-request timeout in seconds. Unset means wait forever.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Member ids offered as F1..F9 shortcuts.
    #[serde(default)]
    pub example_member_ids: Option<Vec<u64>>,

    /// Notification banner timings.
    #[serde(default)]
    pub notifications: Option<NotificationsSection>,
}

/// `[notifications]` section.
///
/// ```toml
/// [notifications]
/// fade_in_ms = 100
/// hold_ms = 5000
/// fade_out_ms = 300
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct NotificationsSection {
    /// Delay before a new banner becomes visible.
    #[serde(default)]
    pub fade_in_ms: Option<u64>,

    /// Time from creation until the banner starts fading out.
    #[serde(default)]
    pub hold_ms: Option<u64>,

    /// Fade-out duration before the banner is removed.
    #[serde(default)]
    pub fade_out_ms: Option<u64>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Root URL of the recommendation service (validated later).
    pub base_url: String,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Per-request timeout, `None` for no timeout.
    pub request_timeout: Option<Duration>,
    /// Preset example shortcuts.
    pub example_member_ids: Vec<MemberId>,
    /// Banner lifecycle timings.
    pub banner_timings: BannerTimings,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            log_file_path: default_log_path(),
            request_timeout: None,
            example_member_ids: default_example_ids(),
            banner_timings: BannerTimings::default(),
        }
    }
}

fn default_example_ids() -> Vec<MemberId> {
    [1, 2, 3].into_iter().filter_map(|raw| MemberId::new(raw).ok()).collect()
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/skillforge/skillforge.log` on Linux, or the
/// platform equivalent. Falls back to the current directory when no state
/// directory is known.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("skillforge").join("skillforge.log")
    } else {
        PathBuf::from("skillforge.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/skillforge/config.toml` on Linux, appropriate path on
/// other platforms. Returns `None` if no config directory is known.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("skillforge").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `SKILLFORGE_CONFIG` environment variable
/// 3. Default path `~/.config/skillforge/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use
/// the default. Example ids of zero are dropped. A timeout of zero seconds
/// means no timeout.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    let banner_timings = match config.notifications {
        Some(section) => {
            let base = defaults.banner_timings;
            BannerTimings {
                fade_in: section.fade_in_ms.map_or(base.fade_in, Duration::from_millis),
                hold: section.hold_ms.map_or(base.hold, Duration::from_millis),
                fade_out: section.fade_out_ms.map_or(base.fade_out, Duration::from_millis),
            }
        }
        None => defaults.banner_timings,
    };

    ResolvedConfig {
        base_url: config.base_url.unwrap_or(defaults.base_url),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        request_timeout: config
            .request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs),
        example_member_ids: config
            .example_member_ids
            .map(|ids| ids.into_iter().filter_map(|raw| MemberId::new(raw).ok()).collect())
            .unwrap_or(defaults.example_member_ids),
        banner_timings,
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `SKILLFORGE_BASE_URL`: Override the service base URL
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(base_url) = std::env::var(BASE_URL_ENV_VAR) {
        if !base_url.trim().is_empty() {
            config.base_url = base_url;
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    base_url_override: Option<String>,
) -> ResolvedConfig {
    if let Some(base_url) = base_url_override {
        config.base_url = base_url;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
