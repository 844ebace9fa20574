//! Error types for the skillforge client.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - startup and terminal failures that end the program
//! - [`LookupError`] - everything that can go wrong during one search. Every
//!   variant ends in exactly one error-panel update and never escapes the
//!   search operation.
//! - [`TransportError`] - a request that never completed into a usable reply
//!
//! There are no retries anywhere: a failed lookup needs a new user-initiated
//! search.

use super::identifiers::{InvalidMemberId, MemberId};
use super::outcome::{not_found_message, OperationOutcome};
use crate::config::ConfigError;
use crate::logging::LoggingError;
use thiserror::Error;

/// Shown for validation failures (empty or malformed identifier).
pub const VALIDATION_MESSAGE: &str = "Please enter a valid member ID.";

/// Shown whenever the request could not complete. The underlying error is
/// logged, never displayed.
pub const CONNECTION_ERROR_MESSAGE: &str =
    "Connection error — verify the server is running.";

/// Fallback for non-2xx replies without an `error` field.
pub const GENERIC_FAILURE_MESSAGE: &str = "Error while retrieving data.";

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Log file or tracing subscriber could not be set up.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Configured base URL is not a valid absolute URL.
    #[error("Invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl {
        /// The rejected value.
        url: String,
        /// Parser message.
        reason: String,
    },

    /// HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// A request to the recommendation service that never completed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Connection refused, DNS failure, reset, timeout...
    #[error("request to {url} failed: {reason}")]
    Request {
        /// Target URL.
        url: String,
        /// Underlying error text.
        reason: String,
    },

    /// The reply body was not valid JSON.
    #[error("invalid JSON from {url}: {reason}")]
    Decode {
        /// Target URL.
        url: String,
        /// Decoder message.
        reason: String,
    },
}

/// Failure of a single search operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Bad or empty input, handled locally. Never reaches the network.
    #[error("invalid member ID: {0}")]
    Validation(#[from] InvalidMemberId),

    /// The service answered 404 for this member.
    #[error("member {0} not found")]
    NotFound(MemberId),

    /// 2xx without the expected data, or non-2xx with a server message.
    #[error("{0}")]
    Domain(String),

    /// The request could not complete.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl LookupError {
    /// Text displayed in the error panel.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(_) => VALIDATION_MESSAGE.to_string(),
            Self::NotFound(id) => not_found_message(*id),
            Self::Domain(message) => message.clone(),
            Self::Transport(_) => CONNECTION_ERROR_MESSAGE.to_string(),
        }
    }
}

impl From<LookupError> for OperationOutcome {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::NotFound(id) => Self::NotFound(id),
            other => Self::Failure(other.user_message()),
        }
    }
}
