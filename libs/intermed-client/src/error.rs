//! Error types for intermed-client

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Client errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP transport error: {0}")]
    Transport(String),

    #[error("Request to {url} timed out")]
    Timeout { url: String },

    #[error("Deadline elapsed before the call completed")]
    DeadlineElapsed,

    #[error("Unexpected HTTP status {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Failed to decode {context}: {source}")]
    Decode {
        context: String,
        /// Extracted response body, kept for diagnosis
        body: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Remote service rejected {operation}: [{code}] {message}")]
    Remote {
        operation: String,
        code: i64,
        message: String,
    },

    #[error("No session id held; call login first")]
    NotLoggedIn,

    #[error("Session details not loaded; call fetch_session_details first")]
    SessionDetailsMissing,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid header {name}: {reason}")]
    InvalidHeader { name: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn decode(context: impl Into<String>, body: &str, source: serde_json::Error) -> Self {
        Error::Decode {
            context: context.into(),
            body: body.to_string(),
            source,
        }
    }

    /// True for failures raised before or while talking to the remote host.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Transport(_) | Error::Timeout { .. } | Error::DeadlineElapsed
        )
    }

    /// Raw response body attached to a decoding failure, if any.
    pub fn body(&self) -> Option<&str> {
        match self {
            Error::Decode { body, .. } => Some(body),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout {
                url: err
                    .url()
                    .map(|u| u.to_string())
                    .unwrap_or_default(),
            }
        } else {
            Error::Transport(err.to_string())
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::InvalidUrl(err.to_string())
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Error::Config(err.to_string())
    }
}
