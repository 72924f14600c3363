//! API error types.

use thiserror::Error;

/// Coarse classification used by callers to decide how to react.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 401: the session is gone; local state must be cleared.
    Authentication,
    /// 403 that survived the CSRF retry policy.
    Authorization,
    /// Other 4xx: the server refused the input.
    Validation,
    RateLimited,
    Server,
    /// Connection, timeout, or TLS failure.
    Network,
    Decode,
}

/// Errors that can occur when talking to the evidence backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered 401.
    #[error("not authenticated: {message}")]
    Unauthorized { message: String },

    /// The backend answered 403.
    #[error("forbidden: {message}")]
    Forbidden {
        message: String,
        /// Whether the payload carried an anti-forgery rejection signature.
        csrf: bool,
    },

    /// Any other 4xx answer.
    #[error("request rejected ({status}): {message}")]
    Rejected {
        status: u16,
        message: String,
        /// Parsed JSON payload, when the body was JSON.
        body: Option<serde_json::Value>,
    },

    /// 5xx answer.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The backend returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success response whose body did not have the expected shape.
    #[error("could not decode response: {0}")]
    Decode(String),

    /// The export endpoint answered with an error document instead of a file.
    #[error("export failed: {0}")]
    Export(String),

    /// The configured base URL or a derived endpoint URL is malformed.
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl ApiError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Unauthorized { .. } => ErrorKind::Authentication,
            Self::Forbidden { .. } => ErrorKind::Authorization,
            Self::Rejected { .. } | Self::Export(_) | Self::InvalidUrl { .. } => {
                ErrorKind::Validation
            }
            Self::Server { .. } => ErrorKind::Server,
            Self::RateLimited { .. } => ErrorKind::RateLimited,
            Self::Transport(error) if error.is_decode() => ErrorKind::Decode,
            Self::Transport(_) => ErrorKind::Network,
            Self::Decode(_) => ErrorKind::Decode,
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.kind() == ErrorKind::Authentication
    }

    /// Best human-readable message: the server's own wording when it sent
    /// one, otherwise the error's display form.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Unauthorized { .. } => {
                "Your session has expired. Please log in again.".to_string()
            }
            Self::Forbidden { message, .. }
            | Self::Rejected { message, .. }
            | Self::Server { message, .. }
            | Self::Export(message) => message.clone(),
            Self::RateLimited { retry_after_secs } => {
                format!("Too many requests. Try again in {retry_after_secs}s.")
            }
            Self::Transport(_) => {
                "Could not reach the server. Check your connection.".to_string()
            }
            Self::Decode(_) | Self::InvalidUrl { .. } => self.to_string(),
        }
    }
}
