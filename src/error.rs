//! Error types for authz-header
//!
//! `ParseError` is the closed taxonomy of ways an `Authorization` header value
//! can be rejected. `Error` wraps it together with the failures of the
//! surrounding tooling (file input, JSON output, CLI configuration).

use crate::auth::Rejection;
use thiserror::Error;

/// Why a header value was rejected by the parser
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid scheme: the scheme is missing")]
    MissingScheme,

    #[error("invalid scheme: scheme with name '{token}' is unknown")]
    UnknownScheme { token: String },

    #[error("invalid value: failed to decode base64 basic scheme value: {0}")]
    MalformedBase64(#[source] base64::DecodeError),

    #[error("invalid value: no username/password separator in the decoded basic scheme value")]
    MissingCredentialSeparator,

    #[error("invalid value: the username in the decoded basic scheme value is empty")]
    EmptyUsername,

    #[error("invalid value: the password in the decoded basic scheme value is empty")]
    EmptyPassword,

    #[error("invalid value: {context} is not valid UTF-8")]
    InvalidUtf8 { context: &'static str },
}

impl ParseError {
    /// Create an unknown scheme error
    pub fn unknown_scheme(token: impl Into<String>) -> Self {
        Self::UnknownScheme {
            token: token.into(),
        }
    }

    /// Parse failures are deterministic; retrying the same input never succeeds
    pub fn is_retryable(&self) -> bool {
        false
    }
}

/// The main error type for authz-header
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Parse Errors
    // ============================================================================
    #[error(transparent)]
    Parse(#[from] Rejection),

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

/// Result type alias for authz-header
pub type Result<T> = std::result::Result<T, Error>;
