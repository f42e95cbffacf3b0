//! Parsed authorization types
//!
//! An `Authorization` is only ever produced by parsing, so there is no
//! observable "not yet parsed" state and no field can go stale between parses.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Authentication scheme of an `Authorization` header value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorizationScheme {
    /// Parsing failed or the scheme token is not recognized
    #[default]
    Invalid,
    /// Reserved; never produced by the parser
    Unknown,
    /// The header value was empty
    None,
    /// RFC 7617 Basic credentials
    Basic,
    /// RFC 6750 Bearer token
    Bearer,
}

impl AuthorizationScheme {
    /// Scheme tokens the parser recognizes
    pub const RECOGNIZED: [Self; 2] = [Self::Basic, Self::Bearer];

    /// Match a scheme token case-insensitively
    pub fn from_token(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("basic") {
            Some(Self::Basic)
        } else if token.eq_ignore_ascii_case("bearer") {
            Some(Self::Bearer)
        } else {
            None
        }
    }

    /// Lowercase name of the scheme
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Invalid => "invalid",
            Self::Unknown => "unknown",
            Self::None => "none",
            Self::Basic => "basic",
            Self::Bearer => "bearer",
        }
    }
}

impl fmt::Display for AuthorizationScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoded Basic credentials; both fields are non-empty
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub(crate) username: String,
    pub(crate) password: String,
}

impl BasicCredentials {
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A parsed `Authorization` header value
///
/// Values are immutable snapshots. Reading credentials for a scheme other than
/// `Basic` is not an error, the accessors simply return empty strings.
#[derive(Clone, PartialEq, Eq)]
pub struct Authorization {
    pub(crate) scheme: AuthorizationScheme,
    pub(crate) scheme_raw: String,
    pub(crate) value: String,
    pub(crate) credentials: Option<BasicCredentials>,
}

impl Authorization {
    /// The result of parsing an empty header value
    pub fn none() -> Self {
        Self {
            scheme: AuthorizationScheme::None,
            scheme_raw: String::new(),
            value: String::new(),
            credentials: None,
        }
    }

    /// Snapshot of a failed parse: scheme is always `Invalid`
    pub(crate) fn invalid(scheme_raw: &str, value: &str) -> Self {
        Self {
            scheme: AuthorizationScheme::Invalid,
            scheme_raw: scheme_raw.to_string(),
            value: value.to_string(),
            credentials: None,
        }
    }

    pub fn scheme(&self) -> AuthorizationScheme {
        self.scheme
    }

    /// The scheme token as it appeared in the header, before case folding
    pub fn scheme_raw(&self) -> &str {
        &self.scheme_raw
    }

    /// Everything after the first space, verbatim
    pub fn value(&self) -> &str {
        &self.value
    }

    /// `(username, password)` for Basic, `("", "")` otherwise
    pub fn basic(&self) -> (&str, &str) {
        match self.basic_credentials() {
            Some(creds) => (creds.username(), creds.password()),
            None => ("", ""),
        }
    }

    /// Username for Basic, `""` otherwise
    pub fn basic_username(&self) -> &str {
        self.basic_credentials()
            .map(BasicCredentials::username)
            .unwrap_or_default()
    }

    pub fn credentials(&self) -> Option<&BasicCredentials> {
        self.basic_credentials()
    }

    /// The opaque token for Bearer, `None` otherwise
    pub fn bearer_token(&self) -> Option<&str> {
        match self.scheme {
            AuthorizationScheme::Bearer => Some(&self.value),
            _ => None,
        }
    }

    pub fn is_none(&self) -> bool {
        self.scheme == AuthorizationScheme::None
    }

    fn basic_credentials(&self) -> Option<&BasicCredentials> {
        match self.scheme {
            AuthorizationScheme::Basic => self.credentials.as_ref(),
            _ => None,
        }
    }
}

impl fmt::Debug for Authorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // value holds the encoded credentials or the bearer token
        let value = if self.value.is_empty() { "" } else { "<redacted>" };
        f.debug_struct("Authorization")
            .field("scheme", &self.scheme)
            .field("scheme_raw", &self.scheme_raw)
            .field("value", &value)
            .field("credentials", &self.credentials)
            .finish()
    }
}

/// A rejected header value
///
/// Carries the reason together with what the parser saw before it stopped,
/// so callers can report the offending scheme token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{error}")]
pub struct Rejection {
    #[source]
    error: ParseError,
    authorization: Authorization,
}

impl Rejection {
    pub(crate) fn new(error: ParseError, authorization: Authorization) -> Self {
        Self {
            error,
            authorization,
        }
    }

    pub fn error(&self) -> &ParseError {
        &self.error
    }

    /// Diagnostic snapshot; its scheme is always `Invalid`
    pub fn authorization(&self) -> &Authorization {
        &self.authorization
    }

    pub fn into_parts(self) -> (ParseError, Authorization) {
        (self.error, self.authorization)
    }
}
