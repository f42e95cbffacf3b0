//! `Authorization` header parsing
//!
//! The header value has the shape `<scheme> <value>`. The scheme token is
//! everything before the first space and is matched case-insensitively; the
//! value is everything after it, kept verbatim.

use super::types::{Authorization, AuthorizationScheme, BasicCredentials, Rejection};
use crate::error::ParseError;
use axum::http::HeaderValue;
use base64::alphabet;
use base64::engine::{GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use std::str::FromStr;

/// Standard alphabet with canonical padding; non-zero trailing bits are ignored
const BASIC_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

impl Authorization {
    /// Parse a complete header value
    ///
    /// An empty value is not an error: it yields scheme `None`.
    pub fn parse(raw: &str) -> Result<Self, Rejection> {
        if raw.is_empty() {
            return Ok(Self::none());
        }

        let Some((scheme_raw, value)) = raw.split_once(' ') else {
            return Err(Rejection::new(
                ParseError::MissingScheme,
                Self::invalid("", ""),
            ));
        };

        let reject = |error| Rejection::new(error, Self::invalid(scheme_raw, value));

        match AuthorizationScheme::from_token(scheme_raw) {
            Some(AuthorizationScheme::Basic) => {
                let credentials = parse_basic(value).map_err(reject)?;
                Ok(Self {
                    scheme: AuthorizationScheme::Basic,
                    scheme_raw: scheme_raw.to_string(),
                    value: value.to_string(),
                    credentials: Some(credentials),
                })
            }
            Some(AuthorizationScheme::Bearer) => Ok(Self {
                scheme: AuthorizationScheme::Bearer,
                scheme_raw: scheme_raw.to_string(),
                value: value.to_string(),
                credentials: None,
            }),
            _ => Err(reject(ParseError::unknown_scheme(scheme_raw))),
        }
    }

    /// Parse a header value held as bytes; the bytes must be UTF-8
    pub fn parse_bytes(raw: &[u8]) -> Result<Self, Rejection> {
        let raw = std::str::from_utf8(raw).map_err(|_| {
            Rejection::new(
                ParseError::InvalidUtf8 {
                    context: "header value",
                },
                Self::invalid("", ""),
            )
        })?;
        Self::parse(raw)
    }

    /// Parse an `http` header value, which may carry non-visible-ASCII bytes
    pub fn from_header_value(header: &HeaderValue) -> Result<Self, Rejection> {
        Self::parse_bytes(header.as_bytes())
    }
}

/// Decode `base64(username ":" password)`
fn parse_basic(value: &str) -> Result<BasicCredentials, ParseError> {
    let decoded = BASIC_ENGINE.decode(value).map_err(ParseError::MalformedBase64)?;

    let decoded = String::from_utf8(decoded).map_err(|_| ParseError::InvalidUtf8 {
        context: "decoded basic credentials",
    })?;

    let (username, password) = decoded
        .split_once(':')
        .ok_or(ParseError::MissingCredentialSeparator)?;

    if username.is_empty() {
        return Err(ParseError::EmptyUsername);
    }
    if password.is_empty() {
        return Err(ParseError::EmptyPassword);
    }

    Ok(BasicCredentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}

impl FromStr for Authorization {
    type Err = Rejection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&[u8]> for Authorization {
    type Error = Rejection;

    fn try_from(raw: &[u8]) -> Result<Self, Self::Error> {
        Self::parse_bytes(raw)
    }
}

impl TryFrom<&HeaderValue> for Authorization {
    type Error = Rejection;

    fn try_from(header: &HeaderValue) -> Result<Self, Self::Error> {
        Self::from_header_value(header)
    }
}
