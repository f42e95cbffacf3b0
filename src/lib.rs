//! # authz-header
//!
//! Typed, validating parser for the HTTP `Authorization` request header.
//!
//! ## Features
//!
//! - **Scheme classification**: `Basic`, `Bearer`, empty (`None`) and `Invalid`
//! - **Basic decoding**: standard base64, first-colon split, non-empty fields
//! - **Precise rejections**: every failure names its reason and keeps what was seen
//! - **axum extractor**: use `Authorization` directly as a handler argument
//!
//! ## Quick Start
//!
//! ```rust
//! use authz_header::{Authorization, AuthorizationScheme};
//!
//! let auth = Authorization::parse("Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ==").unwrap();
//! assert_eq!(auth.scheme(), AuthorizationScheme::Basic);
//! assert_eq!(auth.basic(), ("Aladdin", "open sesame"));
//!
//! let err = Authorization::parse("Digest abc").unwrap_err();
//! assert_eq!(err.authorization().scheme(), AuthorizationScheme::Invalid);
//! assert_eq!(err.authorization().scheme_raw(), "Digest");
//! ```
//!
//! Parsed values are immutable and `Send + Sync`; share them freely once
//! parsed. Verifying credentials against a store or token issuer is the
//! caller's job.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Authorization header parsing
pub mod auth;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use auth::{Authorization, AuthorizationScheme, BasicCredentials, Rejection};
pub use error::{Error, ParseError, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
