//! Authorization header module
//!
//! Supports: Basic, Bearer
//!
//! `Authorization::parse` turns a raw header value into an immutable,
//! classified snapshot or a `Rejection`. Verifying the credentials is left to
//! the caller.

mod extract;
mod parser;
mod types;

pub use extract::CHALLENGE;
pub use types::{Authorization, AuthorizationScheme, BasicCredentials, Rejection};
