//! axum integration
//!
//! `Authorization` can be used directly as a handler argument. A missing
//! header is extracted as scheme `None`; a malformed one is answered with
//! `401 Unauthorized` and a challenge for the supported schemes.

use super::types::{Authorization, Rejection};
use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::{AUTHORIZATION, WWW_AUTHENTICATE};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Challenge sent with every rejection
pub const CHALLENGE: &str = r#"Basic realm="restricted", charset="UTF-8", Bearer"#;

#[async_trait]
impl<S> FromRequestParts<S> for Authorization
where
    S: Send + Sync,
{
    type Rejection = Rejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(header) = parts.headers.get(AUTHORIZATION) else {
            return Ok(Self::none());
        };

        Self::from_header_value(header).inspect_err(|rejection| {
            tracing::debug!(
                scheme = rejection.authorization().scheme_raw(),
                error = %rejection.error(),
                "Rejected Authorization header"
            );
        })
    }
}

impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            [(WWW_AUTHENTICATE, CHALLENGE)],
            Json(json!({ "error": self.error().to_string() })),
        )
            .into_response()
    }
}
