//! Integration tests for the axum extractor

use authz_header::auth::CHALLENGE;
use authz_header::{Authorization, AuthorizationScheme};
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, WWW_AUTHENTICATE};
use axum::http::{HeaderValue, Request, StatusCode};
use axum::routing::get;
use axum::Router;
use tower::ServiceExt;

async fn whoami(auth: Authorization) -> String {
    match auth.scheme() {
        AuthorizationScheme::Basic => format!("basic:{}", auth.basic_username()),
        AuthorizationScheme::Bearer => format!("bearer:{}", auth.value()),
        other => other.to_string(),
    }
}

fn app() -> Router {
    Router::new().route("/", get(whoami))
}

async fn send(header: Option<HeaderValue>) -> (StatusCode, Option<HeaderValue>, String) {
    let mut request = Request::builder().uri("/");
    if let Some(value) = header {
        request = request.header(AUTHORIZATION, value);
    }

    let response = app()
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let challenge = response.headers().get(WWW_AUTHENTICATE).cloned();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, challenge, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_extract_basic() {
    let (status, _, body) = send(Some(HeaderValue::from_static(
        "Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ==",
    )))
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "basic:Aladdin");
}

#[tokio::test]
async fn test_extract_bearer() {
    let (status, _, body) = send(Some(HeaderValue::from_static("bearer abc.def"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "bearer:abc.def");
}

#[tokio::test]
async fn test_extract_missing_header_is_none() {
    let (status, challenge, body) = send(None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(challenge.is_none());
    assert_eq!(body, "none");
}

#[tokio::test]
async fn test_extract_empty_header_is_none() {
    let (status, _, body) = send(Some(HeaderValue::from_static(""))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "none");
}

#[tokio::test]
async fn test_rejection_response() {
    let (status, challenge, body) = send(Some(HeaderValue::from_static("Digest abc"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let challenge = challenge.unwrap();
    assert_eq!(challenge, CHALLENGE);
    assert!(challenge.to_str().unwrap().starts_with("Basic realm=\""));

    let body: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        body["error"],
        "invalid scheme: scheme with name 'Digest' is unknown"
    );
}

#[tokio::test]
async fn test_rejection_non_utf8_header() {
    let header = HeaderValue::from_bytes(b"Bearer \xe9t\xe9").unwrap();
    let (status, _, _) = send(Some(header)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
