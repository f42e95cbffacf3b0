//! Integration tests for the public API and the CLI runner
//!
//! Tests the end-to-end flow: raw header value → parsed snapshot → report output

use authz_header::cli::{Cli, Runner};
use authz_header::{Authorization, AuthorizationScheme, Error, ParseError};
use base64::Engine;
use clap::Parser;
use pretty_assertions::assert_eq;
use std::io::Write;

fn basic(credentials: &str) -> String {
    format!(
        "Basic {}",
        base64::engine::general_purpose::STANDARD.encode(credentials)
    )
}

// ============================================================================
// Public API Tests
// ============================================================================

#[test]
fn test_round_trip_credentials() {
    let cases = [
        ("alice", "secret"),
        ("bob@example.com", "p@ss word"),
        ("svc", "a:b:c"),
        ("x", "y"),
    ];

    for (username, password) in cases {
        let auth = Authorization::parse(&basic(&format!("{username}:{password}"))).unwrap();
        assert_eq!(auth.basic(), (username, password));
        assert_eq!(auth.basic_username(), username);
    }
}

#[test]
fn test_scheme_case_does_not_change_credentials() {
    let encoded = base64::engine::general_purpose::STANDARD.encode("alice:secret");
    let upper = Authorization::parse(&format!("BASIC {encoded}")).unwrap();
    let lower = Authorization::parse(&format!("basic {encoded}")).unwrap();

    assert_eq!(upper.scheme(), lower.scheme());
    assert_eq!(upper.basic(), lower.basic());
    assert_eq!(upper.scheme_raw(), "BASIC");
    assert_eq!(lower.scheme_raw(), "basic");
}

#[test]
fn test_bearer_is_opaque() {
    let auth = Authorization::parse("Bearer abc.def.ghi").unwrap();
    assert_eq!(auth.scheme(), AuthorizationScheme::Bearer);
    assert_eq!(auth.value(), "abc.def.ghi");
    assert_eq!(auth.basic(), ("", ""));
}

#[test]
fn test_rejections_convert_into_crate_error() {
    fn parse(raw: &str) -> authz_header::Result<Authorization> {
        Ok(Authorization::parse(raw)?)
    }

    let err = parse(&basic("user:")).unwrap_err();
    match &err {
        Error::Parse(rejection) => assert_eq!(rejection.error(), &ParseError::EmptyPassword),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(
        err.to_string(),
        "invalid value: the password in the decoded basic scheme value is empty"
    );
}

#[test]
fn test_parsed_value_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Authorization>();
    assert_send_sync::<authz_header::Rejection>();
}

// ============================================================================
// CLI Runner Tests
// ============================================================================

#[test]
fn test_cli_parse_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "{}", basic("alice:secret")).unwrap();
    writeln!(file, "Bearer token-1").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "Negotiate abc").unwrap();

    let path = file.path().to_str().unwrap();
    let cli = Cli::try_parse_from(["authz-header", "parse", "--file", path]).unwrap();
    let mut out = Vec::new();
    let ok = Runner::new(cli).run_with(std::io::empty(), &mut out).unwrap();
    assert!(ok);

    let reports: Vec<serde_json::Value> = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    let schemes: Vec<&str> = reports
        .iter()
        .map(|r| r["scheme"].as_str().unwrap())
        .collect();
    assert_eq!(schemes, vec!["basic", "bearer", "none", "invalid"]);
    assert_eq!(reports[0]["username"], "alice");
    assert!(reports[0].get("password").is_none());
    assert_eq!(reports[3]["scheme_raw"], "Negotiate");
    assert_eq!(
        reports[3]["error"],
        "invalid scheme: scheme with name 'Negotiate' is unknown"
    );
}

#[test]
fn test_cli_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");

    let cli = Cli::try_parse_from([
        "authz-header",
        "parse",
        "--file",
        path.to_str().unwrap(),
    ])
    .unwrap();
    let result = Runner::new(cli).run_with(std::io::empty(), &mut Vec::new());
    assert!(matches!(result, Err(Error::Config { .. })));
}

#[test]
fn test_cli_file_conflicts_with_values() {
    let result = Cli::try_parse_from(["authz-header", "parse", "--file", "x", "Bearer a"]);
    assert!(result.is_err());
}
