//! CLI runner - executes commands

use crate::auth::{Authorization, AuthorizationScheme};
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::error::{Error, Result};
use serde::Serialize;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Outcome of parsing one header value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub scheme: AuthorizationScheme,
    pub scheme_raw: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Stands in for a Basic value when passwords are hidden
pub const REDACTED: &str = "<redacted>";

impl Report {
    /// Parse `raw` and summarize the result
    pub fn from_raw(raw: &str, show_password: bool) -> Self {
        match Authorization::parse(raw) {
            Ok(auth) => {
                let creds = auth.credentials();
                Self {
                    scheme: auth.scheme(),
                    scheme_raw: auth.scheme_raw().to_string(),
                    value: shown_value(&auth, show_password),
                    username: creds.map(|c| c.username().to_string()),
                    password: creds
                        .filter(|_| show_password)
                        .map(|c| c.password().to_string()),
                    error: None,
                }
            }
            Err(rejection) => {
                let auth = rejection.authorization();
                Self {
                    scheme: auth.scheme(),
                    scheme_raw: auth.scheme_raw().to_string(),
                    value: shown_value(auth, show_password),
                    username: None,
                    password: None,
                    error: Some(rejection.error().to_string()),
                }
            }
        }
    }

    pub fn is_rejected(&self) -> bool {
        self.error.is_some()
    }
}

/// The Basic value encodes the password, so it follows `show_password`
/// whether or not the header was accepted
fn shown_value(auth: &Authorization, show_password: bool) -> String {
    let is_basic =
        AuthorizationScheme::from_token(auth.scheme_raw()) == Some(AuthorizationScheme::Basic);
    if is_basic && !show_password && !auth.value().is_empty() {
        REDACTED.to_string()
    } else {
        auth.value().to_string()
    }
}

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command against the process stdin/stdout
    ///
    /// Returns `false` when the command asked to fail on rejected values and
    /// at least one was rejected.
    pub fn run(&self) -> Result<bool> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), &mut stdout.lock())
    }

    /// Run the CLI command with explicit input and output
    pub fn run_with<R: BufRead, W: Write>(&self, stdin: R, out: &mut W) -> Result<bool> {
        match &self.cli.command {
            Commands::Parse {
                values,
                file,
                stdin: from_stdin,
                show_password,
                fail_on_invalid,
            } => {
                let inputs = if let Some(path) = file {
                    read_lines_from_file(path)?
                } else if *from_stdin {
                    stdin.lines().collect::<io::Result<Vec<_>>>()?
                } else if values.is_empty() {
                    return Err(Error::config(
                        "No header values given (pass VALUE arguments, --file or --stdin)",
                    ));
                } else {
                    values.clone()
                };

                let rejected = self.parse(&inputs, *show_password, out)?;
                Ok(!(*fail_on_invalid && rejected > 0))
            }
            Commands::Schemes => {
                self.schemes(out)?;
                Ok(true)
            }
        }
    }

    /// Parse and print every input; returns the number of rejected values
    fn parse<W: Write>(
        &self,
        inputs: &[String],
        show_password: bool,
        out: &mut W,
    ) -> Result<usize> {
        let mut rejected = 0;

        for (index, raw) in inputs.iter().enumerate() {
            let report = Report::from_raw(raw, show_password);

            if report.is_rejected() {
                rejected += 1;
                tracing::debug!(
                    index,
                    scheme = %report.scheme_raw,
                    "Rejected header value"
                );
            } else {
                tracing::debug!(index, scheme = %report.scheme, "Accepted header value");
            }

            match self.cli.format {
                OutputFormat::Json => {
                    writeln!(out, "{}", serde_json::to_string(&report)?)?;
                }
                OutputFormat::Pretty => write_pretty(out, index, &report)?,
            }
        }

        tracing::info!(
            total = inputs.len(),
            rejected,
            "Parsed Authorization header values"
        );

        Ok(rejected)
    }

    /// List recognized scheme tokens
    fn schemes<W: Write>(&self, out: &mut W) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => {
                let schemes = AuthorizationScheme::RECOGNIZED.map(AuthorizationScheme::as_str);
                writeln!(out, "{}", serde_json::to_string(&schemes)?)?;
            }
            OutputFormat::Pretty => {
                for scheme in AuthorizationScheme::RECOGNIZED {
                    writeln!(out, "{scheme}")?;
                }
            }
        }
        Ok(())
    }
}

fn read_lines_from_file(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .map_err(|e| Error::config(format!("Failed to read {}: {e}", path.display())))?;
    Ok(content.lines().map(String::from).collect())
}

fn write_pretty<W: Write>(out: &mut W, index: usize, report: &Report) -> io::Result<()> {
    writeln!(out, "[{index}] {}", report.scheme)?;
    if !report.scheme_raw.is_empty() {
        writeln!(out, "    scheme:   {}", report.scheme_raw)?;
    }
    if !report.value.is_empty() {
        writeln!(out, "    value:    {}", report.value)?;
    }
    if let Some(username) = &report.username {
        writeln!(out, "    username: {username}")?;
    }
    if let Some(password) = &report.password {
        writeln!(out, "    password: {password}")?;
    }
    if let Some(error) = &report.error {
        writeln!(out, "    error:    {error}")?;
    }
    Ok(())
}
