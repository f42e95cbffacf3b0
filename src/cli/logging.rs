//! Log filter selection for the CLI

use tracing_subscriber::EnvFilter;

/// Build the log filter from `RUST_LOG` and `--verbose`
///
/// `--verbose` forces `debug`. Otherwise a non-empty, valid `RUST_LOG` is used
/// as given, and anything else falls back to `info`.
pub fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }

    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}
