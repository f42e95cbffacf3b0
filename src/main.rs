//! authz-header CLI
//!
//! Command-line interface for inspecting Authorization header values

use authz_header::cli::{log_filter, Cli, Runner};
use clap::Parser;

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(cli.verbose, rust_log.as_deref()))
        .init();

    let runner = Runner::new(cli);

    match runner.run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
