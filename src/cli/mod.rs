//! CLI module
//!
//! Command-line interface for inspecting Authorization header values.
//!
//! # Commands
//!
//! - `parse` - Parse header values from arguments, a file or stdin
//! - `schemes` - List recognized scheme tokens

mod commands;
mod logging;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use logging::log_filter;
pub use runner::{Report, Runner};
