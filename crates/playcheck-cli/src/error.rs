//! Error handling for the playcheck CLI.
//!
//! This module provides the CLI's top-level error type using `thiserror`.
//! Errors from the core and browser crates convert automatically, and the
//! final report in `main` goes through miette.
//!
//! # Architecture
//!
//! - **Top-level errors** (`CliError`) represent broad categories of failures
//! - **Domain errors** (`playcheck::ConfigError`, `BrowserError`) carry detail
//! - **Error conversion** is automatic via `#[from]` attributes

use miette::Report;
use playcheck::ConfigError;
use playcheck_browser::BrowserError;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration errors (file not found, invalid values, etc.)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The run could not start: Chrome failed to launch or the page did not load.
    #[error("Browser error: {0}")]
    Browser(#[from] BrowserError),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP server errors
    #[error("Server error: {0}")]
    Server(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Convert a `CliError` to a miette `Report`.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Browser(BrowserError::LaunchFailed { reason, .. }) => miette::miette!(
            "Failed to launch Chrome: {}\n\nHint: Install Chrome/Chromium or pass --chrome <PATH>",
            reason
        ),
        CliError::Browser(e @ BrowserError::NavigationFailed { .. }) => miette::miette!(
            "{}\n\nHint: Check that the URL is reachable from this machine",
            e
        ),
        _ => miette::miette!("{}", err),
    }
}
