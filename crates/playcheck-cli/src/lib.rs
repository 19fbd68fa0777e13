//! playcheck CLI - video playback completion checks from the terminal.
//!
//! This crate provides the command-line interface and HTTP endpoint for
//! playcheck, wiring configuration and output around
//! [`playcheck_browser::check_run`].
//!
//! # Architecture
//!
//! The CLI is organized into several key modules:
//!
//! - [`error`] - Error types with actionable messages
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Spinner, status messages, and the trial table
//! - `commands` - `run` and `serve` implementations
//! - `config` - Layered configuration (file, environment, flags)
//! - `server` - The `/api/playback` HTTP endpoint
//!
//! # Example
//!
//! ```rust,no_run
//! use playcheck_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     // CLI command implementations...
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod server;
pub mod ui;

// Re-export commonly used types
pub use error::{CliError, Result};
