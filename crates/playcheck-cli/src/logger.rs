//! Logging infrastructure for the playcheck CLI.
//!
//! This module provides a structured logging setup using the `tracing` ecosystem.
//! Log lines go to stderr so `playcheck run --json` keeps stdout clean.
//!
//! # Features
//!
//! - **Verbosity control**: `--verbose` for debug, `--quiet` for errors only
//! - **Color support**: `--no-color` override
//! - **Environment filters**: Override via `RUST_LOG` environment variable
//!
//! # Example
//!
//! ```rust,no_run
//! use playcheck_cli::logger::init_logger;
//! use tracing::info;
//!
//! init_logger(false, false, false);
//!
//! info!("Starting trials");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used with `--verbose`.
const VERBOSE_FILTER: &str = "playcheck=debug,playcheck_browser=debug,playcheck_cli=debug";

/// Filter used with `--quiet`.
const QUIET_FILTER: &str = "error";

/// Filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "playcheck=info,playcheck_browser=info,playcheck_cli=info";

/// Initialize the tracing subscriber with the specified options.
///
/// This function should be called once at the start of the program, before
/// any logging occurs.
///
/// # Verbosity Levels
///
/// The logging level is determined in this order:
/// 1. `--verbose` flag: DEBUG for playcheck crates
/// 2. `--quiet` flag: ERROR only
/// 3. `RUST_LOG` environment variable: Custom filter
/// 4. Default: INFO for playcheck crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = filter_for(verbose, quiet);

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false) // Don't show the module path (keeps output clean)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}
