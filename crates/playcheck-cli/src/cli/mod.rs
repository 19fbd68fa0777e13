//! Command-line interface definition for playcheck.
//!
//! This module defines the CLI structure using clap v4's derive macros.
//!
//! # Command Structure
//!
//! - `playcheck run <URL>` - Run playback trials and print the report
//! - `playcheck serve` - Expose the same check over HTTP

mod commands;
mod validation;

use clap::Parser;

pub use commands::{Command, RunArgs, ServeArgs};
pub use validation::parse_runs;

/// playcheck - checks that a page's video plays to the end
#[derive(Parser, Debug)]
#[command(
    name = "playcheck",
    version,
    about = "Check that a page's video plays to the end in headless Chrome",
    long_about = "playcheck loads a page in headless Chrome, starts its video element, and\n\
                  polls until playback ends or a deadline passes. It repeats this for a\n\
                  number of trials and reports how each one went."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    ///
    /// Shows every probe step: element lookups, play attempts, and polls.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    ///
    /// Only critical errors will be displayed. Useful for CI/CD environments
    /// or when piping output to other tools.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    ///
    /// Outputs plain text without ANSI color codes. Useful for logging to
    /// files or systems that don't support colored terminal output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
