//! Command implementations for the playcheck CLI.
//!
//! - [`run`] - Run playback trials and print the report
//! - [`serve`] - HTTP endpoint for playback checks
//!
//! Each command is implemented in its own module and provides an `execute`
//! function that takes the parsed command arguments and returns a Result.

pub mod run;
pub mod serve;

// Re-export execute functions for convenience
pub use run::execute as run_execute;
pub use serve::execute as serve_execute;
