//! Error types for the playback core.
//!
//! Three families live here:
//!
//! - [`ProbeError`]: a failure talking to the page. The monitor never lets one
//!   escape a trial; it becomes an `error` outcome with the Display text as
//!   the note.
//! - [`ConfigError`]: a run configuration that cannot be executed.
//! - [`SinkError`]: a report could not be persisted. Persistence is
//!   fire-and-forget, so callers usually only log these.

use std::path::PathBuf;
use thiserror::Error;

/// A failure while interacting with the page behind a [`crate::Probe`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProbeError {
    /// The page rejected or failed to run a command.
    #[error("evaluation failed: {0}")]
    Evaluation(String),

    /// The page, frame or browser connection is gone.
    #[error("page is no longer attached: {0}")]
    Detached(String),

    /// A command produced a value of the wrong shape.
    #[error("{command} returned an unexpected value: {value}")]
    UnexpectedValue {
        /// Name of the command that was evaluated
        command: &'static str,
        /// The value the page returned, rendered as JSON
        value: String,
    },
}

/// A run configuration that cannot be executed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The media selector is empty or whitespace.
    #[error("media selector must not be empty\n\nHint: Pass --selector, e.g. 'video'")]
    EmptySelector,

    /// Zero trials were requested.
    #[error("number of runs must be at least 1\n\nHint: Omit --runs to use the default of 5")]
    ZeroRuns,

    /// More trials were requested than a single run allows.
    #[error("number of runs must be at most {max}, got {requested}\n\nHint: Split the check into several smaller runs")]
    TooManyRuns {
        /// The requested trial count
        requested: u32,
        /// The largest accepted trial count
        max: u32,
    },

    /// An explicitly requested config file does not exist.
    #[error("Config file not found: {}\n\nHint: Create a playcheck.toml file or fix the --config path", .0.display())]
    NotFound(PathBuf),

    /// A value could not be parsed or has the wrong type.
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The invalid value
        value: String,
        /// Helpful hint for correct values
        hint: String,
    },
}

/// A report could not be written to its storage backend.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The report could not be serialized.
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The storage location could not be prepared or written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// Target path of the failed operation
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_error_messages_are_descriptive() {
        let err = ProbeError::UnexpectedValue {
            command: "play",
            value: "\"yes\"".to_string(),
        };
        assert_eq!(err.to_string(), "play returned an unexpected value: \"yes\"");

        let err = ProbeError::Detached("frame detached".to_string());
        assert!(err.to_string().contains("frame detached"));
    }

    #[test]
    fn config_errors_carry_hints() {
        assert!(ConfigError::EmptySelector.to_string().contains("Hint:"));
        assert!(ConfigError::ZeroRuns.to_string().contains("at least 1"));

        let err = ConfigError::NotFound(PathBuf::from("playcheck.toml"));
        assert!(err.to_string().contains("playcheck.toml"));
    }
}
