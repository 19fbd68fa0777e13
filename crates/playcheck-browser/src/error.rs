//! Error types for browser operations.
//!
//! These are run-level failures: launching Chrome, opening a tab, loading the
//! target page. Once trials start, page failures are reported through
//! [`playcheck::ProbeError`] instead and end up in a trial's outcome.

use std::time::Duration;
use thiserror::Error;

/// The main error type for browser operations.
#[derive(Debug, Error)]
pub enum BrowserError {
    /// Failed to launch the browser process.
    ///
    /// This typically occurs when Chrome/Chromium is not installed,
    /// or when there are permission issues with the executable.
    #[error("failed to launch browser: {reason}")]
    LaunchFailed {
        /// Human-readable reason for the launch failure
        reason: String,
        /// Optional underlying error that caused the failure
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to establish or keep the Chrome DevTools Protocol connection.
    #[error("CDP connection failed: {0}")]
    ConnectionFailed(String),

    /// Navigation to a URL failed.
    #[error("navigation to '{url}' failed: {reason}")]
    NavigationFailed {
        /// The URL that failed to load
        url: String,
        /// Reason for the navigation failure
        reason: String,
    },

    /// A wait condition was not satisfied within the timeout.
    #[error("wait condition '{condition}' timed out after {timeout:?}")]
    WaitTimeout {
        /// Description of the condition that timed out
        condition: String,
        /// How long we waited before timing out
        timeout: Duration,
    },

    /// JavaScript execution in the page context failed.
    #[error("JavaScript execution failed: {0}")]
    ScriptExecutionFailed(String),

    /// An operation was attempted on a closed browser instance.
    #[error("browser instance is already closed")]
    AlreadyClosed,

    /// The run configuration was rejected before launching anything.
    #[error(transparent)]
    Config(#[from] playcheck::ConfigError),

    /// Wraps errors from the chromiumoxide library.
    #[error("chromiumoxide error: {0}")]
    ChromiumOxide(#[from] chromiumoxide::error::CdpError),
}

impl From<BrowserError> for playcheck::ProbeError {
    fn from(err: BrowserError) -> Self {
        match err {
            BrowserError::AlreadyClosed | BrowserError::ConnectionFailed(_) => {
                playcheck::ProbeError::Detached(err.to_string())
            }
            other => playcheck::ProbeError::Evaluation(other.to_string()),
        }
    }
}

/// A specialized Result type for browser operations.
pub type Result<T> = std::result::Result<T, BrowserError>;

#[cfg(test)]
mod tests {
    use super::*;
    use playcheck::ProbeError;

    #[test]
    fn closed_browser_maps_to_detached() {
        let err: ProbeError = BrowserError::AlreadyClosed.into();
        assert!(matches!(err, ProbeError::Detached(_)));
    }

    #[test]
    fn script_failure_maps_to_evaluation() {
        let err: ProbeError = BrowserError::ScriptExecutionFailed("Uncaught".into()).into();
        assert_eq!(
            err,
            ProbeError::Evaluation("JavaScript execution failed: Uncaught".to_string())
        );
    }

    #[test]
    fn navigation_error_names_the_url() {
        let err = BrowserError::NavigationFailed {
            url: "https://example.com/watch".to_string(),
            reason: "net::ERR_NAME_NOT_RESOLVED".to_string(),
        };
        assert!(err.to_string().contains("https://example.com/watch"));
    }
}
