//! Run configuration.
//!
//! A [`RunConfig`] is built once per run and handed to the
//! [`crate::TrialRunner`]. Nothing here reads the environment; loading from
//! files and variables is the caller's job.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default CSS selector for the media element.
pub const DEFAULT_SELECTOR: &str = "video";

/// Default and fallback upper bound on waiting for playback to end, in seconds.
pub const DEFAULT_MAX_WAIT_SECS: u64 = 600;

/// Default number of trials per run.
pub const DEFAULT_RUNS: u32 = 5;

/// Upper bound on trials per run. A run at this size already takes hours
/// against real media.
pub const MAX_RUNS: u32 = 1000;

/// Fixed cadence of the ended poll.
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Settings for a single playback attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// CSS selector of the media element.
    pub selector: String,

    /// Upper bound on waiting for the element to end, in seconds.
    /// Zero or negative falls back to [`DEFAULT_MAX_WAIT_SECS`].
    pub max_wait: i64,
}

impl MonitorConfig {
    /// Creates monitor settings for `selector`.
    pub fn new(selector: impl Into<String>, max_wait: i64) -> Self {
        Self {
            selector: selector.into(),
            max_wait,
        }
    }

    /// The bound actually enforced by the poll loop.
    #[must_use]
    pub fn effective_max_wait(&self) -> u64 {
        u64::try_from(self.max_wait)
            .ok()
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_MAX_WAIT_SECS)
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SELECTOR, DEFAULT_MAX_WAIT_SECS as i64)
    }
}

/// Settings for a full multi-trial run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// CSS selector of the media element.
    pub selector: String,

    /// Per-trial bound on waiting for the element to end, in seconds.
    pub max_wait: i64,

    /// Number of sequential trials.
    pub runs: u32,
}

impl RunConfig {
    /// Creates a run configuration with default selector and bound.
    #[must_use]
    pub fn new(runs: u32) -> Self {
        Self {
            runs,
            ..Self::default()
        }
    }

    /// Sets the media selector.
    #[must_use]
    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = selector.into();
        self
    }

    /// Sets the per-trial wait bound in seconds.
    #[must_use]
    pub fn with_max_wait(mut self, max_wait: i64) -> Self {
        self.max_wait = max_wait;
        self
    }

    /// Checks that the run can be executed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptySelector`] for a blank selector and
    /// [`ConfigError::ZeroRuns`] when no trials were requested, or
    /// [`ConfigError::TooManyRuns`] above [`MAX_RUNS`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.selector.trim().is_empty() {
            return Err(ConfigError::EmptySelector);
        }
        if self.runs == 0 {
            return Err(ConfigError::ZeroRuns);
        }
        if self.runs > MAX_RUNS {
            return Err(ConfigError::TooManyRuns {
                requested: self.runs,
                max: MAX_RUNS,
            });
        }
        Ok(())
    }

    /// Monitor settings shared by every trial of this run.
    #[must_use]
    pub fn monitor(&self) -> MonitorConfig {
        MonitorConfig::new(self.selector.clone(), self.max_wait)
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            selector: DEFAULT_SELECTOR.to_string(),
            max_wait: DEFAULT_MAX_WAIT_SECS as i64,
            runs: DEFAULT_RUNS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_max_wait_falls_back_to_default() {
        assert_eq!(MonitorConfig::new("video", 0).effective_max_wait(), 600);
        assert_eq!(MonitorConfig::new("video", -5).effective_max_wait(), 600);
        assert_eq!(MonitorConfig::new("video", 5).effective_max_wait(), 5);
    }

    #[test]
    fn defaults_match_documented_values() {
        let config = RunConfig::default();
        assert_eq!(config.selector, "video");
        assert_eq!(config.max_wait, 600);
        assert_eq!(config.runs, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_unusable_runs() {
        assert_eq!(RunConfig::new(0).validate(), Err(ConfigError::ZeroRuns));
        assert_eq!(
            RunConfig::new(3).with_selector("  ").validate(),
            Err(ConfigError::EmptySelector)
        );
    }

    #[test]
    fn validate_caps_run_count() {
        assert!(RunConfig::new(MAX_RUNS).validate().is_ok());
        assert_eq!(
            RunConfig::new(MAX_RUNS + 1).validate(),
            Err(ConfigError::TooManyRuns {
                requested: MAX_RUNS + 1,
                max: MAX_RUNS
            })
        );
        assert!(matches!(
            RunConfig::new(u32::MAX).validate(),
            Err(ConfigError::TooManyRuns { .. })
        ));
    }

    #[test]
    fn monitor_settings_follow_run_settings() {
        let monitor = RunConfig::new(2)
            .with_selector("#main video")
            .with_max_wait(30)
            .monitor();
        assert_eq!(monitor, MonitorConfig::new("#main video", 30));
    }
}
