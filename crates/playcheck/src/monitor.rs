//! Playback completion detection.
//!
//! The monitor turns a stream of samples from an element it does not control
//! into exactly one [`Outcome`]:
//!
//! ```text
//!   exists? ──no──▶ no_video
//!     │yes
//!   read duration (informational)
//!     │
//!   play accepted? ──no──▶ play_failed
//!     │yes
//!   ┌▶ ended? ──yes──▶ read position ──▶ played
//!   │    │no
//!   │  elapsed == max_wait? ──yes──▶ timeout
//!   │    │no
//!   └─ sleep 1s
//! ```
//!
//! Any probe failure along the way becomes `error`. Nothing escapes
//! [`PlaybackMonitor::observe`].

use crate::command::MediaCommand;
use crate::config::{MonitorConfig, POLL_INTERVAL};
use crate::error::ProbeError;
use crate::probe::{Probe, ProbeResult};
use crate::record::Outcome;
use serde_json::Value;
use tracing::{debug, info, warn};

/// Note attached to a successful trial.
pub const PLAYED_NOTE: &str = "Video ended normally.";

/// Note attached when play() was refused.
pub const PLAY_FAILED_NOTE: &str =
    "Element exists but play() could not start (autoplay blocked?).";

/// Terminal result of one playback attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    /// Classification of the attempt.
    pub outcome: Outcome,
    /// Played duration in seconds, only for `played` and only when readable.
    pub duration: Option<f64>,
    /// Human-readable detail.
    pub note: String,
    /// Whole seconds spent in the poll loop.
    pub elapsed_secs: u64,
}

impl Observation {
    fn no_video(selector: &str) -> Self {
        Self {
            outcome: Outcome::NoVideo,
            duration: None,
            note: format!("No element matching selector '{selector}' found."),
            elapsed_secs: 0,
        }
    }

    fn play_failed() -> Self {
        Self {
            outcome: Outcome::PlayFailed,
            duration: None,
            note: PLAY_FAILED_NOTE.to_string(),
            elapsed_secs: 0,
        }
    }

    fn played(duration: Option<f64>, elapsed_secs: u64) -> Self {
        Self {
            outcome: Outcome::Played,
            duration,
            note: PLAYED_NOTE.to_string(),
            elapsed_secs,
        }
    }

    fn timeout(max_wait: u64) -> Self {
        Self {
            outcome: Outcome::Timeout,
            duration: None,
            note: format!("Timed out after {max_wait} seconds waiting for video to end."),
            elapsed_secs: max_wait,
        }
    }

    fn error(err: &ProbeError) -> Self {
        Self {
            outcome: Outcome::Error,
            duration: None,
            note: format!("Exception while waiting for video end: {err}"),
            elapsed_secs: 0,
        }
    }
}

/// Classifies one playback attempt against a probe.
#[derive(Debug, Clone)]
pub struct PlaybackMonitor {
    config: MonitorConfig,
}

impl PlaybackMonitor {
    /// Creates a monitor for the configured element.
    #[must_use]
    pub fn new(config: MonitorConfig) -> Self {
        Self { config }
    }

    /// The settings this monitor runs with.
    #[must_use]
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Runs one attempt to completion.
    ///
    /// This starts real playback on the page, so it is not idempotent: an
    /// element left ended by a previous attempt is played again and usually
    /// reports `played` on the first poll.
    pub async fn observe<P: Probe + ?Sized>(&self, probe: &P) -> Observation {
        match self.attempt(probe).await {
            Ok(observation) => {
                info!(
                    outcome = %observation.outcome,
                    duration = ?observation.duration,
                    elapsed_secs = observation.elapsed_secs,
                    "playback attempt finished"
                );
                observation
            }
            Err(err) => {
                warn!(error = %err, "probe failed during playback attempt");
                Observation::error(&err)
            }
        }
    }

    async fn attempt<P: Probe + ?Sized>(&self, probe: &P) -> ProbeResult<Observation> {
        let selector = self.config.selector.as_str();

        if !probe.exists(selector).await? {
            debug!(selector, "no media element found");
            return Ok(Observation::no_video(selector));
        }

        let reported = seconds(&probe.evaluate(&MediaCommand::ReadDuration { selector }).await?);
        debug!(selector, duration = ?reported, "media element found");

        let play = MediaCommand::Play { selector };
        if !flag(&play, probe.evaluate(&play).await?)? {
            debug!(selector, "play() was not accepted");
            return Ok(Observation::play_failed());
        }

        let max_wait = self.config.effective_max_wait();
        let ended = MediaCommand::EvaluateEnded { selector };
        let mut elapsed = 0;

        while elapsed < max_wait {
            if flag(&ended, probe.evaluate(&ended).await?)? {
                let duration = played_duration(probe, selector).await?;
                return Ok(Observation::played(duration, elapsed));
            }
            probe.sleep(POLL_INTERVAL).await;
            elapsed += 1;
            debug!(elapsed, max_wait, "waiting for playback to end");
        }

        Ok(Observation::timeout(max_wait))
    }
}

/// Position at the end of playback, falling back to the element's duration.
///
/// A zero position counts as unavailable. The duration is read again rather
/// than reusing the pre-play sample: streamed media often reports no duration
/// until its metadata has loaded, which is usually after play().
async fn played_duration<P: Probe + ?Sized>(probe: &P, selector: &str) -> ProbeResult<Option<f64>> {
    let position = seconds(
        &probe
            .evaluate(&MediaCommand::EvaluateCurrentTime { selector })
            .await?,
    )
    .filter(|secs| *secs > 0.0);

    if position.is_some() {
        return Ok(position);
    }

    Ok(seconds(&probe.evaluate(&MediaCommand::ReadDuration { selector }).await?))
}

/// A finite, non-negative number of seconds, if the value holds one.
fn seconds(value: &Value) -> Option<f64> {
    value
        .as_f64()
        .filter(|secs| secs.is_finite() && *secs >= 0.0)
}

fn flag(command: &MediaCommand<'_>, value: Value) -> ProbeResult<bool> {
    match value {
        Value::Bool(b) => Ok(b),
        Value::Null => Ok(false),
        other => Err(ProbeError::UnexpectedValue {
            command: command.name(),
            value: other.to_string(),
        }),
    }
}
