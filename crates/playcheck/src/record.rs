//! Trial outcomes and the report handed back after a run.

use crate::monitor::Observation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Terminal classification of one trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// No element matched the selector.
    NoVideo,
    /// The element exists but playback could not be started.
    PlayFailed,
    /// The element reported it ended.
    Played,
    /// The element did not end within the wait bound.
    Timeout,
    /// Talking to the page failed.
    Error,
}

impl Outcome {
    /// All outcomes, in report order.
    pub const ALL: [Outcome; 5] = [
        Outcome::Played,
        Outcome::NoVideo,
        Outcome::PlayFailed,
        Outcome::Timeout,
        Outcome::Error,
    ];

    /// The wire name, as it appears in serialized reports.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::NoVideo => "no_video",
            Outcome::PlayFailed => "play_failed",
            Outcome::Played => "played",
            Outcome::Timeout => "timeout",
            Outcome::Error => "error",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rounds to two decimal places, half away from zero.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One completed trial. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialRecord {
    /// 1-based position in the run.
    pub run: u32,
    /// When the trial started.
    pub start_time: DateTime<Utc>,
    /// When the trial finished.
    pub end_time: DateTime<Utc>,
    /// Played duration in seconds, two decimals. Only ever set for `played`.
    pub duration_sec: Option<f64>,
    /// Terminal classification.
    pub status: Outcome,
    /// Human-readable detail for the outcome.
    pub note: String,
}

impl TrialRecord {
    /// Builds a record from a finished observation.
    #[must_use]
    pub fn new(
        run: u32,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        observation: Observation,
    ) -> Self {
        let duration_sec = match observation.outcome {
            Outcome::Played => observation
                .duration
                .filter(|secs| secs.is_finite() && *secs >= 0.0)
                .map(round2),
            _ => None,
        };

        Self {
            run,
            start_time,
            end_time,
            duration_sec,
            status: observation.outcome,
            note: observation.note,
        }
    }

    /// Wall-clock time the trial took.
    #[must_use]
    pub fn wall_time(&self) -> chrono::Duration {
        self.end_time - self.start_time
    }
}

/// Per-outcome counts over a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub played: usize,
    pub no_video: usize,
    pub play_failed: usize,
    pub timeout: usize,
    pub error: usize,
}

impl Summary {
    /// Count for one outcome.
    #[must_use]
    pub fn count(&self, outcome: Outcome) -> usize {
        match outcome {
            Outcome::Played => self.played,
            Outcome::NoVideo => self.no_video,
            Outcome::PlayFailed => self.play_failed,
            Outcome::Timeout => self.timeout,
            Outcome::Error => self.error,
        }
    }

    /// Number of trials counted.
    #[must_use]
    pub fn total(&self) -> usize {
        Outcome::ALL.iter().map(|o| self.count(*o)).sum()
    }
}

/// Ordered trial records of one run. Insertion order is run order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportSequence {
    records: Vec<TrialRecord>,
}

impl ReportSequence {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, record: TrialRecord) {
        debug_assert_eq!(record.run as usize, self.records.len() + 1);
        self.records.push(record);
    }

    /// Number of trials in the report.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the report holds no trials.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in run order.
    pub fn iter(&self) -> std::slice::Iter<'_, TrialRecord> {
        self.records.iter()
    }

    /// Records as a slice.
    #[must_use]
    pub fn records(&self) -> &[TrialRecord] {
        &self.records
    }

    /// Counts per outcome.
    #[must_use]
    pub fn summary(&self) -> Summary {
        let mut summary = Summary::default();
        for record in &self.records {
            match record.status {
                Outcome::Played => summary.played += 1,
                Outcome::NoVideo => summary.no_video += 1,
                Outcome::PlayFailed => summary.play_failed += 1,
                Outcome::Timeout => summary.timeout += 1,
                Outcome::Error => summary.error += 1,
            }
        }
        summary
    }

    /// Pretty-printed JSON array of the records.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl<'a> IntoIterator for &'a ReportSequence {
    type Item = &'a TrialRecord;
    type IntoIter = std::slice::Iter<'a, TrialRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
