//! Sequential multi-trial runs over one page.

use crate::config::{MAX_RUNS, RunConfig};
use crate::monitor::PlaybackMonitor;
use crate::probe::Probe;
use crate::record::{ReportSequence, TrialRecord};
use chrono::Utc;
use tracing::{Instrument, info, info_span};

/// Runs the playback monitor `runs` times against one probe.
///
/// Trials share the probe's page, so they run strictly one after another. A
/// failed trial is recorded and the next one starts regardless.
#[derive(Debug, Clone)]
pub struct TrialRunner {
    config: RunConfig,
}

impl TrialRunner {
    /// Creates a runner for `config`. The config is assumed valid; see
    /// [`RunConfig::validate`].
    #[must_use]
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// The settings this runner uses.
    #[must_use]
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Runs every trial and returns the full report.
    pub async fn run<P: Probe + ?Sized>(&self, probe: &P) -> ReportSequence {
        self.run_with(probe, |_| {}).await
    }

    /// Like [`TrialRunner::run`], calling `on_trial` after each record is built.
    pub async fn run_with<P, F>(&self, probe: &P, mut on_trial: F) -> ReportSequence
    where
        P: Probe + ?Sized,
        F: FnMut(&TrialRecord) + Send,
    {
        let monitor = PlaybackMonitor::new(self.config.monitor());
        let mut report = ReportSequence::with_capacity(self.config.runs.min(MAX_RUNS) as usize);

        info!(
            runs = self.config.runs,
            selector = %self.config.selector,
            "starting playback trials"
        );

        for run in 1..=self.config.runs {
            let span = info_span!("trial", run, of = self.config.runs);
            let record = async {
                let start_time = Utc::now();
                let observation = monitor.observe(probe).await;
                let end_time = Utc::now();
                TrialRecord::new(run, start_time, end_time, observation)
            }
            .instrument(span)
            .await;

            on_trial(&record);
            report.push(record);
        }

        let summary = report.summary();
        info!(
            played = summary.played,
            total = summary.total(),
            "playback trials complete"
        );

        report
    }
}
