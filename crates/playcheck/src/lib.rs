//! # playcheck
//!
//! Decides whether a media element on a live page plays to completion.
//!
//! The crate never talks to a browser directly. It drives a [`Probe`], a small
//! capability over one loaded page, and classifies what it observes:
//!
//! - **Probe**: evaluates typed [`MediaCommand`]s and sleeps between polls
//! - **PlaybackMonitor**: the polling state machine that turns samples into
//!   one [`Outcome`] per attempt
//! - **TrialRunner**: repeats the monitor N times on the same page and builds
//!   the [`ReportSequence`]
//! - **ReportSink**: optional, fire-and-forget persistence of the report
//!
//! ## Example
//!
//! ```ignore
//! use playcheck::{RunConfig, TrialRunner};
//!
//! let config = RunConfig::new(3).with_selector("video").with_max_wait(120);
//! config.validate()?;
//! let report = TrialRunner::new(config).run(&page).await;
//! for record in &report {
//!     println!("#{} {} {:?}", record.run, record.status, record.duration_sec);
//! }
//! ```
//!
//! ## Failure model
//!
//! Every failure inside a trial becomes that trial's outcome. The runner
//! always returns a complete report; run-level failures (the page could not be
//! opened at all) belong to whoever built the probe.

#![warn(clippy::all)]

pub mod command;
pub mod config;
pub mod error;
pub mod monitor;
pub mod probe;
pub mod record;
pub mod sink;
pub mod trial;

pub use command::MediaCommand;
pub use config::{
    DEFAULT_MAX_WAIT_SECS, DEFAULT_RUNS, DEFAULT_SELECTOR, MAX_RUNS, MonitorConfig, POLL_INTERVAL, RunConfig,
};
pub use error::{ConfigError, ProbeError, SinkError};
pub use monitor::{Observation, PlaybackMonitor};
pub use probe::{Probe, ProbeResult};
pub use record::{Outcome, ReportSequence, Summary, TrialRecord, round2};
pub use sink::{DEFAULT_CONTAINER, DirectorySink, ReportSink, persist_quietly};
pub use trial::TrialRunner;
