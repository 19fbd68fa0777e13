//! Run command implementation.
//!
//! This module implements `playcheck run`, which checks one URL from the
//! terminal and prints how each trial went.

use crate::cli::RunArgs;
use crate::config::{Overrides, PlaycheckConfig};
use crate::error::Result;
use crate::ui;
use playcheck::{ReportSequence, ReportSink, Summary};
use playcheck_browser::check_run_with;
use std::time::Instant;
use tracing::warn;

/// Execute the run command.
///
/// # Process
///
/// 1. Load and validate configuration (CLI > Env > File > Defaults)
/// 2. Launch Chrome, load the page, and run the trials
/// 3. Print the table (or JSON with `--json`)
/// 4. Store the report if a log directory is configured
///
/// # Errors
///
/// Returns errors for invalid configuration and for run-level failures
/// (Chrome did not start, the page did not load). Failed trials are part of
/// the report, not errors.
pub async fn execute(args: RunArgs) -> Result<()> {
    let start_time = Instant::now();

    let config = PlaycheckConfig::load(&Overrides::from(&args), args.config.as_deref())?;
    config.validate()?;

    let run_config = config.run_config();
    let spinner = if args.json || !ui::spinner_enabled() {
        ui::Spinner::hidden()
    } else {
        ui::Spinner::new(&format!("Running {} trial(s) on {}", run_config.runs, args.url))
    };

    let runs = run_config.runs;
    let result = check_run_with(&args.url, &config.launch_config(), &run_config, |record| {
        spinner.println(&ui::format_trial(record));
        if record.run < runs {
            spinner.set_message(&format!("Trial {}/{}", record.run + 1, runs));
        }
    })
    .await;

    let report = match result {
        Ok(report) => report,
        Err(err) => {
            spinner.fail("Could not run playback trials");
            return Err(err.into());
        }
    };
    spinner.clear();

    if args.json {
        println!("{}", report.to_pretty_json()?);
    } else {
        ui::print_report(&report);
        ui::print_summary(&report.summary());
        report_verdict(&report.summary(), start_time);
    }

    if let Some(sink) = config.sink() {
        store(&sink, &report).await;
    }

    Ok(())
}

fn report_verdict(summary: &Summary, start_time: Instant) {
    let elapsed = ui::format_duration(start_time.elapsed());

    if summary.played == summary.total() {
        ui::success(&format!(
            "All {} trials played to the end in {}",
            summary.total(),
            elapsed
        ));
    } else {
        ui::warning(&format!(
            "{} of {} trials did not play to the end ({})",
            summary.total() - summary.played,
            summary.total(),
            elapsed
        ));
    }
}

/// Stores the report. Failures are reported but never fail the command.
async fn store<S: ReportSink>(sink: &S, report: &ReportSequence) {
    match sink.persist(report).await {
        Ok(location) => ui::info(&format!("Report stored at {}", location)),
        Err(err) => {
            warn!("failed to store playback report: {}", err);
            ui::warning(&format!("Report was not stored: {}", err));
        }
    }
}
