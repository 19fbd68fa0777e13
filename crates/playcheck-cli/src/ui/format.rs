//! Formatting utilities for durations and trial reports.

use super::paint;
use console::Term;
use owo_colors::{OwoColorize, Style};
use playcheck::{Outcome, ReportSequence, Summary, TrialRecord};
use std::time::Duration;

/// Format duration in human-readable format.
///
/// Converts to the most appropriate unit (ms, s, m:s).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use playcheck_cli::ui::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(50)), "50ms");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        format!("{}ms", total_ms)
    } else if total_ms < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        let mins = secs / 60;
        let secs = secs % 60;
        format!("{}m {}s", mins, secs)
    }
}

/// Format a played duration from a report, `-` when there is none.
///
/// # Examples
///
/// ```
/// use playcheck_cli::ui::format_seconds;
///
/// assert_eq!(format_seconds(Some(12.3)), "12.30s");
/// assert_eq!(format_seconds(None), "-");
/// ```
pub fn format_seconds(seconds: Option<f64>) -> String {
    match seconds {
        Some(secs) => format!("{:.2}s", secs),
        None => "-".to_string(),
    }
}

fn outcome_style(outcome: Outcome) -> Style {
    match outcome {
        Outcome::Played => Style::new().green().bold(),
        Outcome::NoVideo | Outcome::PlayFailed => Style::new().yellow().bold(),
        Outcome::Timeout | Outcome::Error => Style::new().red().bold(),
    }
}

/// Format one trial as a table row.
pub fn format_trial(record: &TrialRecord) -> String {
    let wall = record.wall_time().to_std().unwrap_or_default();

    format!(
        "  {} {} {} {} {}",
        format!("#{:<3}", record.run).style(paint(Style::new().bright_white().bold())),
        format!("{:<12}", record.status.as_str()).style(paint(outcome_style(record.status))),
        format!("{:>9}", format_seconds(record.duration_sec)),
        format!("({})", format_duration(wall)).style(paint(Style::new().dimmed())),
        record.note
    )
}

/// Print the trial table to stdout.
pub fn print_report(report: &ReportSequence) {
    let width = Term::stdout().size().1 as usize;

    println!("\n{}", "Playback Trials".style(paint(Style::new().bold().underline())));
    println!("{}", "─".repeat(width.min(80)));

    for record in report {
        println!("{}", format_trial(record));
    }

    println!("{}", "─".repeat(width.min(80)));
}

/// Print per-outcome counts to stdout, skipping outcomes that never occurred.
pub fn print_summary(summary: &Summary) {
    let counts: Vec<String> = Outcome::ALL
        .iter()
        .filter(|outcome| summary.count(**outcome) > 0)
        .map(|outcome| {
            format!("{} {}", summary.count(*outcome), outcome.as_str())
                .style(paint(outcome_style(*outcome)))
                .to_string()
        })
        .collect();

    println!(
        "  {} {} of {} played ({})",
        "Total:".style(paint(Style::new().bold())),
        summary.played,
        summary.total(),
        counts.join(", ")
    );
}
