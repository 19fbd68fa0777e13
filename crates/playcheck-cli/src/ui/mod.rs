//! Terminal UI utilities for spinners and formatted output.
//!
//! This module provides status messages, a spinner for running trials, and
//! the trial table. It handles environment detection (CI, TTY, `NO_COLOR`) and
//! degrades to plain text when colors are off.
//!
//! # Examples
//!
//! ```no_run
//! use playcheck_cli::ui;
//!
//! ui::init_colors(false);
//!
//! let spinner = ui::Spinner::new("Trial 1/5...");
//! spinner.finish("Trial 1 played");
//!
//! ui::success("All trials played");
//! ```

mod format;
mod messages;
mod spinner;

use owo_colors::Style;
use std::sync::atomic::{AtomicBool, Ordering};

pub use format::{format_duration, format_seconds, format_trial, print_report, print_summary};
pub use messages::{info, success, warning};
pub use spinner::Spinner;

static COLORS: AtomicBool = AtomicBool::new(true);

/// Check if running in a CI environment.
///
/// Detects common CI environment variables from GitHub Actions, GitLab CI,
/// CircleCI, and Travis CI.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
}

/// Returns true if a live spinner should be drawn: stderr is a terminal and
/// nothing suggests a CI log.
pub fn spinner_enabled() -> bool {
    console::user_attended_stderr() && !is_ci()
}

/// Check if color output should be enabled.
///
/// Respects `NO_COLOR` and `FORCE_COLOR` environment variables, falls back to
/// terminal capability detection.
pub fn should_use_color() -> bool {
    // NO_COLOR environment variable disables colors
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // FORCE_COLOR enables colors even in non-TTY
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::user_attended_stderr()
}

/// Initialize color support based on flags and environment.
///
/// Should be called once in `main`, before any output. `no_color` wins over
/// everything else.
pub fn init_colors(no_color: bool) {
    let enabled = !no_color && should_use_color();
    COLORS.store(enabled, Ordering::Relaxed);
    // indicatif renders through console, so keep both in step.
    console::set_colors_enabled(enabled);
    console::set_colors_enabled_stderr(enabled);
}

/// Returns true if output should be colored.
pub fn colors_enabled() -> bool {
    COLORS.load(Ordering::Relaxed)
}

/// `style` when colors are on, a no-op style otherwise.
pub(crate) fn paint(style: Style) -> Style {
    if colors_enabled() { style } else { Style::new() }
}
