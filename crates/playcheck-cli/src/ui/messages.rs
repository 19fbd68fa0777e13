//! Status message functions for terminal output.

use super::paint;
use owo_colors::{OwoColorize, Style};

/// Print a success message to stderr.
///
/// # Examples
///
/// ```no_run
/// use playcheck_cli::ui::success;
///
/// success("All 5 trials played");
/// ```
pub fn success(message: &str) {
    eprintln!("{} {}", "✓".style(paint(Style::new().green().bold())), message);
}

/// Print an info message to stderr.
pub fn info(message: &str) {
    eprintln!("{} {}", "ℹ".style(paint(Style::new().blue().bold())), message);
}

/// Print a warning message to stderr.
///
/// # Examples
///
/// ```no_run
/// use playcheck_cli::ui::warning;
///
/// warning("2 of 5 trials timed out");
/// ```
pub fn warning(message: &str) {
    eprintln!(
        "{} {}",
        "⚠".style(paint(Style::new().yellow().bold())),
        message.style(paint(Style::new().yellow()))
    );
}
