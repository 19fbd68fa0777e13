//! Spinner shown while trials run.

use super::paint;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::{OwoColorize, Style};
use std::time::Duration;

/// Simple spinner for tasks without known duration.
///
/// A single trial can take up to the max-wait deadline, so the spinner keeps
/// the terminal alive while the monitor polls.
///
/// # Examples
///
/// ```no_run
/// use playcheck_cli::ui::Spinner;
///
/// let spinner = Spinner::new("Loading page...");
/// // Do work...
/// spinner.finish("Page loaded");
/// ```
pub struct Spinner {
    pb: ProgressBar,
}

impl Spinner {
    /// Create and start a new spinner.
    pub fn new(message: &str) -> Self {
        let pb = ProgressBar::new_spinner();
        // The template is a literal, so this only fails if it is edited badly.
        if let Ok(style) =
            ProgressStyle::default_spinner().template("{spinner:.cyan} {msg} {elapsed:.dim}")
        {
            pb.set_style(style.tick_strings(&["◐", "◓", "◑", "◒", "●"]));
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        Self { pb }
    }

    /// Create a spinner that draws nothing, for `--json` and `--quiet` runs.
    pub fn hidden() -> Self {
        Self {
            pb: ProgressBar::hidden(),
        }
    }

    /// Update spinner message while it's running.
    pub fn set_message(&self, message: &str) {
        self.pb.set_message(message.to_string());
    }

    /// Print a line above the spinner without disturbing it.
    pub fn println(&self, line: &str) {
        self.pb.println(line);
    }

    /// Finish spinner with success message.
    pub fn finish(&self, message: &str) {
        self.pb.finish_with_message(format!(
            "{} {}",
            "✓".style(paint(Style::new().green())),
            message
        ));
    }

    /// Finish spinner with error message.
    pub fn fail(&self, message: &str) {
        self.pb.finish_with_message(format!(
            "{} {}",
            "✗".style(paint(Style::new().red())),
            message
        ));
    }

    /// Remove the spinner line entirely.
    pub fn clear(&self) {
        self.pb.finish_and_clear();
    }
}
