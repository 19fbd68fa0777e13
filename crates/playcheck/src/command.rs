//! The typed command set sent through a [`crate::Probe`].
//!
//! The monitor never builds script text. It names what it wants to know about
//! the media element and the probe implementation decides how to ask the page.
//! Each command documents the value shape a probe must return for it.

use std::fmt;

/// One question or action against the media element matched by `selector`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaCommand<'a> {
    /// `true` if an element matches the selector.
    Exists {
        /// CSS selector of the media element
        selector: &'a str,
    },

    /// The element's duration in seconds when finite, otherwise null.
    ReadDuration {
        /// CSS selector of the media element
        selector: &'a str,
    },

    /// Starts playback. `true` if the play call was accepted, `false` if the
    /// element is gone or the call threw. A rejected play promise is not
    /// awaited.
    Play {
        /// CSS selector of the media element
        selector: &'a str,
    },

    /// `true` if the element reports it has ended. Also `true` when the
    /// element no longer exists.
    EvaluateEnded {
        /// CSS selector of the media element
        selector: &'a str,
    },

    /// The element's current playback position in seconds, or null when the
    /// element no longer exists.
    EvaluateCurrentTime {
        /// CSS selector of the media element
        selector: &'a str,
    },
}

impl<'a> MediaCommand<'a> {
    /// The selector this command targets.
    #[must_use]
    pub fn selector(&self) -> &'a str {
        match *self {
            Self::Exists { selector }
            | Self::ReadDuration { selector }
            | Self::Play { selector }
            | Self::EvaluateEnded { selector }
            | Self::EvaluateCurrentTime { selector } => selector,
        }
    }

    /// Short stable name, used in logs and error messages.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Exists { .. } => "exists",
            Self::ReadDuration { .. } => "read_duration",
            Self::Play { .. } => "play",
            Self::EvaluateEnded { .. } => "evaluate_ended",
            Self::EvaluateCurrentTime { .. } => "evaluate_current_time",
        }
    }
}

impl fmt::Display for MediaCommand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name(), self.selector())
    }
}
