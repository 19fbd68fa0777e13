//! Rendering of media commands into page scripts.
//!
//! Every script is a self-invoking arrow function that looks the element up
//! again on each call, so a re-rendered or replaced element is always found.
//! The selector only ever appears as a JSON string literal.

use crate::error::{BrowserError, Result};
use playcheck::MediaCommand;

/// Renders `command` as a script that evaluates to the value the command
/// documents.
///
/// # Errors
///
/// Returns an error if the selector cannot be encoded.
pub fn render(command: &MediaCommand<'_>) -> Result<String> {
    let selector = serde_json::to_string(command.selector())
        .map_err(|e| BrowserError::ScriptExecutionFailed(e.to_string()))?;
    let lookup = format!("const v = document.querySelector({selector});");

    let body = match command {
        MediaCommand::Exists { .. } => "return v !== null;",
        MediaCommand::ReadDuration { .. } => {
            "if (!v) return null; return Number.isFinite(v.duration) ? v.duration : null;"
        }
        MediaCommand::Play { .. } => concat!(
            "if (!v) return false; ",
            "try { ",
            "const p = v.play(); ",
            "if (p && typeof p.then === 'function') { p.catch(e => console.log('play rejected:', e)); } ",
            "return true; ",
            "} catch (e) { return false; }"
        ),
        MediaCommand::EvaluateEnded { .. } => "return v ? !!v.ended : true;",
        MediaCommand::EvaluateCurrentTime { .. } => {
            "if (!v) return null; return Number.isFinite(v.currentTime) ? v.currentTime : null;"
        }
    };

    Ok(format!("(() => {{ {lookup} {body} }})()"))
}
