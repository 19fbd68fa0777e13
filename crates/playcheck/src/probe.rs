//! The capability the monitor needs from a live page.
//!
//! A `Probe` is bound to one page for one run. It holds no trial state of its
//! own; everything the monitor learns comes back through [`Probe::evaluate`].
//! Launching the browser and loading the page happen before a probe exists and
//! are owned by whoever constructs it.

use crate::command::MediaCommand;
use crate::error::ProbeError;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// Result type for probe operations.
pub type ProbeResult<T> = std::result::Result<T, ProbeError>;

/// Query and drive one media element on a live page.
///
/// Implementations must be usable from a single task for the whole run. The
/// trait is object-safe so the trial runner can work over `&dyn Probe`.
#[async_trait]
pub trait Probe: Send + Sync {
    /// Evaluates a command against the current page state.
    ///
    /// `Value::Null` is the "null" result described on each
    /// [`MediaCommand`] variant.
    async fn evaluate(&self, command: &MediaCommand<'_>) -> ProbeResult<Value>;

    /// Returns true if an element matches `selector`.
    async fn exists(&self, selector: &str) -> ProbeResult<bool> {
        let command = MediaCommand::Exists { selector };
        match self.evaluate(&command).await? {
            Value::Bool(found) => Ok(found),
            Value::Null => Ok(false),
            other => Err(ProbeError::UnexpectedValue {
                command: command.name(),
                value: other.to_string(),
            }),
        }
    }

    /// Pauses the calling task.
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
