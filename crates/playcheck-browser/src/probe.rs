//! [`playcheck::Probe`] over a live Chrome tab.

use crate::page::Page;
use crate::script;
use async_trait::async_trait;
use playcheck::{MediaCommand, Probe, ProbeResult};
use serde_json::Value;
use tracing::trace;

#[async_trait]
impl Probe for Page {
    async fn evaluate(&self, command: &MediaCommand<'_>) -> ProbeResult<Value> {
        let source = script::render(command)?;
        let value = self.evaluate_value(&source).await?;
        trace!(%command, %value, "probe");
        Ok(value)
    }
}
