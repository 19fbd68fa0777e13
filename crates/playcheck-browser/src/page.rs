//! Page-level browser operations and navigation.
//!
//! This module provides the Page type, which represents a browser tab and
//! exposes navigation and script execution. The [`playcheck::Probe`]
//! implementation for it lives in [`crate::probe`].

use crate::error::{BrowserError, Result};
use crate::wait::{WaitConfig, wait_for_result};
use chromiumoxide::page::Page as ChromePage;
use serde_json::Value;
use tracing::debug;

/// How far a navigation must progress before it counts as loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadState {
    /// `document.readyState` is `interactive` or `complete`.
    #[default]
    DomContentLoaded,
    /// `document.readyState` is `complete`.
    Load,
}

impl LoadState {
    fn is_reached(self, ready_state: &str) -> bool {
        match self {
            LoadState::DomContentLoaded => matches!(ready_state, "interactive" | "complete"),
            LoadState::Load => ready_state == "complete",
        }
    }

    fn describe(self) -> &'static str {
        match self {
            LoadState::DomContentLoaded => "DOMContentLoaded",
            LoadState::Load => "load",
        }
    }
}

/// A browser tab.
#[derive(Debug)]
pub struct Page {
    inner: ChromePage,
}

impl Page {
    pub(crate) fn new(page: ChromePage) -> Self {
        Self { inner: page }
    }

    /// Navigates to an absolute URL and waits until `state` is reached.
    ///
    /// # Errors
    ///
    /// Returns `NavigationFailed` if the page fails to load, or `WaitTimeout`
    /// if it does not reach `state` within `wait.timeout`.
    pub async fn navigate(&self, url: &str, state: LoadState, wait: WaitConfig) -> Result<()> {
        debug!(url, state = state.describe(), "navigating");

        self.inner
            .goto(url)
            .await
            .map_err(|e| BrowserError::NavigationFailed {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        self.wait_for_load(state, wait).await
    }

    /// Waits for the document to reach `state`.
    ///
    /// # Errors
    ///
    /// Returns an error if the wait times out.
    pub async fn wait_for_load(&self, state: LoadState, config: WaitConfig) -> Result<()> {
        wait_for_result(
            || async move {
                let ready: String = self.evaluate("document.readyState").await?;
                Ok(state.is_reached(&ready))
            },
            config,
            state.describe(),
        )
        .await
    }

    /// Executes JavaScript in the page context and deserializes the result.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let title: String = page.evaluate("document.title").await?;
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if script execution fails or the result cannot be deserialized.
    pub async fn evaluate<T>(&self, script: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let value = self.evaluate_value(script).await?;
        serde_json::from_value(value).map_err(|e| BrowserError::ScriptExecutionFailed(e.to_string()))
    }

    /// Executes JavaScript and returns the raw JSON result.
    ///
    /// `undefined` and `null` both come back as `Value::Null`.
    ///
    /// # Errors
    ///
    /// Returns an error if script execution fails.
    pub async fn evaluate_value(&self, script: &str) -> Result<Value> {
        let result = self
            .inner
            .evaluate(script)
            .await
            .map_err(|e| BrowserError::ScriptExecutionFailed(e.to_string()))?;

        Ok(result.value().cloned().unwrap_or(Value::Null))
    }

    /// Returns the page title.
    ///
    /// # Errors
    ///
    /// Returns an error if script execution fails.
    pub async fn title(&self) -> Result<String> {
        self.evaluate("document.title").await
    }

    /// Closes the tab.
    ///
    /// # Errors
    ///
    /// Returns an error if closing the page fails.
    pub async fn close(self) -> Result<()> {
        self.inner.close().await.map_err(BrowserError::ChromiumOxide)
    }
}
