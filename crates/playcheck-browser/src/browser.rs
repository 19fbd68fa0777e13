//! Browser lifecycle management and process control.
//!
//! This module provides `HeadlessBrowser`, which launches Chrome, drives its
//! CDP handler, and opens pages for trials.
//!
//! # Resource Safety
//!
//! chromiumoxide kills the Chrome process when its `Browser` is dropped, so a
//! panicking run does not leak processes. Each launch also owns a temporary
//! profile directory, removed on `close()` and when the launch itself fails.
//! Dropping the browser removes it on a best-effort basis, so explicit
//! cleanup via `close()` is still preferred.

use crate::error::{BrowserError, Result};
use crate::page::Page;
use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Configuration for launching Chrome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    /// Run in headless mode (default: true, false with the `visible` feature).
    pub headless: bool,

    /// Browser window size (default: 1280x720).
    pub window_size: (u32, u32),

    /// Additional Chrome arguments.
    pub args: Vec<String>,

    /// Chrome executable path (None = auto-detect).
    pub chrome_path: Option<PathBuf>,
}

impl LaunchConfig {
    /// Creates a new config with defaults for headless runs.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows the browser window.
    #[must_use]
    pub fn visible(mut self) -> Self {
        self.headless = false;
        self
    }

    /// Sets a custom window size.
    #[must_use]
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_size = (width, height);
        self
    }

    /// Adds additional Chrome arguments.
    #[must_use]
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args.extend(args);
        self
    }

    /// Uses a specific Chrome executable.
    #[must_use]
    pub fn with_chrome_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.chrome_path = Some(path.into());
        self
    }

    /// Converts to chromiumoxide `BrowserConfig` using `profile_dir` as the
    /// user data directory.
    fn to_browser_config(&self, profile_dir: &Path) -> Result<BrowserConfig> {
        let mut config = BrowserConfig::builder();

        if !self.headless {
            config = config.with_head();
        }

        config = config.window_size(self.window_size.0, self.window_size.1);

        // One profile per launch: concurrent runs (one per HTTP request) never
        // share Chrome's ProcessSingleton lock.
        config = config.user_data_dir(profile_dir);

        for arg in &self.args {
            config = config.arg(arg.clone());
        }

        if let Some(path) = &self.chrome_path {
            config = config.chrome_executable(path);
        }

        config.build().map_err(|e| BrowserError::LaunchFailed {
            reason: format!("invalid browser configuration: {e}"),
            source: None,
        })
    }
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            headless: !cfg!(feature = "visible"),
            window_size: (1280, 720),
            args: vec![
                // Security Note: --no-sandbox disables Chrome's security sandbox.
                // Required when user namespaces are unavailable (common in containers).
                "--no-sandbox".to_string(),
                // Prevents /dev/shm exhaustion in containerized environments
                "--disable-dev-shm-usage".to_string(),
            ],
            chrome_path: None,
        }
    }
}

/// A managed headless Chrome instance.
///
/// # Example
///
/// ```ignore
/// let browser = HeadlessBrowser::launch(LaunchConfig::default()).await?;
/// let page = browser.new_page().await?;
/// page.navigate("https://example.com", LoadState::DomContentLoaded, WaitConfig::default()).await?;
/// browser.close().await?;
/// ```
pub struct HeadlessBrowser {
    // Declared before `profile` so Chrome is killed before its profile is removed.
    inner: Arc<Mutex<Option<Browser>>>,
    profile: TempDir,
}

impl HeadlessBrowser {
    /// Launches Chrome with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `LaunchFailed` if Chrome is not installed, not executable,
    /// or fails to start.
    pub async fn launch(config: LaunchConfig) -> Result<Self> {
        debug!("Launching browser with config: {:?}", config);

        let profile = tempfile::Builder::new()
            .prefix("playcheck-")
            .tempdir()
            .map_err(|e| BrowserError::LaunchFailed {
                reason: "failed to create Chrome profile directory".to_string(),
                source: Some(Box::new(e)),
            })?;
        let browser_config = config.to_browser_config(profile.path())?;

        let (browser, mut handler) =
            Browser::launch(browser_config)
                .await
                .map_err(|e| BrowserError::LaunchFailed {
                    reason: "failed to launch Chrome process".to_string(),
                    source: Some(Box::new(e)),
                })?;

        // chromiumoxide only processes CDP events while the handler is polled.
        tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    warn!("Browser handler error: {}", e);
                }
            }
        });

        debug!(profile = %profile.path().display(), "Browser launched successfully");

        Ok(Self {
            inner: Arc::new(Mutex::new(Some(browser))),
            profile,
        })
    }

    /// The temporary profile directory Chrome runs with.
    #[must_use]
    pub fn profile_dir(&self) -> &Path {
        self.profile.path()
    }

    /// Opens a new blank tab.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyClosed` if the browser has been closed.
    pub async fn new_page(&self) -> Result<Page> {
        let browser = self.inner.lock().await;

        let browser = browser.as_ref().ok_or(BrowserError::AlreadyClosed)?;

        let chrome_page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| BrowserError::ConnectionFailed(e.to_string()))?;

        Ok(Page::new(chrome_page))
    }

    /// Closes the browser, waits for the Chrome process to exit and removes
    /// the profile directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the browser fails to close gracefully. The profile
    /// directory is removed either way.
    pub async fn close(self) -> Result<()> {
        let closed = self.shutdown().await;

        let profile = self.profile.path().to_path_buf();
        if let Err(e) = self.profile.close() {
            warn!("failed to remove Chrome profile {}: {}", profile.display(), e);
        }

        closed
    }

    async fn shutdown(&self) -> Result<()> {
        let mut browser_guard = self.inner.lock().await;

        if let Some(mut browser) = browser_guard.take() {
            debug!("Closing browser gracefully");
            browser
                .close()
                .await
                .map_err(|e| BrowserError::ConnectionFailed(e.to_string()))?;
            if let Err(e) = browser.wait().await {
                warn!("Chrome process did not exit cleanly: {}", e);
            }
        }

        Ok(())
    }

    /// Returns true if the browser has been closed.
    pub async fn is_closed(&self) -> bool {
        self.inner.lock().await.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_container_friendly() {
        let config = LaunchConfig::default();
        assert!(config.args.iter().any(|a| a == "--no-sandbox"));
        assert!(config.args.iter().any(|a| a == "--disable-dev-shm-usage"));
        assert!(config.chrome_path.is_none());
    }

    #[test]
    fn builder_methods_accumulate() {
        let config = LaunchConfig::new()
            .visible()
            .with_window_size(800, 600)
            .with_args(vec!["--mute-audio".to_string()])
            .with_chrome_path("/usr/bin/chromium");

        assert!(!config.headless);
        assert_eq!(config.window_size, (800, 600));
        assert_eq!(config.args.last().map(String::as_str), Some("--mute-audio"));
        assert_eq!(config.chrome_path, Some(PathBuf::from("/usr/bin/chromium")));
    }

    #[tokio::test]
    #[ignore] // Requires Chrome to be installed
    async fn browser_launch_and_close() {
        let browser = HeadlessBrowser::launch(LaunchConfig::default())
            .await
            .expect("failed to launch browser");

        assert!(!browser.is_closed().await);

        browser.close().await.expect("failed to close browser");
    }

    #[tokio::test]
    #[ignore] // Requires Chrome to be installed
    async fn close_removes_profile_directory() {
        let browser = HeadlessBrowser::launch(LaunchConfig::default())
            .await
            .expect("failed to launch browser");
        let profile = browser.profile_dir().to_path_buf();
        assert!(profile.is_dir());

        browser.close().await.expect("failed to close browser");

        assert!(!profile.exists());
    }

    #[test]
    fn profile_dir_becomes_user_data_dir() {
        let profile = tempfile::Builder::new().prefix("playcheck-").tempdir().unwrap();
        let config = LaunchConfig::default()
            .with_chrome_path("/usr/bin/chromium")
            .to_browser_config(profile.path());

        assert!(config.is_ok());
    }
}
