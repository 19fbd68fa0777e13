//! One complete check: launch, load the page, run the trials, shut down.
//!
//! Everything that can fail here fails before the first trial starts. Once
//! the page is loaded the trial runner takes over and always produces a full
//! report.

use crate::browser::{HeadlessBrowser, LaunchConfig};
use crate::error::Result;
use crate::page::{LoadState, Page};
use crate::wait::WaitConfig;
use playcheck::{ReportSequence, RunConfig, TrialRecord, TrialRunner};
use tracing::{debug, info, warn};

/// Runs `config.runs` playback trials against `url` in a fresh browser.
///
/// # Errors
///
/// Returns an error if the config is invalid, Chrome cannot be launched, or
/// the page does not load.
pub async fn check_run(url: &str, launch: &LaunchConfig, config: &RunConfig) -> Result<ReportSequence> {
    check_run_with(url, launch, config, |_| {}).await
}

/// Like [`check_run`], calling `on_trial` as each trial finishes.
///
/// # Errors
///
/// See [`check_run`].
pub async fn check_run_with<F>(
    url: &str,
    launch: &LaunchConfig,
    config: &RunConfig,
    on_trial: F,
) -> Result<ReportSequence>
where
    F: FnMut(&TrialRecord) + Send,
{
    config.validate()?;

    let browser = HeadlessBrowser::launch(launch.clone()).await?;
    let page = match open(&browser, url).await {
        Ok(page) => page,
        Err(err) => {
            shutdown(browser).await;
            return Err(err);
        }
    };

    info!(url, "page loaded");
    let report = TrialRunner::new(config.clone()).run_with(&page, on_trial).await;

    if let Err(err) = page.close().await {
        debug!("failed to close page: {}", err);
    }
    shutdown(browser).await;
    Ok(report)
}

async fn open(browser: &HeadlessBrowser, url: &str) -> Result<Page> {
    let page = browser.new_page().await?;
    page.navigate(url, LoadState::DomContentLoaded, WaitConfig::default())
        .await?;
    Ok(page)
}

async fn shutdown(browser: HeadlessBrowser) {
    if let Err(err) = browser.close().await {
        warn!("failed to close browser: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BrowserError;
    use playcheck::ConfigError;

    #[tokio::test]
    async fn invalid_config_fails_before_launch() {
        // A bogus executable proves nothing was launched.
        let launch = LaunchConfig::default().with_chrome_path("/nonexistent/chrome");
        let config = RunConfig::new(0);

        let err = check_run("https://example.com", &launch, &config)
            .await
            .unwrap_err();

        assert!(matches!(err, BrowserError::Config(ConfigError::ZeroRuns)));
    }

    #[tokio::test]
    async fn oversized_run_count_fails_before_launch() {
        let launch = LaunchConfig::default().with_chrome_path("/nonexistent/chrome");

        let err = check_run("https://example.com", &launch, &RunConfig::new(u32::MAX))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            BrowserError::Config(ConfigError::TooManyRuns { .. })
        ));
    }

    #[tokio::test]
    async fn missing_chrome_is_a_launch_failure() {
        let launch = LaunchConfig::default().with_chrome_path("/nonexistent/chrome");

        let err = check_run("https://example.com", &launch, &RunConfig::new(1))
            .await
            .unwrap_err();

        assert!(matches!(err, BrowserError::LaunchFailed { .. }));
    }
}
