//! Configuration system for playcheck with multi-source loading.
//!
//! Merges settings from CLI args, environment variables, and config files.
//! Priority: CLI > Environment (`PLAYCHECK_*`) > File (`playcheck.toml`) > Defaults

mod loading;
mod tests;

use playcheck::{
    ConfigError, DEFAULT_CONTAINER, DEFAULT_MAX_WAIT_SECS, DEFAULT_RUNS, DEFAULT_SELECTOR,
    DirectorySink, RunConfig,
};
use playcheck_browser::LaunchConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use loading::{CONFIG_FILE, ENV_PREFIX};

/// playcheck configuration, loaded from `playcheck.toml`, the environment,
/// and CLI flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlaycheckConfig {
    /// CSS selector of the media element
    pub selector: String,

    /// Seconds to wait for playback to end; non-positive means the default
    pub max_wait: i64,

    /// Number of trials per check
    pub runs: u32,

    /// Directory reports are stored under; nothing is stored when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,

    /// Subdirectory of `log_dir` for reports
    pub container: String,

    /// Run Chrome without a window
    pub headless: bool,

    /// Chrome executable (auto-detected when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chrome: Option<PathBuf>,
}

impl Default for PlaycheckConfig {
    fn default() -> Self {
        Self {
            selector: DEFAULT_SELECTOR.to_string(),
            max_wait: DEFAULT_MAX_WAIT_SECS as i64,
            runs: DEFAULT_RUNS,
            log_dir: None,
            container: DEFAULT_CONTAINER.to_string(),
            headless: LaunchConfig::default().headless,
            chrome: None,
        }
    }
}

/// Values given on the command line. Unset fields leave lower layers alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Overrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_wait: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runs: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headless: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chrome: Option<PathBuf>,
}

impl From<&crate::cli::RunArgs> for Overrides {
    fn from(args: &crate::cli::RunArgs) -> Self {
        Self {
            selector: args.selector.clone(),
            max_wait: args.max_wait,
            runs: args.runs,
            log_dir: args.log_dir.clone(),
            container: args.container.clone(),
            headless: args.headed.then_some(false),
            chrome: args.chrome.clone(),
        }
    }
}

impl From<&crate::cli::ServeArgs> for Overrides {
    fn from(args: &crate::cli::ServeArgs) -> Self {
        Self {
            chrome: args.chrome.clone(),
            ..Self::default()
        }
    }
}

impl PlaycheckConfig {
    /// Validate configuration for logical consistency.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.run_config().validate()?;

        if self.log_dir.is_some() && self.container.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "container".to_string(),
                value: String::new(),
                hint: format!("Use a directory name such as '{}'", DEFAULT_CONTAINER),
            });
        }

        Ok(())
    }

    /// Trial settings with the configured trial count.
    pub fn run_config(&self) -> RunConfig {
        self.run_config_with_runs(self.runs)
    }

    /// Trial settings with an explicit trial count.
    pub fn run_config_with_runs(&self, runs: u32) -> RunConfig {
        RunConfig::new(runs)
            .with_selector(self.selector.clone())
            .with_max_wait(self.max_wait)
    }

    /// Browser launch settings.
    pub fn launch_config(&self) -> LaunchConfig {
        let mut launch = LaunchConfig {
            headless: self.headless,
            ..LaunchConfig::default()
        };
        if let Some(chrome) = &self.chrome {
            launch = launch.with_chrome_path(chrome);
        }
        launch
    }

    /// The report sink, if a log directory is configured.
    pub fn sink(&self) -> Option<DirectorySink> {
        self.log_dir
            .as_ref()
            .map(|dir| DirectorySink::new(dir).with_container(self.container.clone()))
    }
}
