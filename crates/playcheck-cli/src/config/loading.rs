use crate::config::{Overrides, PlaycheckConfig};
use figment::{
    Figment,
    providers::{Env, Format as _, Serialized, Toml},
};
use playcheck::ConfigError;
use std::path::Path;
use tracing::debug;

/// Config file looked up in the working directory when `--config` is not given.
pub const CONFIG_FILE: &str = "playcheck.toml";

/// Prefix of environment variables that override the config file.
pub const ENV_PREFIX: &str = "PLAYCHECK_";

/// Keys read from the environment, after the prefix is stripped.
const ENV_KEYS: [&str; 7] = [
    "selector",
    "max_wait",
    "runs",
    "log_dir",
    "container",
    "headless",
    "chrome",
];

impl PlaycheckConfig {
    /// Load configuration from multiple sources.
    /// Priority: CLI args > environment variables > config file > defaults
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if an explicit `config_path` does not exist, and
    /// `InvalidValue` if any layer holds a value of the wrong type.
    pub fn load(overrides: &Overrides, config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        let config_file = match config_path {
            Some(path) if !path.exists() => return Err(ConfigError::NotFound(path.to_path_buf())),
            Some(path) => Some(path.to_path_buf()),
            None => {
                let default_path = Path::new(CONFIG_FILE);
                default_path.exists().then(|| default_path.to_path_buf())
            }
        };

        if let Some(path) = config_file {
            debug!("Loading config file {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        // PLAYCHECK_MAX_WAIT, PLAYCHECK_LOG_DIR, etc. Field names contain
        // underscores, so the prefix is stripped without splitting.
        figment = figment.merge(Env::prefixed(ENV_PREFIX).only(&ENV_KEYS));

        figment = figment.merge(Serialized::defaults(overrides));

        figment.extract().map_err(|e| ConfigError::InvalidValue {
            field: "configuration".to_string(),
            value: e.to_string(),
            hint: format!("Check {} syntax and {}* environment variables", CONFIG_FILE, ENV_PREFIX),
        })
    }
}
