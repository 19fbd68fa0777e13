#[cfg(test)]
mod tests {
    use crate::config::*;
    use playcheck::ConfigError;
    use serial_test::serial;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    const VARS: [&str; 7] = [
        "PLAYCHECK_SELECTOR",
        "PLAYCHECK_MAX_WAIT",
        "PLAYCHECK_RUNS",
        "PLAYCHECK_LOG_DIR",
        "PLAYCHECK_CONTAINER",
        "PLAYCHECK_HEADLESS",
        "PLAYCHECK_CHROME",
    ];

    fn clear_env() {
        for var in VARS {
            unsafe { std::env::remove_var(var) };
        }
    }

    fn write_config(dir: &Path, contents: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILE);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    #[serial]
    fn test_defaults_without_any_source() {
        clear_env();
        let config = PlaycheckConfig::load(&Overrides::default(), None).unwrap();

        assert_eq!(config.selector, "video");
        assert_eq!(config.max_wait, 600);
        assert_eq!(config.runs, 5);
        assert_eq!(config.container, "video-playback-logs");
        assert!(config.log_dir.is_none());
        assert!(config.chrome.is_none());
    }

    #[test]
    #[serial]
    fn test_file_overrides_defaults() {
        clear_env();
        let temp = TempDir::new().unwrap();
        let path = write_config(
            temp.path(),
            r##"
            selector = "#player video"
            max_wait = 120
            log_dir = "logs"
            "##,
        );

        let config = PlaycheckConfig::load(&Overrides::default(), Some(&path)).unwrap();

        assert_eq!(config.selector, "#player video");
        assert_eq!(config.max_wait, 120);
        assert_eq!(config.log_dir, Some(PathBuf::from("logs")));
        // Untouched fields keep their defaults
        assert_eq!(config.runs, 5);
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        clear_env();
        let temp = TempDir::new().unwrap();
        let path = write_config(temp.path(), "runs = 2\nmax_wait = 30\n");

        unsafe {
            std::env::set_var("PLAYCHECK_RUNS", "7");
            std::env::set_var("PLAYCHECK_HEADLESS", "false");
            std::env::set_var("PLAYCHECK_CONTAINER", "nightly");
        }
        let config = PlaycheckConfig::load(&Overrides::default(), Some(&path));
        clear_env();
        let config = config.unwrap();

        assert_eq!(config.runs, 7);
        assert_eq!(config.max_wait, 30);
        assert!(!config.headless);
        assert_eq!(config.container, "nightly");
    }

    #[test]
    #[serial]
    fn test_cli_overrides_env() {
        clear_env();
        unsafe {
            std::env::set_var("PLAYCHECK_SELECTOR", "audio");
            std::env::set_var("PLAYCHECK_MAX_WAIT", "10");
        }
        let overrides = Overrides {
            selector: Some("#main".to_string()),
            ..Overrides::default()
        };
        let config = PlaycheckConfig::load(&overrides, None);
        clear_env();
        let config = config.unwrap();

        assert_eq!(config.selector, "#main");
        // Not given on the command line, so the environment wins
        assert_eq!(config.max_wait, 10);
    }

    #[test]
    #[serial]
    fn test_unrelated_env_vars_are_ignored() {
        clear_env();
        unsafe { std::env::set_var("PLAYCHECK_UNRELATED", "1") };
        let config = PlaycheckConfig::load(&Overrides::default(), None);
        unsafe { std::env::remove_var("PLAYCHECK_UNRELATED") };

        assert!(config.is_ok());
    }

    #[test]
    #[serial]
    fn test_missing_explicit_file_is_not_found() {
        clear_env();
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.toml");

        let err = PlaycheckConfig::load(&Overrides::default(), Some(&path)).unwrap_err();
        assert_eq!(err, ConfigError::NotFound(path));
    }

    #[test]
    #[serial]
    fn test_wrong_type_is_invalid_value() {
        clear_env();
        let temp = TempDir::new().unwrap();
        let path = write_config(temp.path(), "runs = \"many\"\n");

        let err = PlaycheckConfig::load(&Overrides::default(), Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "configuration"));
    }

    #[test]
    #[serial]
    fn test_unknown_file_key_is_rejected() {
        clear_env();
        let temp = TempDir::new().unwrap();
        let path = write_config(temp.path(), "selectr = \"video\"\n");

        assert!(PlaycheckConfig::load(&Overrides::default(), Some(&path)).is_err());
    }

    #[test]
    fn test_overrides_from_run_args() {
        let args = crate::cli::RunArgs {
            url: "https://example.com".to_string(),
            runs: Some(3),
            headed: true,
            ..Default::default()
        };

        let overrides = Overrides::from(&args);
        assert_eq!(overrides.runs, Some(3));
        assert_eq!(overrides.headless, Some(false));
        assert_eq!(overrides.selector, None);

        // Not passing --headed must not force headless either way
        let args = crate::cli::RunArgs::default();
        assert_eq!(Overrides::from(&args).headless, None);
    }

    #[test]
    fn test_conversions() {
        let config = PlaycheckConfig {
            selector: "#clip".to_string(),
            max_wait: -1,
            runs: 4,
            log_dir: Some(PathBuf::from("/var/log/playcheck")),
            container: "nightly".to_string(),
            headless: false,
            chrome: Some(PathBuf::from("/usr/bin/chromium")),
        };

        let run = config.run_config();
        assert_eq!(run.selector, "#clip");
        assert_eq!(run.max_wait, -1);
        assert_eq!(run.runs, 4);
        assert_eq!(config.run_config_with_runs(9).runs, 9);

        let launch = config.launch_config();
        assert!(!launch.headless);
        assert_eq!(launch.chrome_path, Some(PathBuf::from("/usr/bin/chromium")));

        let sink = config.sink().unwrap();
        assert_eq!(
            sink.container_dir(),
            PathBuf::from("/var/log/playcheck").join("nightly")
        );
    }

    #[test]
    fn test_no_sink_without_log_dir() {
        assert!(PlaycheckConfig::default().sink().is_none());
    }

    #[test]
    fn test_validation() {
        assert!(PlaycheckConfig::default().validate().is_ok());

        let empty_selector = PlaycheckConfig {
            selector: "  ".to_string(),
            ..PlaycheckConfig::default()
        };
        assert_eq!(empty_selector.validate(), Err(ConfigError::EmptySelector));

        let zero_runs = PlaycheckConfig {
            runs: 0,
            ..PlaycheckConfig::default()
        };
        assert_eq!(zero_runs.validate(), Err(ConfigError::ZeroRuns));

        let too_many_runs = PlaycheckConfig {
            runs: u32::MAX,
            ..PlaycheckConfig::default()
        };
        assert!(matches!(
            too_many_runs.validate(),
            Err(ConfigError::TooManyRuns { requested: u32::MAX, .. })
        ));

        let empty_container = PlaycheckConfig {
            log_dir: Some(PathBuf::from("logs")),
            container: String::new(),
            ..PlaycheckConfig::default()
        };
        assert!(matches!(
            empty_container.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
