use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::validation::parse_runs;

/// Available playcheck subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run playback trials against a page
    ///
    /// Loads the page once, then plays its video element the requested number
    /// of times, recording how each trial ended.
    Run(RunArgs),

    /// Serve playback checks over HTTP
    ///
    /// Exposes GET /api/playback?url=<URL>&runs=<N>, which launches a fresh
    /// browser per request and returns the JSON report.
    Serve(ServeArgs),
}

/// Arguments for the run command
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Page to load
    ///
    /// Examples:
    ///   playcheck run https://example.com/watch
    ///   playcheck run file:///tmp/player.html --runs 1
    #[arg(value_name = "URL")]
    pub url: String,

    /// Number of trials to run
    #[arg(short = 'n', long, value_parser = parse_runs, value_name = "N")]
    pub runs: Option<u32>,

    /// CSS selector of the media element (default: video)
    #[arg(short, long, value_name = "SELECTOR")]
    pub selector: Option<String>,

    /// Seconds to wait for playback to end in each trial
    ///
    /// Zero or negative values fall back to the default of 600.
    #[arg(short = 'w', long, value_name = "SECS", allow_negative_numbers = true)]
    pub max_wait: Option<i64>,

    /// Directory to store the JSON report in
    ///
    /// Reports are written to <LOG_DIR>/<CONTAINER>/video_log_<timestamp>.json.
    /// Nothing is stored when unset.
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Subdirectory of --log-dir for reports (default: video-playback-logs)
    #[arg(long, value_name = "NAME")]
    pub container: Option<String>,

    /// Config file (default: ./playcheck.toml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the report as JSON on stdout instead of a table
    #[arg(long)]
    pub json: bool,

    /// Show the browser window
    #[arg(long)]
    pub headed: bool,

    /// Chrome/Chromium executable to use
    #[arg(long, value_name = "PATH")]
    pub chrome: Option<PathBuf>,
}

/// Arguments for the serve command
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1", value_name = "HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 7070, value_name = "PORT")]
    pub port: u16,

    /// Config file (default: ./playcheck.toml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Chrome/Chromium executable to use
    #[arg(long, value_name = "PATH")]
    pub chrome: Option<PathBuf>,
}
