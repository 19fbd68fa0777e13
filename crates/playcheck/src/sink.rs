//! Optional persistence of finished reports.
//!
//! Persistence is fire-and-forget: a report is complete and correct whether or
//! not it could be stored. [`persist_quietly`] is the entry point callers use;
//! it logs failures and never returns them.

use crate::error::SinkError;
use crate::record::ReportSequence;
use async_trait::async_trait;
use chrono::Utc;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Default container (sub-directory) name for stored reports.
pub const DEFAULT_CONTAINER: &str = "video-playback-logs";

/// A storage backend for finished reports.
#[async_trait]
pub trait ReportSink: Send + Sync {
    /// Stores `report`, returning where it went.
    async fn persist(&self, report: &ReportSequence) -> Result<String, SinkError>;
}

/// Stores a report and logs, rather than returns, any failure.
pub async fn persist_quietly<S: ReportSink + ?Sized>(sink: &S, report: &ReportSequence) {
    match sink.persist(report).await {
        Ok(location) => debug!(%location, "stored playback report"),
        Err(err) => warn!("failed to store playback report: {}", err),
    }
}

/// Writes reports as JSON files under `<root>/<container>/`.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
    container: String,
    filename: Option<String>,
}

impl DirectorySink {
    /// Creates a sink rooted at `root` using the default container.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            container: DEFAULT_CONTAINER.to_string(),
            filename: None,
        }
    }

    /// Uses a different container name.
    #[must_use]
    pub fn with_container(mut self, container: impl Into<String>) -> Self {
        self.container = container.into();
        self
    }

    /// Always writes to `filename` instead of a timestamped name.
    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Directory reports are written into.
    #[must_use]
    pub fn container_dir(&self) -> PathBuf {
        self.root.join(&self.container)
    }

    fn target(&self) -> PathBuf {
        let name = self.filename.clone().unwrap_or_else(|| {
            format!("video_log_{}.json", Utc::now().format("%Y%m%d_%H%M%S"))
        });
        self.container_dir().join(name)
    }
}

fn write_error(path: &Path, source: std::io::Error) -> SinkError {
    SinkError::Write {
        path: path.to_path_buf(),
        source,
    }
}

#[async_trait]
impl ReportSink for DirectorySink {
    async fn persist(&self, report: &ReportSequence) -> Result<String, SinkError> {
        let dir = self.container_dir();
        if !tokio::fs::try_exists(&dir).await.unwrap_or(false) {
            tokio::fs::create_dir_all(&dir)
                .await
                .map_err(|e| write_error(&dir, e))?;
        }

        let path = self.target();
        let body = report.to_pretty_json()?;
        tokio::fs::write(&path, body)
            .await
            .map_err(|e| write_error(&path, e))?;

        Ok(path.display().to_string())
    }
}
