//! Report persistence tests.

mod common;

use common::ScriptedProbe;
use playcheck::{
    DEFAULT_CONTAINER, DirectorySink, ReportSequence, ReportSink, RunConfig, TrialRunner,
    persist_quietly,
};
use serde_json::json;
use tempfile::TempDir;

async fn sample_report() -> ReportSequence {
    let probe = ScriptedProbe::new()
        .ending_after(1)
        .with_current_time(json!(3.25));
    TrialRunner::new(RunConfig::new(2)).run(&probe).await
}

#[tokio::test]
async fn creates_the_container_and_writes_json() {
    let temp = TempDir::new().unwrap();
    let sink = DirectorySink::new(temp.path());
    let report = sample_report().await;

    let location = sink.persist(&report).await.expect("persist");

    let dir = temp.path().join(DEFAULT_CONTAINER);
    assert!(dir.is_dir());
    assert!(location.starts_with(&dir.display().to_string()));

    let written = std::fs::read_to_string(&location).unwrap();
    let parsed: ReportSequence = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed, report);
}

#[tokio::test]
async fn default_filename_is_timestamped() {
    let temp = TempDir::new().unwrap();
    let sink = DirectorySink::new(temp.path()).with_container("logs");

    let location = sink.persist(&sample_report().await).await.unwrap();

    let name = std::path::Path::new(&location)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap()
        .to_string();
    assert!(name.starts_with("video_log_"), "{name}");
    assert!(name.ends_with(".json"), "{name}");
    // video_log_YYYYmmdd_HHMMSS.json
    assert_eq!(name.len(), "video_log_".len() + 15 + ".json".len());
}

#[tokio::test]
async fn explicit_filename_is_overwritten() {
    let temp = TempDir::new().unwrap();
    let sink = DirectorySink::new(temp.path()).with_filename("latest.json");
    let target = sink.container_dir().join("latest.json");

    std::fs::create_dir_all(sink.container_dir()).unwrap();
    std::fs::write(&target, "stale").unwrap();

    sink.persist(&sample_report().await).await.unwrap();

    let written = std::fs::read_to_string(&target).unwrap();
    assert!(written.trim_start().starts_with('['));
}

#[tokio::test]
async fn failures_are_reported_by_persist() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("not-a-dir");
    std::fs::write(&blocker, "file").unwrap();

    let sink = DirectorySink::new(&blocker);
    let err = sink.persist(&sample_report().await).await.unwrap_err();

    assert!(err.to_string().contains("not-a-dir"));
}

#[tokio::test]
async fn persist_quietly_swallows_failures() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("not-a-dir");
    std::fs::write(&blocker, "file").unwrap();

    let report = sample_report().await;
    persist_quietly(&DirectorySink::new(&blocker), &report).await;

    assert_eq!(report.len(), 2);
}
