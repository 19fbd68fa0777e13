//! HTTP endpoint for playback checks.
//!
//! `GET /api/playback?url=<URL>&runs=<N>` launches a fresh browser for the
//! request, runs the trials, and answers with the JSON report. Storing the
//! report happens after the response is built and never changes its status.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing::get};
use playcheck::{MAX_RUNS, persist_quietly};
use playcheck_browser::check_run;
use serde::Deserialize;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::PlaycheckConfig;
use crate::error::{CliError, Result};

/// Body of the 400 response when `url` is missing or empty.
pub const NO_URL_MESSAGE: &str = "No URL provided";

#[derive(Clone)]
struct ServerState {
    config: Arc<PlaycheckConfig>,
}

/// Raw query string of a playback request.
///
/// `runs` stays a string so a bad value gets this endpoint's own 400 message
/// instead of the extractor's.
#[derive(Debug, Default, Deserialize)]
pub struct PlaybackQuery {
    /// Page to check
    pub url: Option<String>,
    /// Trial count; the configured default when absent
    pub runs: Option<String>,
}

/// A validated playback request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackRequest {
    /// Page to check
    pub url: String,
    /// Trial count, at least 1
    pub runs: u32,
}

/// Failure response of the endpoint. The body is plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request itself is unusable.
    BadRequest(String),
    /// The browser side failed before any trial ran.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response(),
        }
    }
}

impl PlaybackQuery {
    /// Validates the query, filling in `default_runs` when `runs` is absent.
    ///
    /// # Errors
    ///
    /// Returns `BadRequest` for a missing or blank URL and for a `runs` value
    /// that is not an integer from 1 to [`MAX_RUNS`].
    pub fn into_request(self, default_runs: u32) -> std::result::Result<PlaybackRequest, ApiError> {
        let url = self
            .url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ApiError::BadRequest(NO_URL_MESSAGE.to_string()))?;

        let runs = match self.runs.as_deref().map(str::trim) {
            None | Some("") => default_runs,
            Some(raw) => match raw.parse::<u32>() {
                Ok(runs) if (1..=MAX_RUNS).contains(&runs) => runs,
                _ => {
                    return Err(ApiError::BadRequest(format!(
                        "Invalid runs value: '{}' (expected an integer from 1 to {})",
                        raw, MAX_RUNS
                    )));
                }
            },
        };

        Ok(PlaybackRequest { url, runs })
    }
}

/// Builds the router for `config`.
pub fn router(config: PlaycheckConfig) -> Router {
    let state = ServerState {
        config: Arc::new(config),
    };

    Router::new()
        .route("/api/playback", get(api_playback))
        .route("/health", get(health))
        .with_state(state)
}

/// Serves the router on `addr` until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve(config: PlaycheckConfig, addr: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| CliError::Server(format!("failed to bind {}: {}", addr, e)))?;
    let local = listener.local_addr()?;

    info!("listening on http://{}", local);
    crate::ui::info(&format!(
        "Playback checks available at http://{}/api/playback?url=<URL>",
        local
    ));

    axum::serve(listener, router(config))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| CliError::Server(e.to_string()))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

async fn health() -> &'static str {
    "ok"
}

async fn api_playback(
    State(state): State<ServerState>,
    Query(query): Query<PlaybackQuery>,
) -> std::result::Result<Response, ApiError> {
    let request = query.into_request(state.config.runs)?;
    info!(url = %request.url, runs = request.runs, "playback request");

    let run_config = state.config.run_config_with_runs(request.runs);
    let report = check_run(&request.url, &state.config.launch_config(), &run_config)
        .await
        .map_err(|e| {
            warn!(url = %request.url, "playback check failed: {}", e);
            ApiError::Internal(format!("Error running browser: {}", e))
        })?;

    let response = Json(&report).into_response();

    if let Some(sink) = state.config.sink() {
        tokio::spawn(async move {
            persist_quietly(&sink, &report).await;
        });
    }

    Ok(response)
}
