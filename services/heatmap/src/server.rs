//! HTTP server rendering the heat map on every page load.
//!
//! Provides endpoints for:
//! - `/` the interactive HTML page
//! - `/chart.svg` and `/chart.png` standalone renders
//! - `/health` liveness probe

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::Extension,
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde_json::json;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

use heatmap_common::{ChartError, ChartResult};
use renderer::ChartRenderer;

use crate::fetch::DatasetClient;
use crate::output::{render_chart, OutputFormat, RenderedChart};

/// Shared, read-only handler state.
pub struct AppState {
    pub client: DatasetClient,
    pub renderer: ChartRenderer,
}

impl AppState {
    pub fn new(client: DatasetClient, renderer: ChartRenderer) -> Self {
        Self { client, renderer }
    }
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(page_handler))
        .route("/chart.svg", get(svg_handler))
        .route("/chart.png", get(png_handler))
        .route("/health", get(health_handler))
        .layer(Extension(state))
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Bind `addr` and serve until the process is stopped.
pub async fn run_server(state: Arc<AppState>, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(%addr, source = %state.client.source(), "Heat map server listening");

    axum::serve(listener, router(state))
        .await
        .context("Server error")
}

async fn page_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    render_response(&state, OutputFormat::Html).await
}

async fn svg_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    render_response(&state, OutputFormat::Svg).await
}

async fn png_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    render_response(&state, OutputFormat::Png).await
}

async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn render_response(state: &AppState, format: OutputFormat) -> Response {
    match load_and_render(state, format).await {
        Ok(chart) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, chart.format.content_type()),
                (header::CACHE_CONTROL, "no-store"),
            ],
            chart.bytes,
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, format = ?format, "Failed to render heat map");
            let status =
                StatusCode::from_u16(e.http_status_code()).unwrap_or(StatusCode::BAD_GATEWAY);
            (status, e.to_string()).into_response()
        }
    }
}

/// Fetch the dataset, then render off the async runtime.
async fn load_and_render(state: &AppState, format: OutputFormat) -> ChartResult<RenderedChart> {
    let dataset = state.client.load().await?;
    let renderer = state.renderer.clone();

    tokio::task::spawn_blocking(move || render_chart(&renderer, &dataset, format))
        .await
        .map_err(|e| ChartError::Render(format!("render task failed: {}", e)))?
}
