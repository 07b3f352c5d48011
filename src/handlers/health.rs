use axum::{extract::State, response::Json};
use tracing::{instrument, warn};
use crate::schemas::{AppState, HealthResponse};

/// Health check endpoint
#[instrument(skip(state))]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let bundle = tokio::fs::try_exists(state.config.index_file())
        .await
        .unwrap_or(false);
    if !bundle {
        warn!("No index.html in {}", state.config.dist_dir.display());
    }

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        bundle,
    })
}
