use axum::{extract::State, response::Json};
use common::ClientConfig;
use tracing::instrument;
use crate::schemas::AppState;

/// Runtime configuration read by the single-page app at startup.
#[instrument(skip(state))]
pub async fn client_config(State(state): State<AppState>) -> Json<ClientConfig> {
    Json(state.config.client_config())
}
