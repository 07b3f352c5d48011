use crate::config::HostConfig;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<HostConfig>,
}

impl AppState {
    pub fn new(config: HostConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Application version
    pub version: String,
    /// Whether the compiled app is present in the dist directory
    pub bundle: bool,
}
