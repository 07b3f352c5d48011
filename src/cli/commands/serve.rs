use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{info, debug, trace, error, warn};

use crate::config::HostConfig;
use crate::router::create_router;
use crate::schemas::AppState;

pub async fn serve(config: HostConfig) -> Result<()> {
    trace!("Entering serve function");
    info!("FinTrack host starting up");
    debug!("Serving app from {}", config.dist_dir.display());
    debug!("Clients will call the API at {}", config.api_base_url);

    if !config.index_file().is_file() {
        warn!(
            "{} not found; build the frontend before serving",
            config.index_file().display()
        );
    }

    let bind_address = config.bind_address.clone();
    let app = create_router(AppState::new(config));
    debug!("Router created successfully");

    trace!("Attempting to bind TCP listener to {}", bind_address);
    let listener = match TcpListener::bind(&bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", bind_address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", bind_address, e);
            return Err(e.into());
        }
    };

    info!("FinTrack running on http://{}", bind_address);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
