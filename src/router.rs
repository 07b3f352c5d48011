use crate::handlers::{client_config::client_config, health::health_check};
use crate::schemas::AppState;
use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Create application router with all routes and middleware.
///
/// Unknown paths that are not files in the dist directory are answered with
/// `index.html` so client-side routes survive a reload.
pub fn create_router(state: AppState) -> Router {
    let config = state.config.clone();
    let spa = ServeDir::new(&config.dist_dir).fallback(ServeFile::new(config.index_file()));

    Router::new()
        .route("/health", get(health_check))
        .route("/config.json", get(client_config))
        .fallback_service(spa)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(config.request_timeout())),
        )
        .with_state(state)
}
