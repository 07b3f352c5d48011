#[cfg(test)]
pub mod test_utils {
    use crate::config::HostConfig;
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;
    use std::path::Path;
    use tempfile::TempDir;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    pub const INDEX_HTML: &str = "<!DOCTYPE html><html><body><div id=\"app\"></div></body></html>";

    /// Unsigned token with the given JSON payload.
    pub fn token(payload: &str) -> String {
        format!(
            "{}.{}.signature",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    /// Dist directory with an index page and one asset.
    pub fn setup_dist_dir() -> TempDir {
        let dir = TempDir::new().expect("Failed to create temp dir");
        std::fs::write(dir.path().join("index.html"), INDEX_HTML)
            .expect("Failed to write index.html");
        std::fs::write(dir.path().join("app.js"), "console.log('fintrack');")
            .expect("Failed to write app.js");
        dir
    }

    pub fn test_config(dist_dir: &Path) -> HostConfig {
        HostConfig {
            dist_dir: dist_dir.to_path_buf(),
            api_base_url: "https://api.example.com/api/".to_string(),
            currency: "usd".to_string(),
            ..HostConfig::default()
        }
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| level.parse::<Level>().ok())
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app for testing, serving `dist_dir`.
    pub fn setup_test_app(dist_dir: &Path) -> Router {
        let _ = init_test_tracing();
        create_router(AppState::new(test_config(dist_dir)))
    }
}
