#[cfg(test)]
mod integration_tests {
    use crate::schemas::HealthResponse;
    use crate::test_utils::test_utils::{setup_dist_dir, setup_test_app, INDEX_HTML};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use common::ClientConfig;

    #[tokio::test]
    async fn test_health_check_with_bundle() {
        let dist = setup_dist_dir();
        let server = TestServer::new(setup_test_app(dist.path())).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
        assert!(body.bundle);
    }

    #[tokio::test]
    async fn test_health_check_without_bundle() {
        let empty = tempfile::TempDir::new().unwrap();
        let server = TestServer::new(setup_test_app(empty.path())).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert!(!body.bundle);
    }

    #[tokio::test]
    async fn test_client_config_served() {
        let dist = setup_dist_dir();
        let server = TestServer::new(setup_test_app(dist.path())).unwrap();

        let response = server.get("/config.json").await;

        response.assert_status(StatusCode::OK);
        let config: ClientConfig = response.json();
        assert_eq!(config.api_base_url, "https://api.example.com/api");
        assert_eq!(config.currency, "USD");
    }

    #[tokio::test]
    async fn test_static_asset_served() {
        let dist = setup_dist_dir();
        let server = TestServer::new(setup_test_app(dist.path())).unwrap();

        let response = server.get("/app.js").await;

        response.assert_status(StatusCode::OK);
        assert!(response.text().contains("fintrack"));
    }

    #[tokio::test]
    async fn test_client_routes_fall_back_to_index() {
        let dist = setup_dist_dir();
        let server = TestServer::new(setup_test_app(dist.path())).unwrap();

        for path in [
            "/",
            "/dashboard",
            "/transactions",
            "/scheduled-transactions",
            "/no/such/page",
        ] {
            let response = server.get(path).await;
            response.assert_status(StatusCode::OK);
            assert_eq!(response.text(), INDEX_HTML, "path {path}");
        }
    }

    #[tokio::test]
    async fn test_missing_bundle_is_not_found() {
        let empty = tempfile::TempDir::new().unwrap();
        let server = TestServer::new(setup_test_app(empty.path())).unwrap();

        let response = server.get("/dashboard").await;

        response.assert_status(StatusCode::NOT_FOUND);
    }
}
