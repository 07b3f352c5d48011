use model::{LoginRequest, LoginResponse, RegisterRequest};
use tracing::{debug, error, info};

use crate::api::{ApiClient, HttpRequest, Transport, json_body};
use crate::error::ApiError;

impl<T: Transport> ApiClient<T> {
    /// Exchanges credentials for a bearer token.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        const FALLBACK: &str = "Login failed";
        debug!("Logging in as {}", request.username);
        let http = HttpRequest::post("/auth/login").json(json_body(request, FALLBACK)?);
        let result = self.fetch::<LoginResponse>(http, FALLBACK).await;
        match &result {
            Ok(_) => info!("Logged in as {}", request.username),
            Err(e) => error!("Login failed for {}: {}", request.username, e),
        }
        result
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        const FALLBACK: &str = "Registration failed";
        debug!("Registering user {}", request.username);
        let http = HttpRequest::post("/auth/register").json(json_body(request, FALLBACK)?);
        let result = self.send_discarding(http, FALLBACK).await;
        match &result {
            Ok(()) => info!("Registered user {}", request.username),
            Err(e) => error!("Registration failed for {}: {}", request.username, e),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use crate::api::ApiClient;
    use crate::testing::MockTransport;
    use model::LoginRequest;
    use serde_json::json;

    #[tokio::test]
    async fn test_login() {
        let client = ApiClient::new(MockTransport::new());
        client
            .transport()
            .respond_json(200, json!({"token": "abc.def.ghi", "userId": 5, "username": "asha"}));

        let response = client
            .login(&LoginRequest {
                username: "asha".to_string(),
                password: "secret1".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(response.token, "abc.def.ghi");
        assert_eq!(response.user_id, Some(5));
        assert_eq!(client.transport().last_request().path, "/auth/login");
    }

    #[tokio::test]
    async fn test_bad_credentials() {
        let client = ApiClient::new(MockTransport::new());
        client
            .transport()
            .respond_json(401, json!({"message": "Invalid username or password"}));

        let err = client.login(&LoginRequest::default()).await.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.message(), "Invalid username or password");
    }
}
