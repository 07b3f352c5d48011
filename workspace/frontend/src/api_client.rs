use async_trait::async_trait;
use common::{resource, ApiClient, ClientConfig, HttpRequest, HttpResponse, Method, Transport};
use gloo_net::http::{Request, RequestBuilder};
use yew::prelude::*;

use crate::session::SessionContext;
use crate::settings;

/// Browser transport: `fetch` through gloo-net with the session's bearer
/// token attached.
#[derive(Debug, Clone, PartialEq)]
pub struct GlooTransport {
    base_url: String,
    bearer: Option<String>,
}

impl GlooTransport {
    pub fn new(base_url: impl Into<String>, bearer: Option<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            bearer,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        let url = self.url(&request.path);
        log::trace!("{} {} - Building request", request.method, url);

        let mut builder: RequestBuilder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        builder = builder.query(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        if let Some(bearer) = &self.bearer {
            builder = builder.header("Authorization", bearer);
        }

        let outgoing = match &request.body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| format!("Failed to build request: {}", e))?;

        let response = outgoing
            .send()
            .await
            .map_err(|e| format!("Request failed: {}", e))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| format!("Failed to read response: {}", e))?;

        Ok(HttpResponse::new(status, body))
    }
}

pub type Client = ApiClient<GlooTransport>;
pub type AccountsApi = resource::Accounts<GlooTransport>;
pub type CategoriesApi = resource::Categories<GlooTransport>;
pub type TransactionsApi = resource::Transactions<GlooTransport>;
pub type ScheduledApi = resource::ScheduledTransactions<GlooTransport>;
pub type InvestmentsApi = resource::Investments<GlooTransport>;

/// API client bound to the current session, rebuilt when the token changes.
#[hook]
pub fn use_api_client() -> Client {
    let session = use_context::<SessionContext>().map(|ctx| ctx.session().bearer());
    let bearer = session.flatten();
    let client = use_memo(bearer, |bearer| {
        let base_url = settings::get_settings().api_base_url;
        log::debug!("Creating API client for {}", base_url);
        ApiClient::new(GlooTransport::new(base_url, bearer.clone()))
    });
    (*client).clone()
}

/// Runtime configuration published by the host next to the bundle. Missing
/// or unreadable configuration is not an error; defaults apply.
pub async fn fetch_client_config() -> Option<ClientConfig> {
    log::trace!("Fetching /config.json");
    let response = match Request::get("/config.json").send().await {
        Ok(response) if response.ok() => response,
        Ok(response) => {
            log::debug!("No runtime configuration (HTTP {})", response.status());
            return None;
        }
        Err(e) => {
            log::debug!("No runtime configuration: {}", e);
            return None;
        }
    };

    match response.json::<ClientConfig>().await {
        Ok(config) => {
            log::info!("Loaded runtime configuration: {:?}", config);
            Some(config)
        }
        Err(e) => {
            log::warn!("Ignoring malformed /config.json: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let transport = GlooTransport::new("http://localhost:8080/api/", None);
        assert_eq!(transport.url("/accounts"), "http://localhost:8080/api/accounts");
    }
}
