//! Client-side plumbing shared by the host binary and the single-page app.
//!
//! The REST backend owns every record. This crate holds the typed API client
//! that talks to it, the generic resource collection that keeps an in-memory
//! copy of one resource list, the session derived from the bearer token, and
//! the display helpers views share.

pub mod api;
pub mod badges;
pub mod error;
pub mod format;
pub mod resource;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{ApiClient, HttpRequest, HttpResponse, Method, Transport};
pub use badges::{Badge, Badged, Tone};
pub use error::ApiError;
pub use resource::{
    Notice, NoticeLevel, Resource, ResourceApi, ResourceCollection, ResourceEvent, ResourceState,
};
pub use session::{Claims, MemoryTokenStore, Session, SessionError, TokenStore};

use serde::{Deserialize, Serialize};

/// Runtime configuration the host serves to the SPA at `/config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Base URL of the REST backend, without trailing slash.
    pub api_base_url: String,
    /// ISO 4217 code used for every amount.
    pub currency: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080/api".to_string(),
            currency: format::DEFAULT_CURRENCY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_wire_names() {
        let json = serde_json::to_value(ClientConfig::default()).unwrap();
        assert_eq!(json["apiBaseUrl"], "http://localhost:8080/api");
        assert_eq!(json["currency"], "INR");
    }
}
