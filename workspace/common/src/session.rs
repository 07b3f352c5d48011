//! Application session derived from the backend's bearer token.
//!
//! The token is a JWT signed by the backend. Only its payload is read here,
//! without signature verification, to learn who is logged in and when the
//! token expires. Expiry is checked once, when the session is restored at
//! load; a token that expires mid-session surfaces as a 401 on the next
//! request.

use std::cell::RefCell;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use model::{CurrentUser, Id, LoginResponse};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Token must have three dot-separated segments")]
    Malformed,

    #[error("Token payload is not valid base64url: {0}")]
    Encoding(String),

    #[error("Token payload is not valid JSON: {0}")]
    Payload(String),

    #[error("Token does not identify a user")]
    MissingUser,

    #[error("Token expired at {0}")]
    Expired(i64),
}

/// Claims read from the token payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claims {
    pub user_id: Id,
    pub username: String,
    /// Expiry as seconds since the Unix epoch.
    pub exp: Option<i64>,
}

impl Claims {
    pub fn decode(token: &str) -> Result<Self, SessionError> {
        let mut segments = token.trim().split('.');
        let payload = match (segments.next(), segments.next(), segments.next(), segments.next()) {
            (Some(_), Some(payload), Some(_), None) => payload,
            _ => return Err(SessionError::Malformed),
        };

        let bytes = URL_SAFE_NO_PAD
            .decode(payload.trim_end_matches('='))
            .map_err(|e| SessionError::Encoding(e.to_string()))?;
        let value: Value =
            serde_json::from_slice(&bytes).map_err(|e| SessionError::Payload(e.to_string()))?;

        let user_id = claim_id(&value, "userId")
            .or_else(|| claim_id(&value, "sub"))
            .ok_or(SessionError::MissingUser)?;
        let username = value
            .get("username")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let exp = value.get("exp").and_then(Value::as_i64);

        Ok(Self {
            user_id,
            username,
            exp,
        })
    }

    /// Tokens without an expiry are treated as expired.
    pub fn is_expired(&self, now: i64) -> bool {
        self.exp.is_none_or(|exp| exp <= now)
    }

    pub fn user(&self) -> CurrentUser {
        CurrentUser {
            id: self.user_id,
            username: self.username.clone(),
        }
    }
}

fn claim_id(value: &Value, key: &str) -> Option<Id> {
    match value.get(key)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Where the token survives page reloads.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: RefCell::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

/// Who is logged in, passed explicitly to everything that needs identity.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    token: Option<String>,
    user: Option<CurrentUser>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Restores the session persisted in `store`. Invalid or expired tokens
    /// are removed and yield an anonymous session.
    pub fn restore(store: &impl TokenStore, now: i64) -> Self {
        let Some(token) = store.load() else {
            debug!("No stored token; starting anonymous session");
            return Self::anonymous();
        };

        match Claims::decode(&token) {
            Ok(claims) if claims.is_expired(now) => {
                warn!(
                    user_id = claims.user_id,
                    exp = ?claims.exp,
                    "Stored token expired; logging out"
                );
                store.clear();
                Self::anonymous()
            }
            Ok(claims) => {
                info!(user_id = claims.user_id, "Restored session for {}", claims.username);
                Self {
                    user: Some(claims.user()),
                    token: Some(token),
                }
            }
            Err(e) => {
                warn!("Discarding invalid stored token: {}", e);
                store.clear();
                Self::anonymous()
            }
        }
    }

    /// Persists the token from a successful login. The identity comes from
    /// the response when it names the user, otherwise from the token.
    pub fn login(store: &impl TokenStore, response: LoginResponse) -> Result<Self, SessionError> {
        let user = match (response.user_id, response.username) {
            (Some(id), Some(username)) => CurrentUser { id, username },
            (id, username) => {
                let claims = Claims::decode(&response.token)?;
                CurrentUser {
                    id: id.unwrap_or(claims.user_id),
                    username: username.unwrap_or(claims.username),
                }
            }
        };

        store.save(&response.token);
        info!(user_id = user.id, "Logged in as {}", user.username);
        Ok(Self {
            token: Some(response.token),
            user: Some(user),
        })
    }

    pub fn logout(store: &impl TokenStore) -> Self {
        store.clear();
        info!("Logged out");
        Self::anonymous()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&CurrentUser> {
        self.user.as_ref()
    }

    pub fn user_id(&self) -> Option<Id> {
        self.user.as_ref().map(|u| u.id)
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {t}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::token;
    use serde_json::json;

    const NOW: i64 = 1_700_000_000;

    #[test]
    fn test_decode_user_id_claim() {
        let claims =
            Claims::decode(&token(json!({"userId": 42, "username": "asha", "exp": NOW + 60})))
                .unwrap();
        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.username, "asha");
        assert!(!claims.is_expired(NOW));
    }

    #[test]
    fn test_decode_falls_back_to_sub() {
        let claims = Claims::decode(&token(json!({"sub": "17", "exp": NOW}))).unwrap();
        assert_eq!(claims.user_id, 17);
        assert!(claims.is_expired(NOW));
    }

    #[test]
    fn test_decode_errors() {
        assert_eq!(Claims::decode("abc"), Err(SessionError::Malformed));
        assert!(matches!(Claims::decode("a.!!!.c"), Err(SessionError::Encoding(_))));
        assert_eq!(
            Claims::decode(&token(json!({"sub": "alice"}))),
            Err(SessionError::MissingUser)
        );
    }

    #[test]
    fn test_restore_valid_token() {
        let store = MemoryTokenStore::with_token(&token(
            json!({"userId": 1, "username": "u", "exp": NOW + 1}),
        ));
        let session = Session::restore(&store, NOW);
        assert!(session.is_authenticated());
        assert_eq!(session.user_id(), Some(1));
        assert!(session.bearer().unwrap().starts_with("Bearer "));
    }

    #[test]
    fn test_restore_expired_token_clears_store() {
        let store = MemoryTokenStore::with_token(&token(json!({"userId": 1, "exp": NOW - 1})));
        let session = Session::restore(&store, NOW);
        assert!(!session.is_authenticated());
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_restore_garbage_token() {
        let store = MemoryTokenStore::with_token("not-a-token");
        assert_eq!(Session::restore(&store, NOW), Session::anonymous());
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_login_and_logout() {
        let store = MemoryTokenStore::new();
        let jwt = token(json!({"userId": 9, "username": "from-token", "exp": NOW + 100}));
        let session = Session::login(
            &store,
            LoginResponse {
                token: jwt.clone(),
                user_id: None,
                username: Some("asha".to_string()),
            },
        )
        .unwrap();
        assert_eq!(session.user().unwrap(), &CurrentUser { id: 9, username: "asha".to_string() });
        assert_eq!(store.load(), Some(jwt));

        let session = Session::logout(&store);
        assert!(!session.is_authenticated());
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_login_with_opaque_token_and_full_response() {
        let store = MemoryTokenStore::new();
        let session = Session::login(
            &store,
            LoginResponse {
                token: "opaque".to_string(),
                user_id: Some(3),
                username: Some("asha".to_string()),
            },
        )
        .unwrap();
        assert_eq!(session.token(), Some("opaque"));
    }
}
