use anyhow::{Context, Result};
use chrono::DateTime;
use common::Claims;
use tracing::warn;

/// Human-readable summary of a session token. Expired tokens are reported,
/// not rejected.
pub fn inspect_token(token: &str, now: i64) -> Result<String> {
    let token = token.trim();
    let token = token.strip_prefix("Bearer ").unwrap_or(token);
    let claims = Claims::decode(token).context("Not a valid session token")?;

    let expiry = match claims.exp {
        Some(exp) => {
            let at = DateTime::from_timestamp(exp, 0)
                .map(|at| at.to_rfc3339())
                .unwrap_or_else(|| exp.to_string());
            if claims.is_expired(now) {
                warn!("Token for user {} expired at {}", claims.user_id, at);
                format!("{at} (expired)")
            } else {
                format!("{at} (valid)")
            }
        }
        None => "none (treated as expired)".to_string(),
    };

    let username = if claims.username.is_empty() { "-" } else { claims.username.as_str() };
    Ok(format!(
        "User ID:  {}\nUsername: {}\nExpires:  {}",
        claims.user_id, username, expiry
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_utils::token;

    #[test]
    fn test_inspect_valid_token() {
        let summary =
            inspect_token(&token(r#"{"userId":7,"username":"asha","exp":2000}"#), 1000).unwrap();
        assert!(summary.contains("User ID:  7"));
        assert!(summary.contains("Username: asha"));
        assert!(summary.contains("(valid)"));
    }

    #[test]
    fn test_inspect_expired_token_with_bearer_prefix() {
        let bearer = format!("Bearer {}", token(r#"{"sub":"3","exp":1000}"#));
        let summary = inspect_token(&bearer, 5000).unwrap();
        assert!(summary.contains("User ID:  3"));
        assert!(summary.contains("Username: -"));
        assert!(summary.contains("(expired)"));
    }

    #[test]
    fn test_inspect_rejects_garbage() {
        assert!(inspect_token("not-a-token", 0).is_err());
    }
}
