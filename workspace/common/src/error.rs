use model::FieldErrors;
use serde_json::Value;
use thiserror::Error;

/// Failure of an API operation, normalized to a message a user can read.
///
/// Every variant carries the message to show. Server-reported messages are
/// kept verbatim; otherwise the per-operation fallback ("Failed to create
/// account") is used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("{message}")]
    Transport { message: String, cause: String },

    /// The backend answered with a non-success status
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The bearer token was missing, invalid or expired
    #[error("{message}")]
    Unauthorized { message: String },

    /// The response body did not have the expected shape
    #[error("{message}")]
    Decode { message: String, cause: String },

    /// The draft failed form validation and was not sent
    #[error("{message}")]
    Validation { message: String, fields: FieldErrors },
}

impl ApiError {
    pub fn message(&self) -> &str {
        match self {
            ApiError::Transport { message, .. }
            | ApiError::Server { message, .. }
            | ApiError::Unauthorized { message }
            | ApiError::Decode { message, .. }
            | ApiError::Validation { message, .. } => message,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            ApiError::Unauthorized { .. } => Some(401),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    pub fn transport(fallback: &str, cause: impl Into<String>) -> Self {
        ApiError::Transport {
            message: fallback.to_string(),
            cause: cause.into(),
        }
    }

    pub fn decode(fallback: &str, cause: impl Into<String>) -> Self {
        ApiError::Decode {
            message: fallback.to_string(),
            cause: cause.into(),
        }
    }

    /// Builds the error for a non-success response, preferring the message
    /// the server put in the body.
    pub fn from_response(status: u16, body: &str, fallback: &str) -> Self {
        let message = server_message(body).unwrap_or_else(|| fallback.to_string());
        if status == 401 {
            ApiError::Unauthorized { message }
        } else {
            ApiError::Server { status, message }
        }
    }

    /// Wraps form-validation errors; the message is the first field's.
    pub fn validation(fields: FieldErrors) -> Self {
        let message = fields
            .values()
            .next()
            .cloned()
            .unwrap_or_else(|| "Please correct the highlighted fields".to_string());
        ApiError::Validation { message, fields }
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ApiError::Validation { fields, .. } => Some(fields),
            _ => None,
        }
    }
}

fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .filter_map(|key| value.get(key).and_then(Value::as_str))
        .map(str::trim)
        .find(|m| !m.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_is_preferred() {
        let err = ApiError::from_response(
            409,
            r#"{"message":"Category is referenced by transactions"}"#,
            "Failed to delete category",
        );
        assert_eq!(err.message(), "Category is referenced by transactions");
        assert_eq!(err.status(), Some(409));
    }

    #[test]
    fn test_error_field_is_used() {
        let err = ApiError::from_response(400, r#"{"error":"Bad amount"}"#, "Failed");
        assert_eq!(err.to_string(), "Bad amount");
    }

    #[test]
    fn test_fallback_when_body_has_no_message() {
        for body in ["", "<html>oops</html>", r#"{"message":""}"#, r#"{"status":500}"#] {
            let err = ApiError::from_response(500, body, "Failed to create account");
            assert_eq!(err.message(), "Failed to create account");
        }
    }

    #[test]
    fn test_unauthorized() {
        let err = ApiError::from_response(401, "", "Failed to fetch accounts");
        assert!(err.is_unauthorized());
        assert_eq!(err.message(), "Failed to fetch accounts");
    }

    #[test]
    fn test_validation_message() {
        let mut fields = FieldErrors::new();
        fields.insert("name".to_string(), "Account name is required".to_string());
        let err = ApiError::validation(fields);
        assert_eq!(err.message(), "Account name is required");
        assert_eq!(err.field_errors().map(|f| f.len()), Some(1));
    }
}
