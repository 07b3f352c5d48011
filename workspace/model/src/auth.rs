use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::Id;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Registration form. Only the fields the backend expects are serialized;
/// the confirmation stays on the client.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(
        min = 3,
        max = 50,
        message = "Username must be between 3 and 50 characters"
    ))]
    pub username: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[serde(skip)]
    #[validate(must_match(other = "password", message = "Passwords must match"))]
    pub confirm_password: String,
    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Invalid email address")
    )]
    pub email: String,
}

/// Body returned by `/auth/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub user_id: Option<Id>,
    #[serde(default)]
    pub username: Option<String>,
}

/// Identity held by the session once a token has been accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: Id,
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration() -> RegisterRequest {
        RegisterRequest {
            username: "asha".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
            full_name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
        }
    }

    #[test]
    fn test_valid_registration() {
        assert!(crate::check(&registration()).is_ok());
    }

    #[test]
    fn test_registration_rules() {
        let request = RegisterRequest {
            username: "as".to_string(),
            confirm_password: "other".to_string(),
            email: "not-an-email".to_string(),
            ..registration()
        };
        let errors = crate::check(&request).unwrap_err();
        assert_eq!(errors["username"], "Username must be between 3 and 50 characters");
        assert_eq!(errors["confirm_password"], "Passwords must match");
        assert_eq!(errors["email"], "Invalid email address");
    }

    #[test]
    fn test_confirmation_not_sent() {
        let body = serde_json::to_value(registration()).unwrap();
        assert!(body.get("confirmPassword").is_none());
        assert_eq!(body["fullName"], "Asha Rao");
    }

    #[test]
    fn test_login_requires_both_fields() {
        let errors = crate::check(&LoginRequest::default()).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
