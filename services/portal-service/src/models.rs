// /auth-portal/services/portal-service/src/models.rs

use serde::Deserialize;
use sqlx::FromRow;
use std::fmt;
use validator::Validate;

/// Session key holding the authenticated user's id
pub const SESSION_USER_ID_KEY: &str = "user_id";

// ===== USER ENTITIES =====

#[derive(Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[sqlx(rename = "password")]
    pub password_hash: String,
}

// Hash stays out of logs and debug output
impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Identity resolved for the current request.
///
/// `None` covers both an anonymous session and a session whose `user_id`
/// no longer matches a row.
#[derive(Debug, Clone, Default)]
pub struct CurrentUser(pub Option<User>);

impl CurrentUser {
    pub fn anonymous() -> Self {
        Self(None)
    }

    pub fn user(&self) -> Option<&User> {
        self.0.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.0.is_some()
    }
}

// ===== REQUEST MODELS =====

/// Register and login submit the same two fields. Missing fields decode as
/// empty strings so they hit the "required" messages instead of a 422.
#[derive(Deserialize, Validate, Default)]
pub struct CredentialsForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Username is required."))]
    pub username: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required."))]
    pub password: String,
}

impl CredentialsForm {
    /// First failing field message, username before password
    pub fn first_error(&self) -> Option<String> {
        let errors = self.validate().err()?;
        let field_errors = errors.field_errors();

        ["username", "password"].iter().find_map(|field| {
            field_errors
                .get(*field)
                .and_then(|errs| errs.first())
                .map(|err| {
                    err.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid.", field))
                })
        })
    }
}

impl fmt::Debug for CredentialsForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialsForm")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(username: &str, password: &str) -> CredentialsForm {
        CredentialsForm {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_username_checked_first() {
        assert_eq!(form("", "").first_error().as_deref(), Some("Username is required."));
        assert_eq!(form("", "pw").first_error().as_deref(), Some("Username is required."));
    }

    #[test]
    fn test_password_required() {
        assert_eq!(form("alice", "").first_error().as_deref(), Some("Password is required."));
    }

    #[test]
    fn test_valid_form() {
        assert!(form("alice", "wonderland").first_error().is_none());
    }

    #[test]
    fn test_debug_hides_secrets() {
        let user = User {
            id: 1,
            username: "alice".into(),
            password_hash: "$argon2id$secret".into(),
        };
        assert!(!format!("{:?}", user).contains("argon2"));
        assert!(!format!("{:?}", form("alice", "wonderland")).contains("wonderland"));
    }
}
