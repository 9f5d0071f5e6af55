//! Session
//!
//! The signed-in user, read once from local storage at start-up and then
//! handed explicitly to whatever needs it.

use serde::Deserialize;
use thiserror::Error;

use crate::models::UserType;

pub const USER_KEY: &str = "user";
pub const JWT_KEY: &str = "jwt";

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("no signed-in user")]
    Missing,

    #[error("malformed user entry: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("local storage unavailable")]
    StorageUnavailable,
}

#[derive(Deserialize)]
struct StoredUser {
    #[serde(rename = "type")]
    user_type: UserType,
    #[serde(default)]
    email: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user_type: UserType,
    pub email: String,
    pub jwt: Option<String>,
}

impl Session {
    pub fn employee(email: impl Into<String>) -> Self {
        Self {
            user_type: UserType::Employee,
            email: email.into(),
            jwt: None,
        }
    }

    /// Parse the `user` entry; `jwt` is kept verbatim
    pub fn from_json(user: &str, jwt: Option<String>) -> Result<Self, SessionError> {
        let stored: StoredUser = serde_json::from_str(user)?;
        Ok(Self {
            user_type: stored.user_type,
            email: stored.email,
            jwt: jwt.filter(|t| !t.is_empty()),
        })
    }

    pub fn is_employee(&self) -> bool {
        self.user_type == UserType::Employee
    }

    /// Read the session from `window.localStorage`
    pub fn load() -> Result<Self, SessionError> {
        let storage = leptos::prelude::window()
            .local_storage()
            .ok()
            .flatten()
            .ok_or(SessionError::StorageUnavailable)?;
        let user = storage
            .get_item(USER_KEY)
            .ok()
            .flatten()
            .ok_or(SessionError::Missing)?;
        let jwt = storage.get_item(JWT_KEY).ok().flatten();
        Self::from_json(&user, jwt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_employee() {
        let session =
            Session::from_json(r#"{"type": "Employee", "email": "a@a"}"#, Some("token".into())).unwrap();
        assert!(session.is_employee());
        assert_eq!(session.email, "a@a");
        assert_eq!(session.jwt.as_deref(), Some("token"));
    }

    #[test]
    fn test_missing_email_and_empty_token() {
        let session = Session::from_json(r#"{"type": "Admin"}"#, Some(String::new())).unwrap();
        assert!(!session.is_employee());
        assert_eq!(session.email, "");
        assert_eq!(session.jwt, None);
    }

    #[test]
    fn test_malformed_user() {
        assert!(matches!(
            Session::from_json(r#"{"type": "Visitor"}"#, None),
            Err(SessionError::Malformed(_))
        ));
    }
}
