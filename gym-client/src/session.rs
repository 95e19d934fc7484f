//! Administrative session
//!
//! Built once at the composition root from a successful login and
//! passed by reference to whatever needs the authenticated user or the
//! live topic name. There is no ambient global.

use crate::{ClientResult, HttpClient};
use shared::models::AuthUser;

/// Facility-wide access-event topic
pub const ACCESS_TOPIC: &str = "/topic/access-logs";

/// A single active administrative session
#[derive(Debug, Clone)]
pub struct Session {
    user: AuthUser,
}

impl Session {
    /// Wrap an already-authenticated user
    pub fn new(user: AuthUser) -> Self {
        Self { user }
    }

    /// Authenticate against the backend and build a session
    pub async fn login(http: &HttpClient, email: &str, password: &str) -> ClientResult<Self> {
        let user = http.login(email, password).await?;
        tracing::info!(user = %user.name, "logged in");
        Ok(Self::new(user))
    }

    /// The authenticated administrator
    pub fn user(&self) -> &AuthUser {
        &self.user
    }

    /// First name for greetings, falling back to the full name
    pub fn first_name(&self) -> &str {
        self.user
            .name
            .split_whitespace()
            .next()
            .unwrap_or(&self.user.name)
    }

    /// Topic the event stream client should subscribe to
    pub fn access_topic(&self) -> &'static str {
        ACCESS_TOPIC
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> AuthUser {
        AuthUser {
            id: 1,
            name: name.to_string(),
            email: "admin@example.com".to_string(),
        }
    }

    #[test]
    fn first_name_splits_full_name() {
        let session = Session::new(user("Ana Torres"));
        assert_eq!(session.first_name(), "Ana");
    }

    #[test]
    fn first_name_falls_back_to_full_name() {
        let session = Session::new(user("Cher"));
        assert_eq!(session.first_name(), "Cher");
    }
}
