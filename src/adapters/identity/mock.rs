//! Mock identity adapter for testing.
//!
//! Lets tests sign a user in or out between calls and force errors.
//!
//! # Example
//!
//! ```ignore
//! use sdr_intake::adapters::identity::MockIdentityProvider;
//!
//! let identity = MockIdentityProvider::new().with_test_user("user-123");
//! identity.sign_out();
//! assert_eq!(identity.current_user().await.unwrap(), None);
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::IdentityProvider;

/// Mock identity provider for testing.
#[derive(Debug, Default)]
pub struct MockIdentityProvider {
    /// The currently signed-in user, if any
    user: RwLock<Option<AuthenticatedUser>>,
    /// Optional error to return for all lookups (for error testing)
    force_error: RwLock<Option<AuthError>>,
    calls: AtomicUsize,
}

impl MockIdentityProvider {
    /// Creates a mock with nobody signed in.
    pub fn new() -> Self {
        Self::default()
    }

    /// Signs in the given user.
    pub fn with_user(self, user: AuthenticatedUser) -> Self {
        self.sign_in(user);
        self
    }

    /// Signs in a simple test user with the given ID.
    pub fn with_test_user(self, user_id: impl Into<String>) -> Self {
        let user_id = user_id.into();
        let email = format!("{}@test.example.com", user_id);
        match UserId::new(user_id) {
            Ok(id) => self.with_user(AuthenticatedUser::new(id, Some(email))),
            Err(_) => self,
        }
    }

    /// Forces all lookups to return the specified error.
    pub fn with_error(self, error: AuthError) -> Self {
        *self.force_error.write().unwrap_or_else(|e| e.into_inner()) = Some(error);
        self
    }

    pub fn sign_in(&self, user: AuthenticatedUser) {
        *self.user.write().unwrap_or_else(|e| e.into_inner()) = Some(user);
    }

    pub fn sign_out(&self) {
        *self.user.write().unwrap_or_else(|e| e.into_inner()) = None;
    }

    /// Clears the forced error and returns to normal operation.
    pub fn clear_error(&self) {
        *self.force_error.write().unwrap_or_else(|e| e.into_inner()) = None;
    }

    /// Number of `current_user` calls so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn current_user(&self) -> Result<Option<AuthenticatedUser>, AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(error) = self
            .force_error
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
        {
            return Err(error);
        }

        Ok(self.user.read().unwrap_or_else(|e| e.into_inner()).clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn starts_signed_out() {
        let identity = MockIdentityProvider::new();
        assert_eq!(identity.current_user().await.unwrap(), None);
        assert_eq!(identity.call_count(), 1);
    }

    #[tokio::test]
    async fn with_test_user_signs_in() {
        let identity = MockIdentityProvider::new().with_test_user("user-123");
        let user = identity.current_user().await.unwrap().unwrap();
        assert_eq!(user.id.as_str(), "user-123");
        assert_eq!(user.email.as_deref(), Some("user-123@test.example.com"));
    }

    #[tokio::test]
    async fn sign_out_removes_user() {
        let identity = MockIdentityProvider::new().with_test_user("user-123");
        identity.sign_out();
        assert_eq!(identity.current_user().await.unwrap(), None);
    }

    #[tokio::test]
    async fn forced_error_wins_until_cleared() {
        let identity = MockIdentityProvider::new()
            .with_test_user("user-123")
            .with_error(AuthError::service_unavailable("down"));

        assert!(matches!(
            identity.current_user().await,
            Err(AuthError::ServiceUnavailable(_))
        ));

        identity.clear_error();
        assert!(identity.current_user().await.unwrap().is_some());
    }
}
