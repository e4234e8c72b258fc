//! Authentication types for the domain layer.
//!
//! These types describe the acting user as reported by the identity
//! provider. They have no provider dependencies; any session mechanism can
//! populate them via the `IdentityProvider` port.

use super::UserId;
use thiserror::Error;

/// The user on whose behalf a submission is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The unique user identifier from the identity provider.
    pub id: UserId,

    /// User's email address, when the provider knows it.
    pub email: Option<String>,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    pub fn new(id: UserId, email: Option<String>) -> Self {
        Self { id, email }
    }
}

/// Failures of the identity provider itself.
///
/// An absent session is not an error at this level; the provider reports it
/// as `Ok(None)` and the submission writer decides what that means.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The session exists but could not be verified.
    #[error("Invalid or expired session")]
    InvalidSession,

    /// The identity service is unavailable (network, config, etc.).
    #[error("Identity service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if this is a transient error that may succeed on retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, AuthError::ServiceUnavailable(_))
    }
}
