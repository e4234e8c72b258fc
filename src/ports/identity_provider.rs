//! Identity provider port for the acting user.
//!
//! Submissions are attributed to whoever is signed in when submit runs.
//! An absent identity is not an error at this layer; the submit handler
//! decides what absence means.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Looks up the user the current session belongs to.
///
/// # Contract
///
/// Implementations must:
/// - Return `Ok(Some(user))` when a session is established
/// - Return `Ok(None)` when nobody is signed in
/// - Return `AuthError::ServiceUnavailable` for transient errors
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn current_user(&self) -> Result<Option<AuthenticatedUser>, AuthError>;
}
