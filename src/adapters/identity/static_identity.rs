//! Static identity adapter.
//!
//! Reports a fixed user taken from configuration. Used by the headless
//! runner, where there is no interactive sign-in.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::ports::IdentityProvider;

/// Identity provider that always returns the same user (or nobody).
#[derive(Debug, Clone, Default)]
pub struct StaticIdentityProvider {
    user: Option<AuthenticatedUser>,
}

impl StaticIdentityProvider {
    pub fn new(user: Option<AuthenticatedUser>) -> Self {
        Self { user }
    }

    /// Provider with nobody signed in.
    pub fn signed_out() -> Self {
        Self { user: None }
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    async fn current_user(&self) -> Result<Option<AuthenticatedUser>, AuthError> {
        Ok(self.user.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;

    #[tokio::test]
    async fn returns_configured_user() {
        let user = AuthenticatedUser::new(
            UserId::new("ops").unwrap(),
            Some("ops@example.com".to_string()),
        );
        let provider = StaticIdentityProvider::new(Some(user.clone()));
        assert_eq!(provider.current_user().await.unwrap(), Some(user));
    }

    #[tokio::test]
    async fn signed_out_returns_none() {
        let provider = StaticIdentityProvider::signed_out();
        assert_eq!(provider.current_user().await.unwrap(), None);
    }
}
