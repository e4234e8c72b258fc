//! Identity configuration
//!
//! The intake runs as whichever user is configured here. With no user id
//! configured the session is unauthenticated and submission fails.

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::{AuthenticatedUser, UserId};

/// Signed-in user for this session
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdentityConfig {
    /// Identity-provider user id
    #[serde(default)]
    pub user_id: Option<String>,

    /// Email address, if known
    #[serde(default)]
    pub email: Option<String>,
}

impl IdentityConfig {
    /// The configured user, or `None` when signed out
    pub fn to_user(&self) -> Result<Option<AuthenticatedUser>, ValidationError> {
        match &self.user_id {
            None => Ok(None),
            Some(id) => {
                let id = UserId::new(id.clone()).map_err(|_| ValidationError::InvalidUserId)?;
                Ok(Some(AuthenticatedUser::new(id, self.email.clone())))
            }
        }
    }

    /// Validate identity configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.to_user().map(|_| ())
    }
}
