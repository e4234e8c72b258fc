//! Identity provider adapters.
//!
//! - `StaticIdentityProvider` - Fixed user from configuration
//! - `MockIdentityProvider` - Test double with sign-in/out and forced errors

mod mock;
mod static_identity;

pub use mock::MockIdentityProvider;
pub use static_identity::StaticIdentityProvider;
