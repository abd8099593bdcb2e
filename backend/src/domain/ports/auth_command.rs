//! Driving port for signup and login.
//!
//! Inbound adapters call this port with validated credentials and the role
//! implied by the endpoint. Failures keep their auth-specific shape so the
//! adapter can pick the response message.

use async_trait::async_trait;

use crate::domain::{AuthError, Credentials, LoginOutcome, Role, SignupOutcome};

/// Driving port for account creation and token exchange.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthCommand: Send + Sync {
    /// Register a new account with the given role.
    async fn signup(&self, credentials: Credentials, role: Role)
    -> Result<SignupOutcome, AuthError>;

    /// Verify credentials and issue a bearer token. The stored role must
    /// equal `role`.
    async fn login(&self, credentials: Credentials, role: Role) -> Result<LoginOutcome, AuthError>;
}
