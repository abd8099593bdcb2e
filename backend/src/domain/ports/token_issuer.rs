//! Port for issuing and verifying bearer tokens.

use chrono::{DateTime, Utc};

use crate::domain::{BearerToken, Email, Role, TokenClaims};

use super::define_port_error;

define_port_error! {
    /// Errors raised by token adapters.
    pub enum TokenError {
        /// The token's expiry has passed.
        Expired => "token expired",
        /// The signature does not match the configured secret.
        InvalidSignature => "token signature invalid",
        /// The token could not be decoded.
        Malformed { message: String } => "token malformed: {message}",
        /// Encoding a new token failed.
        Issue { message: String } => "token issuance failed: {message}",
    }
}

/// Signs and verifies bearer tokens carrying an identity and role.
#[cfg_attr(test, mockall::automock)]
pub trait TokenIssuer: Send + Sync {
    /// Issue a token for `subject` valid from `issued_at` for the adapter's
    /// configured lifetime.
    fn issue(
        &self,
        subject: &Email,
        role: Role,
        issued_at: DateTime<Utc>,
    ) -> Result<BearerToken, TokenError>;

    /// Verify a token's signature and expiry, returning its claims.
    fn verify(&self, token: &str) -> Result<TokenClaims, TokenError>;
}
