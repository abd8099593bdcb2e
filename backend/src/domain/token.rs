//! Bearer token values exchanged with clients.

use std::fmt;

use chrono::{DateTime, Utc};

use super::Role;

/// Signed, self-contained bearer token.
///
/// Holders treat the value as opaque. `Debug` output is redacted so tokens do
/// not end up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Wrap an encoded token produced by a [`crate::domain::ports::TokenIssuer`].
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Consume the token, returning the encoded string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for BearerToken {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(<redacted>)")
    }
}

/// Identity and role recovered from a verified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    /// Identity the token was issued to (the user's email).
    pub subject: String,
    pub role: Role,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}
