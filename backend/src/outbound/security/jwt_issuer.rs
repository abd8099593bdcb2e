//! HS256 JSON Web Token implementation of the `TokenIssuer` port.
//!
//! Claims carry the subject email, the role (`SME` / `INVESTOR`), and
//! `iat`/`exp` as Unix seconds. Expiry is checked with zero leeway.

use chrono::{DateTime, TimeDelta, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::domain::ports::{TokenError, TokenIssuer};
use crate::domain::{BearerToken, Email, Role, TokenClaims};

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    role: Role,
    iat: i64,
    exp: i64,
}

/// Signs tokens with a shared secret.
pub struct JwtTokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: TimeDelta,
}

impl JwtTokenIssuer {
    /// Build an issuer from a signing secret and token lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Issue`] when the secret is empty or the lifetime
    /// is not positive.
    pub fn new(secret: &[u8], ttl: TimeDelta) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::issue("signing secret must not be empty"));
        }
        if ttl <= TimeDelta::zero() {
            return Err(TokenError::issue("token lifetime must be positive"));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Ok(Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            ttl,
        })
    }

    /// Build an issuer whose lifetime is given in whole minutes.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Issue`] when `minutes` does not fit a
    /// [`TimeDelta`], plus every failure [`JwtTokenIssuer::new`] reports.
    pub fn with_ttl_minutes(secret: &[u8], minutes: i64) -> Result<Self, TokenError> {
        let ttl = TimeDelta::try_minutes(minutes).ok_or_else(|| {
            TokenError::issue(format!("token lifetime of {minutes} minutes is out of range"))
        })?;
        Self::new(secret, ttl)
    }

    /// Lifetime added to `issued_at` to compute `exp`.
    pub fn ttl(&self) -> TimeDelta {
        self.ttl
    }
}

impl std::fmt::Debug for JwtTokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtTokenIssuer")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

fn timestamp(seconds: i64) -> Result<DateTime<Utc>, TokenError> {
    DateTime::<Utc>::from_timestamp(seconds, 0)
        .ok_or_else(|| TokenError::malformed(format!("timestamp out of range: {seconds}")))
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(
        &self,
        subject: &Email,
        role: Role,
        issued_at: DateTime<Utc>,
    ) -> Result<BearerToken, TokenError> {
        let expires_at = issued_at
            .checked_add_signed(self.ttl)
            .ok_or_else(|| TokenError::issue("failed to calculate expiration time"))?;
        let claims = Claims {
            sub: subject.to_string(),
            role,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map(BearerToken::new)
            .map_err(|err| TokenError::issue(err.to_string()))
    }

    fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation).map_err(|err| {
            match err.kind() {
                ErrorKind::ExpiredSignature => TokenError::expired(),
                ErrorKind::InvalidSignature => TokenError::invalid_signature(),
                _ => TokenError::malformed(err.to_string()),
            }
        })?;

        let Claims { sub, role, iat, exp } = data.claims;
        Ok(TokenClaims {
            subject: sub,
            role,
            issued_at: timestamp(iat)?,
            expires_at: timestamp(exp)?,
        })
    }
}
