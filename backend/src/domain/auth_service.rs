//! Signup and login orchestration.
//!
//! Login checks run in a fixed order: the account must exist, the password
//! must verify, and only then is the stored role compared with the role the
//! endpoint expects.
//!
//! Hashing and verification are CPU bound and run on the blocking pool.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{Span, info, warn};
use zeroize::Zeroizing;

use crate::domain::ports::{
    AuthCommand, PasswordHashError, PasswordHasher, TokenError, TokenIssuer, UserPersistenceError,
    UserRepository,
};
use crate::domain::{
    AuthError, Credentials, LoginOutcome, Role, SignupOutcome, User, UserId,
};

/// Domain service implementing [`AuthCommand`].
#[derive(Clone)]
pub struct AuthService<U, H, T> {
    users: Arc<U>,
    hasher: Arc<H>,
    tokens: Arc<T>,
    clock: Arc<dyn Clock>,
}

impl<U, H, T> AuthService<U, H, T> {
    /// Create a new auth service.
    pub fn new(users: Arc<U>, hasher: Arc<H>, tokens: Arc<T>, clock: Arc<dyn Clock>) -> Self {
        Self {
            users,
            hasher,
            tokens,
            clock,
        }
    }
}

fn map_user_error(error: UserPersistenceError) -> AuthError {
    match error {
        UserPersistenceError::Connection { message } => AuthError::Unavailable { message },
        UserPersistenceError::Query { message } => AuthError::Persistence { message },
        UserPersistenceError::DuplicateEmail { email } => AuthError::DuplicateEmail { email },
    }
}

fn map_hash_error(error: PasswordHashError) -> AuthError {
    match error {
        PasswordHashError::Hashing { message } => AuthError::Hashing { message },
    }
}

/// Run `work` on the blocking pool inside the caller's span, so logs keep the
/// request's trace id.
async fn run_blocking<F, R>(work: F) -> Result<R, AuthError>
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    let span = Span::current();
    tokio::task::spawn_blocking(move || span.in_scope(work))
        .await
        .map_err(|err| AuthError::Hashing {
            message: format!("password hashing task failed: {err}"),
        })
}

fn map_token_error(error: TokenError) -> AuthError {
    AuthError::TokenIssue {
        message: error.to_string(),
    }
}

#[async_trait]
impl<U, H, T> AuthCommand for AuthService<U, H, T>
where
    U: UserRepository,
    H: PasswordHasher + 'static,
    T: TokenIssuer,
{
    async fn signup(
        &self,
        credentials: Credentials,
        role: Role,
    ) -> Result<SignupOutcome, AuthError> {
        let email = credentials.email();

        // Skip the hash on an obvious duplicate; `create` still decides races.
        if self
            .users
            .find_by_email(email)
            .await
            .map_err(map_user_error)?
            .is_some()
        {
            warn!(role = %role, "signup rejected: email already registered");
            return Err(AuthError::DuplicateEmail {
                email: email.to_string(),
            });
        }

        let hasher = Arc::clone(&self.hasher);
        let password = Zeroizing::new(credentials.password().to_owned());
        let password_hash = run_blocking(move || hasher.hash(&password))
            .await?
            .map_err(map_hash_error)?;
        let user = User::new(
            UserId::random(),
            email.clone(),
            password_hash,
            role,
            self.clock.utc(),
        );

        self.users.create(&user).await.map_err(|err| {
            if matches!(err, UserPersistenceError::DuplicateEmail { .. }) {
                warn!(role = %role, "signup lost a race for the same email");
            }
            map_user_error(err)
        })?;

        info!(user_id = %user.id(), email = %user.email(), role = %role, "account created");
        Ok(SignupOutcome {
            user_id: *user.id(),
            role,
        })
    }

    async fn login(&self, credentials: Credentials, role: Role) -> Result<LoginOutcome, AuthError> {
        let user = self
            .users
            .find_by_email(credentials.email())
            .await
            .map_err(map_user_error)?
            .ok_or_else(|| {
                warn!(role = %role, "login rejected: unknown email");
                AuthError::InvalidCredentials
            })?;

        let hasher = Arc::clone(&self.hasher);
        let password = Zeroizing::new(credentials.password().to_owned());
        let stored_hash = user.password_hash().clone();
        if !run_blocking(move || hasher.verify(&password, &stored_hash)).await? {
            warn!(user_id = %user.id(), role = %role, "login rejected: password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        if user.role() != role {
            warn!(user_id = %user.id(), expected = %role, actual = %user.role(), "login role mismatch");
            return Err(AuthError::RoleMismatch {
                expected: role,
                actual: user.role(),
            });
        }

        let token = self
            .tokens
            .issue(user.email(), user.role(), self.clock.utc())
            .map_err(map_token_error)?;

        info!(user_id = %user.id(), email = %user.email(), role = %role, "login succeeded");
        Ok(LoginOutcome {
            token,
            role: user.role(),
        })
    }
}

#[cfg(test)]
#[path = "auth_service_tests.rs"]
mod tests;
