//! Authentication primitives: credentials, outcomes, and auth flow failures.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port or service.

use std::fmt;

use zeroize::Zeroizing;

use super::{BearerToken, Email, Role, UserId};

/// Domain error returned when credential payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialsValidationError {
    /// Email was missing or blank once trimmed.
    EmptyEmail,
    /// Password was blank.
    EmptyPassword,
}

impl fmt::Display for CredentialsValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for CredentialsValidationError {}

/// Validated email/password pair used by signup and login.
///
/// ## Invariants
/// - `email` is trimmed and must not be empty after trimming.
/// - `password` must be non-empty but keeps caller-provided whitespace; it is
///   zeroed on drop.
///
/// # Examples
/// ```
/// use backend::domain::Credentials;
///
/// let creds = Credentials::try_from_parts("sme1@test.com", "pw123").unwrap();
/// assert_eq!(creds.email().as_ref(), "sme1@test.com");
/// assert_eq!(creds.password(), "pw123");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: Email,
    password: Zeroizing<String>,
}

impl Credentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, CredentialsValidationError> {
        // Email::new only rejects blank input.
        let email = Email::new(email).map_err(|_| CredentialsValidationError::EmptyEmail)?;

        if password.is_empty() {
            return Err(CredentialsValidationError::EmptyPassword);
        }

        Ok(Self {
            email,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Email used as the unique login identity.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Plaintext password provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Acknowledgement returned by a successful signup. No token is issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupOutcome {
    pub user_id: UserId,
    pub role: Role,
}

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub token: BearerToken,
    pub role: Role,
}

/// Failures raised by the auth flow.
///
/// `InvalidCredentials` covers both an unknown email and a wrong password so
/// callers cannot enumerate accounts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Payload failed shape validation.
    #[error(transparent)]
    Validation(#[from] CredentialsValidationError),
    /// Signup conflict.
    #[error("User already exists with email: {email}")]
    DuplicateEmail { email: String },
    /// Unknown email or wrong password.
    #[error("Invalid email or password")]
    InvalidCredentials,
    /// Credentials were valid but belong to a different role.
    #[error("Invalid role for this login endpoint")]
    RoleMismatch { expected: Role, actual: Role },
    /// The credential store could not be reached.
    #[error("credential store unavailable: {message}")]
    Unavailable { message: String },
    /// The credential store rejected or failed the operation.
    #[error("credential store failure: {message}")]
    Persistence { message: String },
    /// The password hasher failed.
    #[error("password hashing failed: {message}")]
    Hashing { message: String },
    /// The token issuer failed.
    #[error("token issuance failed: {message}")]
    TokenIssue { message: String },
}

impl AuthError {
    /// Whether the failure originates in infrastructure rather than the
    /// caller's input.
    #[must_use]
    pub const fn is_infrastructure(&self) -> bool {
        matches!(
            self,
            Self::Unavailable { .. }
                | Self::Persistence { .. }
                | Self::Hashing { .. }
                | Self::TokenIssue { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "pw", CredentialsValidationError::EmptyEmail)]
    #[case("   ", "pw", CredentialsValidationError::EmptyEmail)]
    #[case("sme1@test.com", "", CredentialsValidationError::EmptyPassword)]
    fn invalid_credentials(
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected: CredentialsValidationError,
    ) {
        let err = Credentials::try_from_parts(email, password)
            .expect_err("invalid inputs must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    #[case("  investor@test.com  ", "secret")]
    #[case("sme1@test.com", " padded password ")]
    fn valid_credentials_trim_email_only(#[case] email: &str, #[case] password: &str) {
        let creds =
            Credentials::try_from_parts(email, password).expect("valid inputs should succeed");
        assert_eq!(creds.email().as_ref(), email.trim());
        assert_eq!(creds.password(), password);
    }

    #[rstest]
    fn debug_output_redacts_password() {
        let creds = Credentials::try_from_parts("sme1@test.com", "hunter2").expect("valid");
        let rendered = format!("{creds:?}");
        assert!(rendered.contains("sme1@test.com"));
        assert!(!rendered.contains("hunter2"));
    }

    #[rstest]
    fn duplicate_email_message_names_the_email() {
        let err = AuthError::DuplicateEmail {
            email: "sme1@test.com".to_owned(),
        };
        assert_eq!(err.to_string(), "User already exists with email: sme1@test.com");
    }

    #[rstest]
    #[case(AuthError::InvalidCredentials, false)]
    #[case(AuthError::RoleMismatch { expected: Role::Sme, actual: Role::Investor }, false)]
    #[case(AuthError::Unavailable { message: "down".to_owned() }, true)]
    #[case(AuthError::Hashing { message: "oom".to_owned() }, true)]
    fn infrastructure_classification(#[case] err: AuthError, #[case] expected: bool) {
        assert_eq!(err.is_infrastructure(), expected);
    }
}
