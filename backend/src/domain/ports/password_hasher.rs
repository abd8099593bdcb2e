//! Port for one-way password hashing.

use crate::domain::HashedPassword;

use super::define_port_error;

define_port_error! {
    /// Errors raised by password hashing adapters.
    pub enum PasswordHashError {
        /// Hashing or verification could not run.
        Hashing { message: String } => "password hashing failed: {message}",
    }
}

/// Salted, deliberately slow password hashing.
///
/// Calls are CPU bound; async callers should expect them to block briefly.
#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password with a fresh salt.
    fn hash(&self, password: &str) -> Result<HashedPassword, PasswordHashError>;

    /// Check a plaintext password against a stored hash.
    ///
    /// Never fails: a mismatch, an unreadable hash and an internal
    /// verification failure all yield `false`.
    fn verify(&self, password: &str, hash: &HashedPassword) -> bool;
}
