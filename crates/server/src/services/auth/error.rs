//! Authentication error types.

use thiserror::Error;

use foodhub_core::CategoryError;

use crate::db::RepositoryError;

/// Errors that can occur during registration and login.
///
/// The display text of the credential and conflict variants is the message
/// returned to API clients.
#[derive(Debug, Error)]
pub enum AuthError {
    /// A client with this email is already registered.
    #[error("User already registered")]
    UserAlreadyExists,

    /// A vendor with this email is already registered.
    #[error("Owner already registered")]
    OwnerAlreadyExists,

    /// Client email/password did not match a registered user.
    #[error("Invalid email or password")]
    InvalidUserCredentials,

    /// Vendor email/password/category did not match a registered owner.
    #[error("Invalid credentials")]
    InvalidOwnerCredentials,

    /// Vendor category is not one of the known literals.
    #[error("{0}")]
    InvalidCategory(#[from] CategoryError),

    /// Repository/store error.
    #[error("store error: {0}")]
    Repository(#[from] RepositoryError),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,
}
