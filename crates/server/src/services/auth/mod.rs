//! Authentication service.
//!
//! Registration and login for clients (the user collection) and vendors (the
//! owner collection). No session or token is issued: a successful login is
//! only a signal to the caller.
//!
//! # Password storage
//!
//! New passwords are written according to [`PasswordStorage`]. Verification
//! does not depend on the configured mode: a stored value that parses as a PHC
//! string is checked with Argon2, anything else is compared as plaintext. This
//! keeps records written before hashing was enabled usable.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use secrecy::{ExposeSecret, SecretString};

use foodhub_core::{Owner, User, VendorCategory};

use crate::db::{OwnerRepository, RecordStore, RepositoryError, UserRepository};

/// How newly registered passwords are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasswordStorage {
    /// Store the password as given (compatible with existing data files).
    #[default]
    Plaintext,
    /// Store an Argon2id PHC hash string.
    Argon2,
}

impl PasswordStorage {
    /// Produce the value to persist for `password`.
    fn encode(self, password: &SecretString) -> Result<String, AuthError> {
        match self {
            Self::Plaintext => Ok(password.expose_secret().to_owned()),
            Self::Argon2 => hash_password(password.expose_secret()),
        }
    }
}

impl std::str::FromStr for PasswordStorage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plaintext" => Ok(Self::Plaintext),
            "argon2" => Ok(Self::Argon2),
            other => Err(format!("expected `plaintext` or `argon2`, got `{other}`")),
        }
    }
}

/// Client sign-up details.
#[derive(Debug)]
pub struct ClientRegistration {
    pub email: String,
    pub password: SecretString,
    pub name: String,
    pub number: String,
    pub address: String,
}

/// Vendor sign-up details.
#[derive(Debug)]
pub struct VendorRegistration {
    pub name: String,
    pub email: String,
    pub password: SecretString,
    pub category: String,
}

/// Vendor login attempt. All three fields must match.
#[derive(Debug)]
pub struct VendorLogin {
    pub email: String,
    pub password: SecretString,
    pub category: String,
}

/// Authentication service.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
    owners: OwnerRepository<'a>,
    storage: PasswordStorage,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(store: &'a RecordStore, storage: PasswordStorage) -> Self {
        Self {
            users: UserRepository::new(store),
            owners: OwnerRepository::new(store),
            storage,
        }
    }

    // =========================================================================
    // Clients
    // =========================================================================

    /// Register a new client.
    ///
    /// Profile fields are stored as given; nothing is validated.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UserAlreadyExists` if the email is already registered.
    pub async fn register_user(&self, registration: ClientRegistration) -> Result<User, AuthError> {
        let password = self.storage.encode(&registration.password)?;

        let user = self
            .users
            .create(User {
                email: registration.email,
                password,
                name: registration.name,
                number: registration.number,
                address: registration.address,
            })
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::UserAlreadyExists,
                other => AuthError::Repository(other),
            })?;

        tracing::info!(email = %user.email, "Client registered");
        Ok(user)
    }

    /// Login a client with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidUserCredentials` if no user matches both fields.
    pub async fn login_user(&self, email: &str, password: &SecretString) -> Result<User, AuthError> {
        let user = self
            .users
            .list()
            .await?
            .into_iter()
            .find(|user| {
                user.email == email && verify_password(password.expose_secret(), &user.password)
            })
            .ok_or_else(|| {
                tracing::debug!(email, "Client login rejected");
                AuthError::InvalidUserCredentials
            })?;

        Ok(user)
    }

    // =========================================================================
    // Vendors
    // =========================================================================

    /// Register a new vendor with empty item and order lists.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCategory` if the category is not a known literal.
    /// Returns `AuthError::OwnerAlreadyExists` if the email is already registered.
    pub async fn register_owner(
        &self,
        registration: VendorRegistration,
    ) -> Result<Owner, AuthError> {
        let category: VendorCategory = registration.category.parse()?;
        let password = self.storage.encode(&registration.password)?;

        let owner = self
            .owners
            .create(Owner::new(
                registration.name,
                registration.email,
                password,
                category,
            ))
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::OwnerAlreadyExists,
                other => AuthError::Repository(other),
            })?;

        tracing::info!(email = %owner.email, category = %owner.category, "Vendor registered");
        Ok(owner)
    }

    /// Login a vendor. Email, password and category must all match.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidOwnerCredentials` on any mismatch.
    pub async fn login_owner(&self, login: &VendorLogin) -> Result<Owner, AuthError> {
        let owner = self
            .owners
            .list()
            .await?
            .into_iter()
            .find(|owner| {
                owner.email == login.email
                    && owner.category == login.category
                    && verify_password(login.password.expose_secret(), &owner.password)
            })
            .ok_or_else(|| {
                tracing::debug!(email = %login.email, "Vendor login rejected");
                AuthError::InvalidOwnerCredentials
            })?;

        Ok(owner)
    }
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Check a candidate password against a stored value.
///
/// Only a PHC string naming an Argon2 variant is treated as a hash. Anything
/// else, including plaintext that happens to look like `$scheme$...`, is
/// compared as plaintext.
fn verify_password(password: &str, stored: &str) -> bool {
    match PasswordHash::new(stored) {
        Ok(parsed_hash) if is_argon2(&parsed_hash) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok(),
        _ => password == stored,
    }
}

fn is_argon2(hash: &PasswordHash<'_>) -> bool {
    matches!(hash.algorithm.as_str(), "argon2d" | "argon2i" | "argon2id")
}
