//! User repository over the client collection.

use foodhub_core::{User, UsersDocument};

use super::{RecordStore, RepositoryError};

/// Repository for client records.
pub struct UserRepository<'a> {
    store: &'a RecordStore,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    /// Get every registered user, in registration order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the collection cannot be loaded.
    pub async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        let document: UsersDocument = self.store.load().await?;
        Ok(document.users)
    }

    /// Append a new user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email is already registered.
    /// Returns `RepositoryError::Io` or `Malformed` if the store fails.
    pub async fn create(&self, user: User) -> Result<User, RepositoryError> {
        self.store
            .update(|document: &mut UsersDocument| {
                if document.contains_email(&user.email) {
                    return Err(RepositoryError::Conflict("email already exists".to_owned()));
                }
                document.users.push(user.clone());
                Ok(user)
            })
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn user(email: &str, name: &str) -> User {
        User {
            email: email.to_owned(),
            password: "pw".to_owned(),
            name: name.to_owned(),
            number: String::new(),
            address: String::new(),
        }
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_email() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::new(dir.path());
        let users = UserRepository::new(&store);

        users.create(user("a@example.com", "First")).await.unwrap();
        let err = users
            .create(user("a@example.com", "Second"))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict(_)));

        let all = users.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "First");
    }
}
