//! Flat-file record store.
//!
//! # Data directory
//!
//! Each collection is one JSON document in the configured data directory:
//!
//! - `data.json` - `{"users": [...]}`
//! - `owner-data.json` - `{"owners": [...]}`
//! - `food-data.json` - `{"foodItems": [...]}`
//!
//! A missing file reads as the empty document. Saves rewrite the whole file
//! through a temp file in the same directory followed by a rename, so a reader
//! sees either the old or the new document and never a torn write.
//!
//! Read-modify-write cycles go through [`RecordStore::update`], which holds the
//! store's write lock for the duration. That serializes writers inside one
//! process only; two processes pointed at the same directory can still lose
//! updates.

pub mod food_items;
pub mod owners;
pub mod users;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::sync::Mutex;

use foodhub_core::{FoodItemsDocument, OwnersDocument, UsersDocument};

pub use food_items::FoodItemRepository;
pub use owners::OwnerRepository;
pub use users::UserRepository;

/// Errors that can occur during record store operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Reading or writing a collection file failed.
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A collection file exists but does not hold a valid document.
    #[error("malformed collection file {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Constraint violation (e.g., duplicate email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// A document type persisted as one file.
pub trait Collection: Serialize + DeserializeOwned + Default + Send + 'static {
    /// File name inside the data directory.
    const FILE_NAME: &'static str;
}

impl Collection for UsersDocument {
    const FILE_NAME: &'static str = "data.json";
}

impl Collection for OwnersDocument {
    const FILE_NAME: &'static str = "owner-data.json";
}

impl Collection for FoodItemsDocument {
    const FILE_NAME: &'static str = "food-data.json";
}

/// JSON file store rooted at a data directory.
#[derive(Debug)]
pub struct RecordStore {
    data_dir: PathBuf,
    write_lock: Mutex<()>,
}

impl RecordStore {
    /// Create a store over `data_dir`. Nothing is touched on disk until first use.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// The directory holding the collection files.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Full path of the file backing collection `C`.
    #[must_use]
    pub fn path_of<C: Collection>(&self) -> PathBuf {
        self.data_dir.join(C::FILE_NAME)
    }

    /// Load collection `C`, or its empty document if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Io` if the file cannot be read.
    /// Returns `RepositoryError::Malformed` if it does not parse.
    pub async fn load<C: Collection>(&self) -> Result<C, RepositoryError> {
        let path = self.path_of::<C>();

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(C::default()),
            Err(source) => return Err(RepositoryError::Io { path, source }),
        };

        serde_json::from_slice(&bytes).map_err(|source| RepositoryError::Malformed { path, source })
    }

    /// Replace the file backing collection `C` with `document`.
    ///
    /// Callers doing read-modify-write should use [`Self::update`] instead.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Io` if the file cannot be written.
    pub async fn save<C: Collection>(&self, document: &C) -> Result<(), RepositoryError> {
        let path = self.path_of::<C>();

        let bytes = serde_json::to_vec_pretty(document).map_err(|source| {
            RepositoryError::Malformed {
                path: path.clone(),
                source,
            }
        })?;

        let dir = self.data_dir.clone();
        let target = path.clone();
        tokio::task::spawn_blocking(move || write_atomic(&dir, &target, &bytes))
            .await
            .map_err(io::Error::other)
            .and_then(|result| result)
            .map_err(|source| RepositoryError::Io { path, source })
    }

    /// Load collection `C`, apply `mutate`, and save the result.
    ///
    /// The document is saved only when `mutate` returns `Ok`; an `Err` leaves
    /// the file untouched and is passed through.
    ///
    /// # Errors
    ///
    /// Returns the error from `mutate`, or a `RepositoryError` (converted into
    /// `E`) if loading or saving fails.
    pub async fn update<C, T, E, F>(&self, mutate: F) -> Result<T, E>
    where
        C: Collection,
        E: From<RepositoryError>,
        F: FnOnce(&mut C) -> Result<T, E>,
    {
        let _guard = self.write_lock.lock().await;

        let mut document = self.load::<C>().await?;
        let value = mutate(&mut document)?;
        self.save(&document).await?;

        Ok(value)
    }

    /// Write the empty document for every collection whose file is missing.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Io` if the data directory or a file cannot be created.
    pub async fn ensure_initialized(&self) -> Result<(), RepositoryError> {
        tokio::fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|source| RepositoryError::Io {
                path: self.data_dir.clone(),
                source,
            })?;

        self.ensure::<UsersDocument>().await?;
        self.ensure::<OwnersDocument>().await?;
        self.ensure::<FoodItemsDocument>().await?;

        Ok(())
    }

    async fn ensure<C: Collection>(&self) -> Result<(), RepositoryError> {
        let _guard = self.write_lock.lock().await;
        let path = self.path_of::<C>();

        let exists = tokio::fs::try_exists(&path)
            .await
            .map_err(|source| RepositoryError::Io {
                path: path.clone(),
                source,
            })?;

        if !exists {
            self.save(&C::default()).await?;
            tracing::info!(path = %path.display(), "Created empty collection file");
        }

        Ok(())
    }

    /// Verify every collection file loads.
    ///
    /// # Errors
    ///
    /// Returns the first load failure.
    pub async fn check(&self) -> Result<(), RepositoryError> {
        self.load::<UsersDocument>().await?;
        self.load::<OwnersDocument>().await?;
        self.load::<FoodItemsDocument>().await?;
        Ok(())
    }
}

/// Write `bytes` to `path` by persisting a synced temp file created in `dir`.
fn write_atomic(dir: &Path, path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut temp = tempfile::NamedTempFile::new_in(dir)?;
    temp.write_all(bytes)?;
    temp.write_all(b"\n")?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
