//! Create missing collection files.

use std::path::Path;

use foodhub_server::db::RecordStore;
use tracing::info;

/// Create any missing collection file in `data_dir` with its empty document.
///
/// Existing files are left untouched.
///
/// # Errors
///
/// Returns an error if the directory or a file cannot be created, or if an
/// existing file is not valid JSON.
pub async fn run(data_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let store = RecordStore::new(data_dir);
    store.ensure_initialized().await?;
    store.check().await?;

    info!(data_dir = %data_dir.display(), "Data files ready");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use foodhub_core::{FoodItemsDocument, OwnersDocument, UsersDocument};
    use foodhub_server::db::Collection;
    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn test_creates_all_files_in_nested_dir() {
        let dir = TempDir::new().unwrap();
        let data_dir = dir.path().join("nested/data");

        run(&data_dir).await.unwrap();

        for name in [
            UsersDocument::FILE_NAME,
            OwnersDocument::FILE_NAME,
            FoodItemsDocument::FILE_NAME,
        ] {
            assert!(data_dir.join(name).is_file(), "{name} missing");
        }
    }

    #[tokio::test]
    async fn test_fails_on_corrupt_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(UsersDocument::FILE_NAME), "[").unwrap();

        assert!(run(dir.path()).await.is_err());
    }
}
