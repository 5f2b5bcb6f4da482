//! Food item repository over the flat catalog collection.

use foodhub_core::{CategorizedItems, FoodItem, FoodItemsDocument};

use super::{RecordStore, RepositoryError};

/// Repository for catalog items.
pub struct FoodItemRepository<'a> {
    store: &'a RecordStore,
}

impl<'a> FoodItemRepository<'a> {
    /// Create a new food item repository.
    #[must_use]
    pub const fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    /// Append an item. Duplicates are allowed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the collection cannot be loaded or saved.
    pub async fn create(&self, item: FoodItem) -> Result<FoodItem, RepositoryError> {
        self.store
            .update(|document: &mut FoodItemsDocument| {
                document.food_items.push(item.clone());
                Ok(item)
            })
            .await
    }

    /// Items listed by the vendor with `email`, in storage order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the collection cannot be loaded.
    pub async fn list_by_vendor(&self, email: &str) -> Result<Vec<FoodItem>, RepositoryError> {
        let document: FoodItemsDocument = self.store.load().await?;
        Ok(document.by_vendor(email).cloned().collect())
    }

    /// The whole catalog split into category groups.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the collection cannot be loaded.
    pub async fn categorized(&self) -> Result<CategorizedItems, RepositoryError> {
        let document: FoodItemsDocument = self.store.load().await?;
        Ok(document.categorized())
    }
}
