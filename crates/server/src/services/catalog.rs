//! Catalog service.
//!
//! Items live in the flat food item collection, keyed to their vendor by
//! email. Adding an item does not touch the vendor's embedded `items` list.

use thiserror::Error;

use foodhub_core::{CategorizedItems, FoodItem, Price};

use crate::db::{FoodItemRepository, RecordStore, RepositoryError};

/// Errors that can occur during catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// At least one field of a new item is missing, blank or zero.
    #[error("All fields are required")]
    MissingFields,

    /// A price was provided but is not a decimal number.
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// Repository/store error.
    #[error("store error: {0}")]
    Repository(#[from] RepositoryError),
}

/// A new catalog item as submitted; every field is optional until validated.
#[derive(Debug, Clone, Default)]
pub struct NewFoodItem {
    pub email: Option<String>,
    pub food_name: Option<String>,
    pub actual_price: Option<Price>,
    pub discount_price: Option<Price>,
    pub category: Option<String>,
}

impl NewFoodItem {
    /// Turn the submission into a record.
    ///
    /// Absent fields, empty strings and blank prices (`null`, `false`, `""`,
    /// numeric zero) are missing. A provided price must hold a decimal amount
    /// and keeps the JSON type it was sent with.
    fn into_item(self) -> Result<FoodItem, CatalogError> {
        let text = |value: Option<String>| {
            value
                .filter(|s| !s.is_empty())
                .ok_or(CatalogError::MissingFields)
        };
        let price = |value: Option<Price>| {
            let price = value
                .filter(|p| !p.is_blank())
                .ok_or(CatalogError::MissingFields)?;
            if price.amount().is_none() {
                return Err(CatalogError::InvalidPrice(price.to_string()));
            }
            Ok(price)
        };

        let email = text(self.email)?;
        let food_name = text(self.food_name)?;
        let actual_price = price(self.actual_price);
        let discount_price = price(self.discount_price);
        let category = text(self.category)?;

        // A missing field wins over a malformed price.
        let (actual_price, discount_price) = match (actual_price, discount_price) {
            (Err(CatalogError::MissingFields), _) | (_, Err(CatalogError::MissingFields)) => {
                return Err(CatalogError::MissingFields);
            }
            (actual, discount) => (actual?, discount?),
        };

        Ok(FoodItem {
            email,
            food_name,
            actual_price,
            discount_price,
            category,
        })
    }
}

/// Catalog service.
pub struct CatalogService<'a> {
    items: FoodItemRepository<'a>,
}

impl<'a> CatalogService<'a> {
    /// Create a new catalog service.
    #[must_use]
    pub const fn new(store: &'a RecordStore) -> Self {
        Self {
            items: FoodItemRepository::new(store),
        }
    }

    /// Add an item to the catalog. Duplicate (email, name) pairs are allowed.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::MissingFields` if any field is missing or falsy
    /// and `CatalogError::InvalidPrice` if a price is not a number; the
    /// collection is left unchanged.
    pub async fn add_item(&self, submission: NewFoodItem) -> Result<FoodItem, CatalogError> {
        let item = submission.into_item()?;
        let item = self.items.create(item).await?;

        tracing::info!(
            email = %item.email,
            food_name = %item.food_name,
            category = %item.category,
            "Food item added"
        );
        Ok(item)
    }

    /// Items listed by one vendor, in storage order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Repository` if the collection cannot be loaded.
    pub async fn list_items_by_vendor(&self, email: &str) -> Result<Vec<FoodItem>, CatalogError> {
        Ok(self.items.list_by_vendor(email).await?)
    }

    /// The whole catalog grouped by restaurant, supermarket and grocery.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Repository` if the collection cannot be loaded.
    pub async fn list_all_items_grouped(&self) -> Result<CategorizedItems, CatalogError> {
        let grouped = self.items.categorized().await?;
        tracing::debug!(
            restaurant = grouped.restaurant.len(),
            supermarket = grouped.supermarket.len(),
            grocery = grouped.grocery.len(),
            "Catalog grouped"
        );
        Ok(grouped)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn submission(email: &str, name: &str, category: &str) -> NewFoodItem {
        NewFoodItem {
            email: Some(email.to_owned()),
            food_name: Some(name.to_owned()),
            actual_price: Some(Price::parse("100").unwrap()),
            discount_price: Some(Price::parse("90").unwrap()),
            category: Some(category.to_owned()),
        }
    }

    #[tokio::test]
    async fn test_add_item_rejects_missing_or_falsy_fields() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::new(dir.path());
        let catalog = CatalogService::new(&store);

        let base = submission("v@example.com", "Dosa", "restaurant");
        let broken = [
            NewFoodItem {
                email: None,
                ..base.clone()
            },
            NewFoodItem {
                food_name: Some(String::new()),
                ..base.clone()
            },
            NewFoodItem {
                actual_price: None,
                ..base.clone()
            },
            NewFoodItem {
                discount_price: Some(Price::from_json(serde_json::json!(0))),
                ..base.clone()
            },
            NewFoodItem {
                category: Some(String::new()),
                ..base.clone()
            },
            NewFoodItem::default(),
        ];

        for item in broken {
            let err = catalog.add_item(item).await.unwrap_err();
            assert!(matches!(err, CatalogError::MissingFields));
        }

        assert!(!store.path_of::<foodhub_core::FoodItemsDocument>().exists());
        assert!(
            catalog
                .list_items_by_vendor("v@example.com")
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_add_item_price_rules() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::new(dir.path());
        let catalog = CatalogService::new(&store);
        let base = submission("v@example.com", "Tea", "restaurant");

        let item = catalog
            .add_item(NewFoodItem {
                actual_price: Some(Price::from_json(serde_json::json!("0"))),
                discount_price: Some(Price::from_json(serde_json::json!(12))),
                ..base.clone()
            })
            .await
            .unwrap();
        assert_eq!(item.actual_price.as_json(), &serde_json::json!("0"));
        assert_eq!(item.discount_price.as_json(), &serde_json::json!(12));

        for bad in [serde_json::json!("twelve"), serde_json::json!(" "), serde_json::json!(true)] {
            let err = catalog
                .add_item(NewFoodItem {
                    actual_price: Some(Price::from_json(bad)),
                    ..base.clone()
                })
                .await
                .unwrap_err();
            assert!(matches!(err, CatalogError::InvalidPrice(_)));
        }

        let err = catalog
            .add_item(NewFoodItem {
                actual_price: Some(Price::from_json(serde_json::json!("twelve"))),
                discount_price: None,
                ..base
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::MissingFields));
    }

    #[tokio::test]
    async fn test_add_item_allows_duplicates() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::new(dir.path());
        let catalog = CatalogService::new(&store);

        let item = submission("v@example.com", "Dosa", "restaurant");
        catalog.add_item(item.clone()).await.unwrap();
        catalog.add_item(item).await.unwrap();

        let items = catalog.list_items_by_vendor("v@example.com").await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], items[1]);
    }

    #[tokio::test]
    async fn test_grouped_listing_drops_unknown_category() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::new(dir.path());
        let catalog = CatalogService::new(&store);

        for (name, category) in [
            ("Biryani", "restaurant"),
            ("Detergent", "supermarket"),
            ("Onions", "grocery"),
            ("Gadget", "unknown"),
        ] {
            catalog
                .add_item(submission("v@example.com", name, category))
                .await
                .unwrap();
        }

        let grouped = catalog.list_all_items_grouped().await.unwrap();
        assert_eq!(grouped.restaurant.len(), 1);
        assert_eq!(grouped.restaurant[0].food_name, "Biryani");
        assert_eq!(grouped.supermarket[0].food_name, "Detergent");
        assert_eq!(grouped.grocery[0].food_name, "Onions");
        assert_eq!(grouped.len(), 3);

        // Unknown categories are still listed per vendor.
        let vendor_items = catalog.list_items_by_vendor("v@example.com").await.unwrap();
        assert_eq!(vendor_items.len(), 4);
        assert_eq!(vendor_items[3].food_name, "Gadget");
    }

    #[tokio::test]
    async fn test_add_item_does_not_touch_owner_items() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::new(dir.path());
        crate::services::AuthService::new(&store, crate::services::PasswordStorage::Plaintext)
            .register_owner(crate::services::VendorRegistration {
                name: "Cafe".to_owned(),
                email: "v@example.com".to_owned(),
                password: secrecy::SecretString::from("pw".to_owned()),
                category: "restaurant".to_owned(),
            })
            .await
            .unwrap();

        CatalogService::new(&store)
            .add_item(submission("v@example.com", "Latte", "restaurant"))
            .await
            .unwrap();

        let owners = crate::db::OwnerRepository::new(&store).list().await.unwrap();
        assert_eq!(owners.len(), 1);
        assert!(owners[0].items.is_empty());
    }
}
