//! Owner repository over the vendor collection.

use foodhub_core::{Order, Owner, OwnersDocument};

use super::{RecordStore, RepositoryError};

/// One requested order line, before it is matched to a vendor.
#[derive(Debug, Clone)]
pub struct OrderLine {
    pub food_name: String,
    pub price: foodhub_core::Price,
}

/// Result of matching a batch of order lines against vendors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderPlacement {
    /// Lines appended to some vendor's order list.
    pub recorded: usize,
    /// Lines with no vendor listing the food.
    pub dropped: usize,
}

/// Repository for vendor records and their embedded orders.
pub struct OwnerRepository<'a> {
    store: &'a RecordStore,
}

impl<'a> OwnerRepository<'a> {
    /// Create a new owner repository.
    #[must_use]
    pub const fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    /// Get the first owner registered under `email`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the collection cannot be loaded.
    pub async fn get_by_email(&self, email: &str) -> Result<Option<Owner>, RepositoryError> {
        let document: OwnersDocument = self.store.load().await?;
        Ok(document.find_by_email(email).cloned())
    }

    /// Get every registered owner, in registration order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the collection cannot be loaded.
    pub async fn list(&self) -> Result<Vec<Owner>, RepositoryError> {
        let document: OwnersDocument = self.store.load().await?;
        Ok(document.owners)
    }

    /// Append a new owner.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email is already registered.
    /// Returns `RepositoryError::Io` or `Malformed` if the store fails.
    pub async fn create(&self, owner: Owner) -> Result<Owner, RepositoryError> {
        self.store
            .update(|document: &mut OwnersDocument| {
                if document.contains_email(&owner.email) {
                    return Err(RepositoryError::Conflict("email already exists".to_owned()));
                }
                document.owners.push(owner.clone());
                Ok(owner)
            })
            .await
    }

    /// Append each line to the first owner whose embedded items list the food.
    ///
    /// Lines no owner lists are counted as dropped and otherwise ignored.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the collection cannot be loaded or saved.
    pub async fn record_orders(
        &self,
        lines: &[OrderLine],
        client_email: &str,
    ) -> Result<OrderPlacement, RepositoryError> {
        self.store
            .update(|document: &mut OwnersDocument| {
                let mut placement = OrderPlacement::default();

                for line in lines {
                    match document.seller_of_mut(&line.food_name) {
                        Some(owner) => {
                            owner.orders.push(Order {
                                food_name: line.food_name.clone(),
                                client_email: client_email.to_owned(),
                                price: line.price.clone(),
                            });
                            placement.recorded += 1;
                        }
                        None => {
                            tracing::warn!(
                                food_name = %line.food_name,
                                client_email,
                                "No vendor lists this item, order line dropped"
                            );
                            placement.dropped += 1;
                        }
                    }
                }

                Ok(placement)
            })
            .await
    }

    /// Orders received by the owner with `email`, or empty if no such owner.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the collection cannot be loaded.
    pub async fn orders_for(&self, email: &str) -> Result<Vec<Order>, RepositoryError> {
        Ok(self
            .get_by_email(email)
            .await?
            .map(|owner| owner.orders)
            .unwrap_or_default())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use foodhub_core::{ItemRef, Price, VendorCategory};
    use tempfile::TempDir;

    use super::*;

    fn owner(email: &str, listed: &[&str]) -> Owner {
        let mut owner = Owner::new(
            "Vendor".to_owned(),
            email.to_owned(),
            "pw".to_owned(),
            VendorCategory::Restaurant,
        );
        owner.items = listed.iter().map(|name| ItemRef::new(*name)).collect();
        owner
    }

    fn line(food_name: &str, price: &str) -> OrderLine {
        OrderLine {
            food_name: food_name.to_owned(),
            price: Price::parse(price).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_record_orders_matches_embedded_items() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::new(dir.path());
        let owners = OwnerRepository::new(&store);

        owners.create(owner("a@x.io", &["Dal"])).await.unwrap();
        owners.create(owner("b@x.io", &["Dal", "Roti"])).await.unwrap();

        let placement = owners
            .record_orders(
                &[line("Dal", "90"), line("Roti", "15"), line("Pizza", "300")],
                "client@x.io",
            )
            .await
            .unwrap();

        assert_eq!(placement, OrderPlacement { recorded: 2, dropped: 1 });

        let a_orders = owners.orders_for("a@x.io").await.unwrap();
        assert_eq!(a_orders.len(), 1);
        assert_eq!(a_orders[0].food_name, "Dal");
        assert_eq!(a_orders[0].client_email, "client@x.io");

        let b_orders = owners.orders_for("b@x.io").await.unwrap();
        assert_eq!(b_orders.len(), 1);
        assert_eq!(b_orders[0].food_name, "Roti");
        assert_eq!(b_orders[0].price, Price::parse("15").unwrap());
    }

    #[tokio::test]
    async fn test_orders_for_unknown_owner_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::new(dir.path());
        let owners = OwnerRepository::new(&store);

        assert!(owners.orders_for("ghost@x.io").await.unwrap().is_empty());
    }
}
