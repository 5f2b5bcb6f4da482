//! Summarize the contents of the data files.

use std::path::Path;

use foodhub_core::{FoodItemsDocument, OwnersDocument, UsersDocument, VendorCategory};
use foodhub_server::db::{RecordStore, RepositoryError};
use tracing::info;

/// Record counts across all collections.
#[derive(Debug, PartialEq, Eq)]
pub struct Stats {
    pub users: usize,
    pub owners: usize,
    pub owners_by_category: [(VendorCategory, usize); 3],
    pub food_items: usize,
    /// Items whose category is one of the vendor categories.
    pub food_items_grouped: usize,
    pub orders: usize,
}

/// Count everything in `store`.
///
/// # Errors
///
/// Returns `RepositoryError` if any collection cannot be loaded.
pub async fn collect(store: &RecordStore) -> Result<Stats, RepositoryError> {
    let users: UsersDocument = store.load().await?;
    let owners: OwnersDocument = store.load().await?;
    let items: FoodItemsDocument = store.load().await?;

    let owners_by_category = VendorCategory::ALL.map(|category| {
        let count = owners
            .owners
            .iter()
            .filter(|o| o.vendor_category() == Some(category))
            .count();
        (category, count)
    });

    Ok(Stats {
        users: users.users.len(),
        owners: owners.owners.len(),
        owners_by_category,
        food_items: items.food_items.len(),
        food_items_grouped: items.categorized().len(),
        orders: owners.owners.iter().map(|o| o.orders.len()).sum(),
    })
}

/// Log record counts for the data files in `data_dir`.
///
/// # Errors
///
/// Returns an error if any collection cannot be loaded.
pub async fn run(data_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let stats = collect(&RecordStore::new(data_dir)).await?;

    info!(users = stats.users, "Clients");
    info!(owners = stats.owners, "Vendors");
    for (category, count) in stats.owners_by_category {
        info!(%category, count, "Vendors by category");
    }
    info!(
        food_items = stats.food_items,
        listed = stats.food_items_grouped,
        "Food items"
    );
    info!(orders = stats.orders, "Orders");
    Ok(())
}
