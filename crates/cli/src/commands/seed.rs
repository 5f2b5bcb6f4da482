//! Seed vendors and their catalog items from a YAML file.
//!
//! ```yaml
//! vendors:
//!   - name: Spice Route
//!     email: spice@example.com
//!     password: changeme
//!     category: restaurant
//!     items:
//!       - foodName: Masala Dosa
//!         actualPrice: 120
//!         discountPrice: 99.5
//! ```
//!
//! An item's `category` defaults to its vendor's category. Vendors whose email
//! is already registered are skipped together with their items.

use std::path::Path;

use secrecy::SecretString;
use serde::Deserialize;
use tracing::{info, warn};

use foodhub_core::Price;
use foodhub_server::db::RecordStore;
use foodhub_server::services::{
    AuthError, AuthService, CatalogService, NewFoodItem, PasswordStorage, VendorRegistration,
};

/// Top-level seed file.
#[derive(Debug, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub vendors: Vec<SeedVendor>,
}

/// One vendor to register.
#[derive(Debug, Deserialize)]
pub struct SeedVendor {
    pub name: String,
    pub email: String,
    pub password: String,
    pub category: String,
    #[serde(default)]
    pub items: Vec<SeedItem>,
}

/// One catalog item of a seeded vendor.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedItem {
    pub food_name: String,
    pub actual_price: Price,
    pub discount_price: Price,
    pub category: Option<String>,
}

/// What a seed run did.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub vendors_created: usize,
    pub vendors_skipped: usize,
    pub items_added: usize,
}

/// Seed from the YAML file at `file_path` into `data_dir`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, a vendor has an
/// unknown category or an invalid item, or the data files cannot be written.
pub async fn run(
    data_dir: &Path,
    file_path: &Path,
    storage: PasswordStorage,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file_path.exists() {
        return Err(format!("File not found: {}", file_path.display()).into());
    }

    info!(path = %file_path.display(), "Loading seed file");
    let content = tokio::fs::read_to_string(file_path).await?;
    let seed: SeedFile = serde_yaml::from_str(&content)?;
    info!(vendors = seed.vendors.len(), "Parsed seed file");

    let store = RecordStore::new(data_dir);
    store.ensure_initialized().await?;

    let report = apply(&store, seed, storage).await?;
    info!(
        vendors_created = report.vendors_created,
        vendors_skipped = report.vendors_skipped,
        items_added = report.items_added,
        "Seeding complete"
    );
    Ok(())
}

/// Register every vendor in `seed` and add its items.
///
/// # Errors
///
/// Returns the first registration or catalog error other than a duplicate
/// vendor.
pub async fn apply(
    store: &RecordStore,
    seed: SeedFile,
    storage: PasswordStorage,
) -> Result<SeedReport, Box<dyn std::error::Error>> {
    let auth = AuthService::new(store, storage);
    let catalog = CatalogService::new(store);
    let mut report = SeedReport::default();

    for vendor in seed.vendors {
        let registration = VendorRegistration {
            name: vendor.name,
            email: vendor.email.clone(),
            password: SecretString::from(vendor.password),
            category: vendor.category.clone(),
        };

        match auth.register_owner(registration).await {
            Ok(_) => report.vendors_created += 1,
            Err(AuthError::OwnerAlreadyExists) => {
                warn!(email = %vendor.email, "Vendor already registered, skipping");
                report.vendors_skipped += 1;
                continue;
            }
            Err(e) => return Err(format!("vendor {}: {e}", vendor.email).into()),
        }

        for item in vendor.items {
            catalog
                .add_item(NewFoodItem {
                    email: Some(vendor.email.clone()),
                    food_name: Some(item.food_name.clone()),
                    actual_price: Some(item.actual_price),
                    discount_price: Some(item.discount_price),
                    category: Some(item.category.unwrap_or_else(|| vendor.category.clone())),
                })
                .await
                .map_err(|e| format!("item {:?} of {}: {e}", item.food_name, vendor.email))?;
            report.items_added += 1;
        }
    }

    Ok(report)
}
