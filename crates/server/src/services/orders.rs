//! Order service.
//!
//! An order is a cart of `(foodName, price)` lines. Each line is routed to the
//! first vendor whose embedded `items` list names that food and appended to
//! that vendor's orders. Lines no vendor lists are dropped; the caller is
//! still told the order was placed.
//!
//! Vendors' embedded item lists are not filled in by the catalog, so with data
//! created only through the API every line is dropped.

use serde::Deserialize;

use foodhub_core::{Order, Price};

use crate::db::owners::{OrderLine, OrderPlacement};
use crate::db::{OwnerRepository, RecordStore, RepositoryError};

/// One cart line as submitted by a client.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    #[serde(default, deserialize_with = "foodhub_core::deserialize_text")]
    pub food_name: String,
    #[serde(default)]
    pub price: Price,
}

impl From<CartEntry> for OrderLine {
    fn from(entry: CartEntry) -> Self {
        Self {
            food_name: entry.food_name,
            price: entry.price,
        }
    }
}

/// Order service.
pub struct OrderService<'a> {
    owners: OwnerRepository<'a>,
}

impl<'a> OrderService<'a> {
    /// Create a new order service.
    #[must_use]
    pub const fn new(store: &'a RecordStore) -> Self {
        Self {
            owners: OwnerRepository::new(store),
        }
    }

    /// Place an order for `client_email`.
    ///
    /// Returns how many lines were recorded and how many were dropped.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` only if the owner collection cannot be
    /// loaded or saved; unmatched lines are not errors.
    pub async fn place_order(
        &self,
        cart: Vec<CartEntry>,
        client_email: &str,
    ) -> Result<OrderPlacement, RepositoryError> {
        let lines: Vec<OrderLine> = cart.into_iter().map(OrderLine::from).collect();
        let placement = self.owners.record_orders(&lines, client_email).await?;

        tracing::info!(
            client_email,
            recorded = placement.recorded,
            dropped = placement.dropped,
            "Order placed"
        );
        Ok(placement)
    }

    /// Orders received by a vendor; empty if the vendor does not exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the owner collection cannot be loaded.
    pub async fn list_orders_by_vendor(&self, email: &str) -> Result<Vec<Order>, RepositoryError> {
        self.owners.orders_for(email).await
    }
}
