//! Persisted record types.
//!
//! Field names serialize in camelCase to match the JSON documents on disk.
//! Every text field reads leniently (see [`deserialize_text`]) and defaults to
//! `""` when absent, so records written by earlier deployments always load.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::text::deserialize_text;
use super::{Price, VendorCategory};

/// A registered client.
///
/// The password field holds whatever the configured password storage wrote:
/// either the plaintext password or an argon2 PHC string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub password: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub number: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub address: String,
}

/// A registered vendor with its embedded item references and received orders.
///
/// `category` is kept as stored. Registration only writes the three
/// [`VendorCategory`] literals, but older files may hold anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub password: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub category: String,
    #[serde(default)]
    pub items: Vec<ItemRef>,
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl Owner {
    /// Create a freshly registered owner with no items and no orders.
    #[must_use]
    pub fn new(name: String, email: String, password: String, category: VendorCategory) -> Self {
        Self {
            name,
            email,
            password,
            category: category.as_str().to_owned(),
            items: Vec::new(),
            orders: Vec::new(),
        }
    }

    /// The stored category, if it is a known literal.
    #[must_use]
    pub fn vendor_category(&self) -> Option<VendorCategory> {
        self.category.parse().ok()
    }

    /// Whether this owner's embedded item list references `food_name`.
    #[must_use]
    pub fn lists_item(&self, food_name: &str) -> bool {
        self.items.iter().any(|item| item.food_name == food_name)
    }
}

/// An entry of an owner's embedded item list, referencing a food by name.
///
/// Only `foodName` is interpreted; any other keys are kept as-is so a
/// load/save cycle never drops data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRef {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub food_name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ItemRef {
    /// Reference a food by name with no extra attributes.
    #[must_use]
    pub fn new(food_name: impl Into<String>) -> Self {
        Self {
            food_name: food_name.into(),
            extra: Map::new(),
        }
    }
}

/// A catalog item offered by a vendor.
///
/// `category` is stored as given; it is not required to be a
/// [`VendorCategory`] literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub food_name: String,
    #[serde(default)]
    pub actual_price: Price,
    #[serde(default)]
    pub discount_price: Price,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub category: String,
}

impl FoodItem {
    /// The vendor category this item groups under, if its category is a known literal.
    #[must_use]
    pub fn vendor_category(&self) -> Option<VendorCategory> {
        self.category.parse().ok()
    }
}

/// A single ordered line recorded on the vendor that sells it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub food_name: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub client_email: String,
    #[serde(default)]
    pub price: Price,
}
