//! Core types for Foodhub.
//!
//! This module provides the persisted record shapes and the small value types
//! they are built from.

pub mod category;
pub mod collection;
pub mod price;
pub mod record;
pub mod text;

pub use category::{CategoryError, VendorCategory};
pub use collection::{CategorizedItems, FoodItemsDocument, OwnersDocument, UsersDocument};
pub use price::{Price, PriceError};
pub use record::{FoodItem, ItemRef, Order, Owner, User};
pub use text::{deserialize_text, is_falsy, json_text};
