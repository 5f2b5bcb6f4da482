//! Business logic services.
//!
//! # Services
//!
//! - `auth` - Client and vendor registration and login
//! - `catalog` - Adding and listing food items
//! - `orders` - Placing orders and listing a vendor's orders
//!
//! Services borrow the [`RecordStore`](crate::db::RecordStore) and are cheap to
//! construct per request.

pub mod auth;
pub mod catalog;
pub mod orders;

pub use auth::{
    AuthError, AuthService, ClientRegistration, PasswordStorage, VendorLogin, VendorRegistration,
};
pub use catalog::{CatalogError, CatalogService, NewFoodItem};
pub use orders::{CartEntry, OrderService};
