//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                         - Liveness check
//! GET  /health/ready                   - Readiness check (collections load)
//!
//! # Clients
//! POST /api/register                   - Register a client
//! POST /api/login                      - Client login
//!
//! # Catalog & orders
//! GET  /api/food-items                 - All items grouped by vendor category
//! POST /api/place-order                - Place an order from a cart
//!
//! # Vendors
//! POST /api/owners/register            - Register a vendor
//! POST /api/owners/login               - Vendor login
//! POST /api/owners/add-item            - Add a food item
//! GET  /api/owners/food-items/{email}  - Items added by a vendor
//! GET  /api/owners/orders/{email}      - Orders received by a vendor
//! ```

pub mod catalog;
pub mod clients;
pub mod health;
pub mod orders;
pub mod owners;

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use crate::middleware::{request_id_middleware, with_tracing};
use crate::state::AppState;

/// `{"message": "..."}` body used for every acknowledgement and error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Create the vendor routes router.
pub fn owner_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(owners::register))
        .route("/login", post(owners::login))
        .route("/add-item", post(catalog::add_item))
        .route("/food-items/{email}", get(catalog::vendor_items))
        .route("/orders/{email}", get(orders::vendor_orders))
}

/// Create the `/api` router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(clients::register))
        .route("/login", post(clients::login))
        .route("/food-items", get(catalog::grouped_items))
        .route("/place-order", post(orders::place_order))
        .nest("/owners", owner_routes())
}

/// Create all routes, without state or layers.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .nest("/api", api_routes())
}

/// Build the complete application: routes, request ids, tracing and CORS.
///
/// Sentry layers are added by the binary, outermost.
pub fn app(state: AppState) -> Router {
    with_tracing(
        routes()
            .layer(axum_middleware::from_fn(request_id_middleware))
            .with_state(state),
    )
    .layer(CorsLayer::permissive())
}
