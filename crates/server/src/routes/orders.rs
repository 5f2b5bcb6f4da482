//! Order route handlers.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use serde::Deserialize;
use tracing::instrument;

use foodhub_core::Order;

use super::MessageResponse;
use crate::error::Result;
use crate::services::CartEntry;
use crate::state::AppState;

/// Order placement body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    pub cart: Vec<CartEntry>,
    #[serde(default, deserialize_with = "foodhub_core::deserialize_text")]
    pub client_email: String,
}

/// `POST /api/place-order`
///
/// Always acknowledges; lines no vendor lists are only logged.
#[instrument(skip_all)]
pub async fn place_order(
    State(state): State<AppState>,
    payload: std::result::Result<Json<PlaceOrderRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>> {
    let Json(req) = payload?;
    state
        .orders()
        .place_order(req.cart, &req.client_email)
        .await?;
    Ok(Json(MessageResponse::new("Order placed successfully")))
}

/// `GET /api/owners/orders/{email}`
#[instrument(skip(state))]
pub async fn vendor_orders(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<Order>>> {
    let orders = state.orders().list_orders_by_vendor(&email).await?;
    Ok(Json(orders))
}
