//! Catalog route handlers.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use foodhub_core::{CategorizedItems, FoodItem, Price, is_falsy, json_text};

use super::MessageResponse;
use crate::error::Result;
use crate::services::NewFoodItem;
use crate::state::AppState;

/// New item body.
///
/// Prices arrive as JSON numbers or strings and are stored as sent. Text
/// fields that are numbers are stored as their JSON text.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemRequest {
    pub email: Option<Value>,
    pub food_name: Option<Value>,
    pub actual_price: Option<Price>,
    pub discount_price: Option<Price>,
    pub category: Option<Value>,
}

impl From<AddItemRequest> for NewFoodItem {
    fn from(req: AddItemRequest) -> Self {
        Self {
            email: text_field(req.email),
            food_name: text_field(req.food_name),
            actual_price: req.actual_price,
            discount_price: req.discount_price,
            category: text_field(req.category),
        }
    }
}

fn text_field(value: Option<Value>) -> Option<String> {
    value.filter(|v| !is_falsy(v)).map(json_text)
}

/// `POST /api/owners/add-item`
#[instrument(skip_all)]
pub async fn add_item(
    State(state): State<AppState>,
    payload: std::result::Result<Json<AddItemRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>> {
    let Json(req) = payload?;
    state.catalog().add_item(req.into()).await?;
    Ok(Json(MessageResponse::new("Food item added successfully")))
}

/// `GET /api/owners/food-items/{email}`
#[instrument(skip(state))]
pub async fn vendor_items(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<FoodItem>>> {
    let items = state.catalog().list_items_by_vendor(&email).await?;
    Ok(Json(items))
}

/// `GET /api/food-items`
#[instrument(skip_all)]
pub async fn grouped_items(State(state): State<AppState>) -> Result<Json<CategorizedItems>> {
    let grouped = state.catalog().list_all_items_grouped().await?;
    Ok(Json(grouped))
}
