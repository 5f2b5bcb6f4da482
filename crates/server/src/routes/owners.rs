//! Vendor account route handlers.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use foodhub_core::{ItemRef, deserialize_text};

use super::MessageResponse;
use crate::error::Result;
use crate::services::{VendorLogin, VendorRegistration};
use crate::state::AppState;

/// Vendor registration body.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub password: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub category: String,
}

/// Vendor login body. The category must match the one registered.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub password: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub category: String,
}

/// Successful vendor login.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub category: String,
    pub items: Vec<ItemRef>,
}

/// `POST /api/owners/register`
#[instrument(skip_all)]
pub async fn register(
    State(state): State<AppState>,
    payload: std::result::Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>> {
    let Json(req) = payload?;
    state
        .auth()
        .register_owner(VendorRegistration {
            name: req.name,
            email: req.email,
            password: SecretString::from(req.password),
            category: req.category,
        })
        .await?;
    Ok(Json(MessageResponse::new("Owner registered successfully")))
}

/// `POST /api/owners/login`
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    payload: std::result::Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>> {
    let Json(req) = payload?;
    let owner = state
        .auth()
        .login_owner(&VendorLogin {
            email: req.email,
            password: SecretString::from(req.password),
            category: req.category,
        })
        .await?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_owned(),
        category: owner.category,
        items: owner.items,
    }))
}
