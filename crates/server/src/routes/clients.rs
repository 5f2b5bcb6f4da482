//! Client account route handlers.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use secrecy::SecretString;
use foodhub_core::deserialize_text;
use serde::Deserialize;
use tracing::instrument;

use super::MessageResponse;
use crate::error::Result;
use crate::services::ClientRegistration;
use crate::state::AppState;

/// Client registration body.
///
/// Absent or `null` fields are stored as empty strings; numbers and booleans
/// are stored as their JSON text.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
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

impl From<RegisterRequest> for ClientRegistration {
    fn from(req: RegisterRequest) -> Self {
        Self {
            email: req.email,
            password: SecretString::from(req.password),
            name: req.name,
            number: req.number,
            address: req.address,
        }
    }
}

/// Client login body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub password: String,
}

/// `POST /api/register`
#[instrument(skip_all)]
pub async fn register(
    State(state): State<AppState>,
    payload: std::result::Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>> {
    let Json(req) = payload?;
    state.auth().register_user(req.into()).await?;
    Ok(Json(MessageResponse::new("Registration successful")))
}

/// `POST /api/login`
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    payload: std::result::Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>> {
    let Json(req) = payload?;
    let password = SecretString::from(req.password);
    state.auth().login_user(&req.email, &password).await?;
    Ok(Json(MessageResponse::new("Login successful")))
}
