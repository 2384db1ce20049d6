use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

use super::{config::APP_NAME, errors::DefaultApiError, models::api_error::ApiError};

pub async fn get_root(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "name": APP_NAME,
        "status": "online",
        "generator": state.generator.name(),
    }))
}

pub async fn method_not_allowed() -> ApiError {
    DefaultApiError::MethodNotAllowed.value()
}

pub async fn not_found() -> ApiError {
    DefaultApiError::NotFound.value()
}
