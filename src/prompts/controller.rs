use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::{
    app::models::{api_error::ApiError, json_from_request::JsonFromRequest},
    AppState,
};

use super::{
    dtos::prompt_request_dto::PromptRequestDto, models::prompt_response::PromptResponse, service,
};

pub async fn compose_prompt(
    JsonFromRequest(dto): JsonFromRequest<PromptRequestDto>,
) -> Result<Json<PromptResponse>, ApiError> {
    match dto.validate() {
        Ok(_) => match service::compose_prompt(&dto) {
            Ok(final_prompt) => Ok(Json(PromptResponse { final_prompt })),
            Err(e) => Err(e),
        },
        Err(e) => Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        }),
    }
}

pub async fn generate_prompt(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<PromptRequestDto>,
) -> Result<Json<PromptResponse>, ApiError> {
    match dto.validate() {
        Ok(_) => match service::generate_prompt(&dto, &state).await {
            Ok(final_prompt) => Ok(Json(PromptResponse { final_prompt })),
            Err(e) => Err(e),
        },
        Err(e) => Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        }),
    }
}
