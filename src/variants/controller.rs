use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::{
    app::models::{api_error::ApiError, json_from_request::JsonFromRequest},
    AppState,
};

use super::{
    dtos::generate_variants_dto::GenerateVariantsDto, models::variants_response::VariantsResponse,
    service,
};

pub async fn generate_variants(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<GenerateVariantsDto>,
) -> Result<Json<VariantsResponse>, ApiError> {
    let dto = dto.sanitized();

    match dto.validate() {
        Ok(_) => match service::generate_variants(&dto, &state).await {
            Ok(variants) => Ok(Json(VariantsResponse { variants })),
            Err(e) => Err(e),
        },
        Err(e) => Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        }),
    }
}
