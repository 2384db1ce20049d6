use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum VariantsApiError {
    MissingInputText,
    GenerationFailed,
}

impl VariantsApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::MissingInputText => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "inputText is required".to_string(),
            },
            Self::GenerationFailed => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to generate variants.".to_string(),
            },
        }
    }
}
