use axum::http::StatusCode;
use thiserror::Error;

use crate::app::models::api_error::ApiError;

/// A target tag that names none of the supported services.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown target service: {tag:?}")]
pub struct UnknownTargetError {
    pub tag: String,
}

#[derive(Debug)]
pub enum PromptsApiError {
    MissingInputs,
    GenerationFailed,
}

impl PromptsApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::MissingInputs => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Invalid payload provided. Missing inputs.".to_string(),
            },
            Self::GenerationFailed => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to generate final prompt.".to_string(),
            },
        }
    }
}
