use std::time::Duration;

use axum::{
    error_handling::HandleErrorLayer,
    extract::DefaultBodyLimit,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    BoxError, Router,
};
use tower::{buffer::BufferLayer, limit::RateLimitLayer, ServiceBuilder};
use tower_http::cors::{Any, CorsLayer};

use crate::{prompts, variants, AppState};

use super::{
    config::{BODY_LIMIT_BYTES, BUFFER_SIZE},
    controller,
    errors::DefaultApiError,
};

pub fn create_router(state: AppState) -> Router {
    let rate_limit = state.envy.rate_limit_per_second();
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::POST, Method::GET]);

    Router::new()
        .route("/", get(controller::get_root))
        // prompts
        .route(
            "/api/compose-prompt",
            post(prompts::controller::compose_prompt).fallback(controller::method_not_allowed),
        )
        .route(
            "/api/generate-prompt",
            post(prompts::controller::generate_prompt).fallback(controller::method_not_allowed),
        )
        // variants
        .route(
            "/api/generate-variants",
            post(variants::controller::generate_variants)
                .fallback(controller::method_not_allowed),
        )
        .fallback(controller::not_found)
        // layers
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(cors)
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(|err: BoxError| async move {
                    tracing::error!(%err, "request rejected by middleware");
                    DefaultApiError::InternalServerError.value()
                }))
                .layer(BufferLayer::new(BUFFER_SIZE))
                .layer(RateLimitLayer::new(rate_limit, Duration::from_secs(1))),
        )
        .with_state(state)
}
