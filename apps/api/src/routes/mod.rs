pub mod health;

use std::time::Duration;

use axum::{
    error_handling::HandleErrorLayer,
    routing::{get, post},
    BoxError, Router,
};
use tower::{timeout::error::Elapsed, timeout::TimeoutLayer, ServiceBuilder};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::errors::AppError;
use crate::replies::handlers::handle_generate_replies;
use crate::state::AppState;
use crate::status::handlers::{handle_create_status_check, handle_list_status_checks};

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/", get(health::root_handler))
        .route(
            "/status",
            get(handle_list_status_checks).post(handle_create_status_check),
        )
        .route("/generate-replies", post(handle_generate_replies));

    Router::new()
        .route("/health", get(health::health_handler))
        // The nested "/" only answers "/api"
        .route("/api/", get(health::root_handler))
        .nest("/api", api)
        .with_state(state)
}

/// Request tracing, permissive CORS, and a whole-request timeout that
/// renders through `AppError` like every other failure.
pub fn apply_layers(router: Router, request_timeout: Duration) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .layer(HandleErrorLayer::new(handle_layer_error))
            .layer(TimeoutLayer::new(request_timeout)),
    )
}

async fn handle_layer_error(err: BoxError) -> AppError {
    if err.is::<Elapsed>() {
        AppError::Timeout
    } else {
        AppError::Unhandled(err.to_string())
    }
}
