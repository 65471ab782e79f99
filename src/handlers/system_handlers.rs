use axum::{http::Uri, Json};
use tracing::debug;

use crate::dto::{HealthDto, WelcomeDto};
use crate::errors::ApiError;

/// Handler for `GET /`
pub async fn root_handler() -> Json<WelcomeDto> {
    Json(WelcomeDto {
        message: "Welcome to the Monopereo API".to_string(),
    })
}

/// Handler for `GET /health`, always `{"status": "ok"}` while the process serves requests
pub async fn health_handler() -> Json<HealthDto> {
    Json(HealthDto {
        status: "ok".to_string(),
    })
}

/// Fallback for paths no route matches
pub async fn fallback_handler(uri: Uri) -> ApiError {
    debug!("No route for {}", uri);
    ApiError::RouteNotFound
}
