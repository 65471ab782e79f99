/// Monopereo: a small users and items REST API
///
/// This library provides the data models, the in-memory data store, the
/// repository abstraction over it and the Axum web layer.
///
/// ### Modules
///
/// - `config`: Layered configuration (defaults, config file, env, CLI)
/// - `dto`: Query parameters and response bodies
/// - `errors`: API error type and its HTTP mapping
/// - `handlers`: Axum request handlers
/// - `models`: Users and items
/// - `repo`: Repository trait and in-memory implementation
/// - `store`: Immutable record set loaded at startup
/// - `telemetry`: Tracing subscriber setup
///
/// ### Web API
///
/// - `GET /`: Welcome message
/// - `GET /health`: Liveness check
/// - `GET /users`: List users (`skip`, `limit`)
/// - `GET /users/{user_id}`: Get a specific user
/// - `GET /users/{user_id}/items`: List a user's items
/// - `GET /items`: List items (`skip`, `limit`)

pub mod config;
pub mod dto;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod repo;
pub mod store;
pub mod telemetry;

#[cfg(test)]
pub mod test_utils;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use repo::RepoHandle;

/// Routes under the `/users` prefix
fn user_routes() -> Router<RepoHandle> {
    Router::new()
        // Collection, with and without the trailing slash the frontend uses
        .route("/users", get(handlers::list_users_handler))
        .route("/users/", get(handlers::list_users_handler))
        .route("/users/{user_id}", get(handlers::get_user_handler))
        .route("/users/{user_id}/items", get(handlers::list_user_items_handler))
}

/// Routes under the `/items` prefix
fn item_routes() -> Router<RepoHandle> {
    Router::new()
        .route("/items", get(handlers::list_items_handler))
        .route("/items/", get(handlers::list_items_handler))
}

/// Creates the application router with all routes
///
/// ### Arguments
///
/// * `repo` - The repository shared with all handlers
///
/// ### Returns
///
/// An Axum Router configured with all routes, CORS and request tracing
pub fn create_app(repo: RepoHandle) -> Router {
    Router::new()
        .route("/", get(handlers::root_handler))
        .route("/health", get(handlers::health_handler))
        .merge(user_routes())
        .merge(item_routes())
        .fallback(handlers::fallback_handler)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(repo)
}
