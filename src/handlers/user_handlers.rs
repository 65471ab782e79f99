use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use tracing::{instrument, debug, info};

use crate::dto::PaginationQuery;
use crate::errors::ApiError;
use crate::models::{Item, User};
use crate::repo::RepoHandle;

/// Handler for listing users
///
/// This function handles GET requests to `/users`.
///
/// ### Arguments
///
/// * `repo` - The shared repository
/// * `query` - The `skip`/`limit` pagination parameters
///
/// ### Returns
///
/// The requested page of users, each with its items, as JSON
#[instrument(skip_all)]
pub async fn list_users_handler(
    State(repo): State<RepoHandle>,
    query: Result<Query<PaginationQuery>, QueryRejection>,
) -> Result<Json<Vec<User>>, ApiError> {
    let Query(query) = query?;
    debug!("Listing users with {}", query);

    let users = repo.list_users(query.into())?;

    info!("Retrieved {} users", users.len());

    Ok(Json(users))
}

/// Handler for retrieving a specific user
///
/// This function handles GET requests to `/users/{user_id}`.
///
/// ### Arguments
///
/// * `repo` - The shared repository
/// * `user_id` - The ID of the user to retrieve, extracted from the URL path
///
/// ### Returns
///
/// The requested user as JSON, or a 404 error if it does not exist
#[instrument(skip_all)]
pub async fn get_user_handler(
    State(repo): State<RepoHandle>,
    user_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<User>, ApiError> {
    let Path(user_id) = user_id?;
    debug!("Retrieving user {}", user_id);

    let user = repo.get_user(user_id)?
        .ok_or(ApiError::UserNotFound)?;

    Ok(Json(user))
}

/// Handler for listing the items owned by a user
///
/// This function handles GET requests to `/users/{user_id}/items`.
/// Unlike the repository lookup, which returns an empty list for unknown
/// users, this endpoint answers 404 so clients can tell the two apart.
#[instrument(skip_all)]
pub async fn list_user_items_handler(
    State(repo): State<RepoHandle>,
    user_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<Item>>, ApiError> {
    let Path(user_id) = user_id?;
    debug!("Listing items for user {}", user_id);

    if repo.get_user(user_id)?.is_none() {
        return Err(ApiError::UserNotFound);
    }

    let items = repo.get_items_for_user(user_id)?;

    info!("Retrieved {} items for user {}", items.len(), user_id);

    Ok(Json(items))
}
