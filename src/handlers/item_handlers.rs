use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use tracing::{instrument, debug, info};

use crate::dto::PaginationQuery;
use crate::errors::ApiError;
use crate::models::Item;
use crate::repo::RepoHandle;

/// Handler for listing items
///
/// This function handles GET requests to `/items`.
///
/// ### Arguments
///
/// * `repo` - The shared repository
/// * `query` - The `skip`/`limit` pagination parameters
///
/// ### Returns
///
/// The requested page of items as JSON
#[instrument(skip_all)]
pub async fn list_items_handler(
    State(repo): State<RepoHandle>,
    query: Result<Query<PaginationQuery>, QueryRejection>,
) -> Result<Json<Vec<Item>>, ApiError> {
    let Query(query) = query?;
    debug!("Listing items with {}", query);

    let items = repo.list_items(query.into())?;

    info!("Retrieved {} items", items.len());

    Ok(Json(items))
}
