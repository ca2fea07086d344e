// Author handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::info;

use crate::{
    error::{ApiError, ApiResult},
    models::parse_id,
    store::AppState,
};

/// List all authors
/// GET /authors
pub async fn index(State(store): State<AppState>) -> ApiResult<impl IntoResponse> {
    info!("Fetching all authors");

    let authors = store.list_authors().await?;

    info!("Retrieved {} authors", authors.len());
    Ok((StatusCode::OK, Json(authors)))
}

/// Get author by ID
/// GET /authors/:id
pub async fn show(
    State(store): State<AppState>,
    Path(author_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    info!("Fetching author with id: {}", author_id);

    let not_found = || ApiError::not_found(format!("Author with id {}", author_id));

    let id = parse_id(&author_id).ok_or_else(not_found)?;
    let author = store.find_author(id).await?.ok_or_else(not_found)?;

    Ok((StatusCode::OK, Json(author)))
}
