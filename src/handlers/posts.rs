// Post handlers

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

/// List all posts, newest first.
/// GET /posts, and GET / through the root route
pub async fn index(State(store): State<AppState>) -> ApiResult<impl IntoResponse> {
    info!("Fetching all posts");

    let posts = store.list_posts().await?;

    info!("Retrieved {} posts", posts.len());
    Ok((StatusCode::OK, Json(posts)))
}

/// Get post by ID
/// GET /posts/:id
pub async fn show(
    State(store): State<AppState>,
    Path(post_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    info!("Fetching post with id: {}", post_id);

    let not_found = || ApiError::not_found(format!("Post with id {}", post_id));

    let id = parse_id(&post_id).ok_or_else(not_found)?;
    let post = store.find_post(id).await?.ok_or_else(not_found)?;

    Ok((StatusCode::OK, Json(post)))
}
