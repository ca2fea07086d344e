// Handlers module
// index/show actions behind the authors and posts routes

pub mod authors;
pub mod posts;

use axum::{http::Uri, response::IntoResponse};

use crate::error::ApiError;

/// Fallback for any path outside the routing table
pub async fn route_not_found(uri: Uri) -> impl IntoResponse {
    ApiError::not_found(format!("Route {}", uri.path()))
}
