//! The application's routing table.
//!
//! | Method | Path                | Action         |
//! |--------|---------------------|----------------|
//! | GET    | `/authors(.json)`   | authors#index  |
//! | GET    | `/authors/:id`      | authors#show   |
//! | GET    | `/posts(.json)`     | posts#index    |
//! | GET    | `/posts/:id`        | posts#show     |
//! | GET    | `/`                 | posts#index    |
//!
//! A trailing slash is ignored and `:id` may carry a `.json` suffix.
//! Other methods on these paths get axum's 405; any other path gets a JSON 404.

use std::time::Duration;

use axum::{routing::get, Router};
use tower_http::normalize_path::NormalizePath;

use crate::{
    handlers::{authors, posts, route_not_found},
    middleware::{normalize_paths, with_middleware},
    store::AppState,
};

/// The served application: the router behind path normalization
pub type App = NormalizePath<Router>;

/// Create the Axum router with all endpoints and middleware
pub fn create_router(store: AppState, request_timeout: Duration) -> App {
    let router = Router::new()
        // Authors: index, show
        .route("/authors", get(authors::index))
        .route("/authors.json", get(authors::index))
        .route("/authors/:id", get(authors::show))
        // Posts: index, show
        .route("/posts", get(posts::index))
        .route("/posts.json", get(posts::index))
        .route("/posts/:id", get(posts::show))
        // Root
        .route("/", get(posts::index))
        .fallback(route_not_found)
        .with_state(store);

    normalize_paths(with_middleware(router, request_timeout))
}
