// Library root for the blog routes service

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod store;

// Re-export commonly used types
pub use db::Database;
pub use error::{ApiError, ApiResult};
pub use models::{Author, Post};
pub use routes::{create_router, App};
pub use store::{AppState, BlogStore, MemoryStore};
