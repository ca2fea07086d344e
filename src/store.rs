//! Read-side storage seam for authors and posts.
//!
//! Handlers only see `dyn BlogStore`; PostgreSQL (`crate::db::Database`) backs
//! deployments and `MemoryStore` backs local runs and tests.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::models::{post::sort_newest_first, Author, Post};

/// Shared handler state
pub type AppState = Arc<dyn BlogStore>;

/// Lookup operations behind the authors and posts routes.
/// A missing record is `Ok(None)`; `Err` is reserved for backend failures.
#[async_trait]
pub trait BlogStore: Send + Sync {
    /// All authors ordered by name
    async fn list_authors(&self) -> ApiResult<Vec<Author>>;

    async fn find_author(&self, id: Uuid) -> ApiResult<Option<Author>>;

    /// All posts, newest first
    async fn list_posts(&self) -> ApiResult<Vec<Post>>;

    async fn find_post(&self, id: Uuid) -> ApiResult<Option<Post>>;

    /// Connectivity check run once at startup
    async fn ping(&self) -> ApiResult<()>;
}

/// Fixture format accepted by `MemoryStore::seed_from_json`
#[derive(Debug, Deserialize)]
pub struct Seed {
    pub authors: Vec<SeedAuthor>,
}

#[derive(Debug, Deserialize)]
pub struct SeedAuthor {
    pub name: String,
    #[serde(default)]
    pub posts: Vec<SeedPost>,
}

#[derive(Debug, Deserialize)]
pub struct SeedPost {
    pub title: String,
    pub body: Option<String>,
}

#[derive(Default)]
struct Tables {
    authors: HashMap<Uuid, Author>,
    posts: HashMap<Uuid, Post>,
}

/// In-process store. Locks are never held across an `.await`.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_author(&self, name: impl Into<String>) -> ApiResult<Author> {
        let author = Author::new(name);
        let mut tables = self.write()?;
        tables.authors.insert(author.id, author.clone());

        info!("Inserted author with id: {}", author.id);
        Ok(author)
    }

    /// Insert a post for an existing author
    pub fn insert_post(
        &self,
        author_id: Uuid,
        title: impl Into<String>,
        body: Option<String>,
    ) -> ApiResult<Post> {
        let mut tables = self.write()?;
        if !tables.authors.contains_key(&author_id) {
            return Err(ApiError::not_found(format!("Author with id {}", author_id)));
        }

        let post = Post::new(author_id, title, body);
        tables.posts.insert(post.id, post.clone());

        info!("Inserted post with id: {}", post.id);
        Ok(post)
    }

    /// Load authors and their posts from a JSON fixture.
    /// Returns the number of authors and posts inserted.
    pub fn seed_from_json(&self, json: &str) -> ApiResult<(usize, usize)> {
        let seed: Seed = serde_json::from_str(json)
            .map_err(|e| ApiError::Internal(anyhow::Error::new(e).context("invalid seed fixture")))?;

        let mut post_count = 0;
        for seed_author in &seed.authors {
            let author = self.insert_author(seed_author.name.as_str())?;
            for seed_post in &seed_author.posts {
                self.insert_post(author.id, seed_post.title.as_str(), seed_post.body.clone())?;
                post_count += 1;
            }
        }

        info!("Seeded {} authors and {} posts", seed.authors.len(), post_count);
        Ok((seed.authors.len(), post_count))
    }

    fn read(&self) -> ApiResult<std::sync::RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|_| ApiError::Internal(anyhow::anyhow!("memory store lock poisoned")))
    }

    fn write(&self) -> ApiResult<std::sync::RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|_| ApiError::Internal(anyhow::anyhow!("memory store lock poisoned")))
    }
}

#[async_trait]
impl BlogStore for MemoryStore {
    async fn list_authors(&self) -> ApiResult<Vec<Author>> {
        let mut authors: Vec<Author> = self.read()?.authors.values().cloned().collect();
        authors.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(authors)
    }

    async fn find_author(&self, id: Uuid) -> ApiResult<Option<Author>> {
        Ok(self.read()?.authors.get(&id).cloned())
    }

    async fn list_posts(&self) -> ApiResult<Vec<Post>> {
        let mut posts: Vec<Post> = self.read()?.posts.values().cloned().collect();
        sort_newest_first(&mut posts);
        Ok(posts)
    }

    async fn find_post(&self, id: Uuid) -> ApiResult<Option<Post>> {
        Ok(self.read()?.posts.get(&id).cloned())
    }

    async fn ping(&self) -> ApiResult<()> {
        self.read().map(|_| ())
    }
}
