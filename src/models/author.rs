use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};

/// Author entity. Posts reference it through `Post::author_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Author {
    /// Create a new Author with a generated ID and timestamps
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();

        Author {
            id: Uuid::new_v4(),
            name: name.into().trim().to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}
