use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};

/// Post entity representing an article written by an author
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub body: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new Post with a generated ID and timestamps.
    /// Title is trimmed; a blank body is stored as `None`.
    pub fn new(author_id: Uuid, title: impl Into<String>, body: Option<String>) -> Self {
        let now = Utc::now();
        let body = body
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty());

        Post {
            id: Uuid::new_v4(),
            author_id,
            title: title.into().trim().to_string(),
            body,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Newest first, with id as a tie-breaker so listings are stable
pub fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_post_creation() {
        let author_id = Uuid::new_v4();
        let post = Post::new(author_id, "  Test Title  ", Some("  Test body  ".to_string()));

        assert!(!post.id.is_nil());
        assert_eq!(post.author_id, author_id);
        assert_eq!(post.title, "Test Title");
        assert_eq!(post.body, Some("Test body".to_string()));
        assert_eq!(post.created_at, post.updated_at);
    }

    #[test]
    fn test_post_blank_body_is_none() {
        let post = Post::new(Uuid::new_v4(), "Title", Some("   ".to_string()));
        assert_eq!(post.body, None);

        let post = Post::new(Uuid::new_v4(), "Title", None);
        assert_eq!(post.body, None);
    }

    #[test]
    fn test_sort_newest_first() {
        let author_id = Uuid::new_v4();
        let base = Utc.with_ymd_and_hms(2023, 5, 1, 12, 0, 0).unwrap();

        let mut older = Post::new(author_id, "older", None);
        older.created_at = base;
        let mut newer = Post::new(author_id, "newer", None);
        newer.created_at = base + Duration::hours(1);

        let mut posts = vec![older.clone(), newer.clone()];
        sort_newest_first(&mut posts);

        assert_eq!(posts[0].title, "newer");
        assert_eq!(posts[1].title, "older");
    }

    #[test]
    fn test_post_serialization_without_body() {
        let at = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();
        let post = Post {
            id: Uuid::parse_str("123e4567-e89b-12d3-a456-426614174000").unwrap(),
            author_id: Uuid::parse_str("987fcdeb-51a2-43d1-9f12-345678901234").unwrap(),
            title: "Test Post".to_string(),
            body: None,
            created_at: at,
            updated_at: at,
        };

        let json = serde_json::to_string(&post).expect("Failed to serialize post");
        let expected = r#"{"id":"123e4567-e89b-12d3-a456-426614174000","author_id":"987fcdeb-51a2-43d1-9f12-345678901234","title":"Test Post","body":null,"created_at":"2022-01-01T00:00:00Z","updated_at":"2022-01-01T00:00:00Z"}"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_post_deserialization() {
        let json = r#"{"id":"123e4567-e89b-12d3-a456-426614174000","author_id":"987fcdeb-51a2-43d1-9f12-345678901234","title":"Test Post","body":"Hello","created_at":"2022-01-01T00:00:00Z","updated_at":"2022-01-01T00:00:00Z"}"#;

        let post: Post = serde_json::from_str(json).expect("Failed to deserialize post");

        assert_eq!(post.title, "Test Post");
        assert_eq!(post.body, Some("Hello".to_string()));
        assert_eq!(post.author_id.to_string(), "987fcdeb-51a2-43d1-9f12-345678901234");
    }
}
