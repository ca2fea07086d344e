// Models module

pub mod author;
pub mod post;

// Re-export commonly used types
pub use author::Author;
pub use post::Post;

use uuid::Uuid;

/// Parse a path `:id` segment into a record id, accepting a `.json` format suffix.
/// A malformed id can never name a stored record, so callers treat `None` as not found.
pub fn parse_id(raw: &str) -> Option<Uuid> {
    let raw = raw.trim();
    let raw = raw.strip_suffix(".json").unwrap_or(raw);
    Uuid::parse_str(raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string()), Some(id));
        assert_eq!(parse_id(&format!(" {} ", id)), Some(id));
        assert_eq!(parse_id(&format!("{}.json", id)), Some(id));

        assert_eq!(parse_id("not-a-uuid"), None);
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("42"), None);
        assert_eq!(parse_id(".json"), None);
        assert_eq!(parse_id(&format!("{}.xml", id)), None);
    }
}
