//! Data Transfer Objects - request types for the API.

use serde::{Deserialize, Serialize};

/// Body of `POST /posts` and `PUT /posts/{id}`.
///
/// `category` and `tags` are optional on the wire and default to empty;
/// `title` and `content` are validated non-empty by the handler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostPayload {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_default_to_empty() {
        let payload: PostPayload =
            serde_json::from_str(r#"{"title":"Hello","content":"World"}"#).unwrap();
        assert_eq!(payload.title, "Hello");
        assert!(payload.category.is_empty());
        assert!(payload.tags.is_empty());
    }
}
