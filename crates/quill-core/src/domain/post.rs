use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Post entity - a single blog article.
///
/// `id` and `created_at` are fixed at construction; every other field is
/// replaced wholesale by [`Post::apply`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post with a store-assigned id.
    ///
    /// Both timestamps come from a single clock read, so a fresh post always
    /// satisfies `created_at == updated_at`.
    pub fn new(id: i64, draft: PostDraft) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: draft.title,
            content: draft.content,
            category: draft.category,
            tags: draft.tags,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the mutable fields and refresh `updated_at`.
    ///
    /// `id` and `created_at` are never touched.
    pub fn apply(&mut self, draft: PostDraft) {
        self.title = draft.title;
        self.content = draft.content;
        self.category = draft.category;
        self.tags = draft.tags;
        self.updated_at = Utc::now();
    }
}

/// The user-supplied fields of a post, before the store assigns identity.
#[derive(Debug, Clone, Default)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
}

impl PostDraft {
    /// A stored post never has an empty title or content.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.is_empty() || self.content.is_empty() {
            return Err(DomainError::Validation(
                "title and content cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, content: &str) -> PostDraft {
        PostDraft {
            title: title.to_string(),
            content: content.to_string(),
            category: "general".to_string(),
            tags: vec!["a".to_string(), "b".to_string()],
        }
    }

    #[test]
    fn new_post_stamps_equal_timestamps() {
        let post = Post::new(1, draft("Hello", "World"));
        assert_eq!(post.id, 1);
        assert_eq!(post.created_at, post.updated_at);
    }

    #[test]
    fn apply_replaces_fields_and_preserves_identity() {
        let mut post = Post::new(7, draft("Hello", "World"));
        let created = post.created_at;
        let before = post.updated_at;

        post.apply(PostDraft {
            title: "Hi".to_string(),
            content: "There".to_string(),
            category: String::new(),
            tags: vec![],
        });

        assert_eq!(post.id, 7);
        assert_eq!(post.created_at, created);
        assert_eq!(post.title, "Hi");
        assert_eq!(post.content, "There");
        assert!(post.category.is_empty());
        assert!(post.tags.is_empty());
        assert!(post.updated_at > before);
    }

    #[test]
    fn draft_validation_rejects_empty_required_fields() {
        assert!(draft("Hello", "World").validate().is_ok());
        assert!(draft("", "World").validate().is_err());
        assert!(draft("Hello", "").validate().is_err());
    }

    #[test]
    fn wire_format_uses_camel_case_and_rfc3339() {
        let post = Post::new(1, draft("Hello", "World"));
        let json = serde_json::to_value(&post).unwrap();

        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert_eq!(json["tags"], serde_json::json!(["a", "b"]));

        // Server-assigned fields aside, a round trip preserves user input.
        let back: Post = serde_json::from_value(json).unwrap();
        assert_eq!(back, post);
    }
}
