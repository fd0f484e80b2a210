use async_trait::async_trait;

use crate::domain::{Post, PostDraft};
use crate::error::RepoError;

/// The CRUD contract every post backend implements.
///
/// Validation happens in the caller before any of these are invoked; the
/// store assumes drafts are well-formed.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Allocate the next identity and append a new post. Identities start at
    /// 1, increase by 1 per call and are never reused after a delete.
    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError>;

    /// Look up a post by id. `Ok(None)` means the id has no post.
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError>;

    /// All posts ordered by id ascending. With a term, only posts whose
    /// title, content or category contains it as a case-insensitive
    /// substring.
    async fn find_all(&self, term: Option<&str>) -> Result<Vec<Post>, RepoError>;

    /// Replace the mutable fields of the post with the given id and refresh
    /// its `updated_at`. `RepoError::NotFound` when the id is absent.
    async fn update(&self, id: i64, draft: PostDraft) -> Result<Post, RepoError>;

    /// Remove the post with the given id. `RepoError::NotFound` when the id
    /// is absent - a repeated delete reports NotFound, not silent success.
    async fn delete(&self, id: i64) -> Result<(), RepoError>;
}
