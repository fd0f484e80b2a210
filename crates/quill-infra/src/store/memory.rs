//! In-memory post store - the default backend when Postgres is not
//! configured.

use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::domain::{Post, PostDraft};
use quill_core::error::RepoError;
use quill_core::ports::PostStore;

/// Collection state guarded by a single lock.
///
/// Identity allocation lives under the same lock as the rows so that two
/// concurrent creates can never observe the same `next_id`, and rows stay
/// ordered by id without an explicit sort.
struct Table {
    next_id: i64,
    rows: Vec<Post>,
}

/// In-memory post store using a `Vec` behind an async RwLock.
///
/// Reads take the shared lock, mutations the exclusive lock; the lock is
/// only held across the collection touch, never across I/O.
/// Note: data is lost on process restart, and identities are unique within
/// a process lifetime only.
pub struct InMemoryPostStore {
    table: RwLock<Table>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                next_id: 1,
                rows: Vec::new(),
            }),
        }
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

fn matches(post: &Post, term: &str) -> bool {
    let term = term.to_lowercase();
    post.title.to_lowercase().contains(&term)
        || post.content.to_lowercase().contains(&term)
        || post.category.to_lowercase().contains(&term)
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;

        let id = table.next_id;
        table.next_id += 1;

        let post = Post::new(id, draft);
        table.rows.push(post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|p| p.id == id).cloned())
    }

    async fn find_all(&self, term: Option<&str>) -> Result<Vec<Post>, RepoError> {
        let table = self.table.read().await;
        let posts = match term {
            Some(term) => table
                .rows
                .iter()
                .filter(|p| matches(p, term))
                .cloned()
                .collect(),
            None => table.rows.clone(),
        };
        Ok(posts)
    }

    async fn update(&self, id: i64, draft: PostDraft) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;
        match table.rows.iter_mut().find(|p| p.id == id) {
            Some(post) => {
                post.apply(draft);
                Ok(post.clone())
            }
            None => Err(RepoError::NotFound),
        }
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let mut table = self.table.write().await;
        let before = table.rows.len();
        table.rows.retain(|p| p.id != id);

        if table.rows.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}
