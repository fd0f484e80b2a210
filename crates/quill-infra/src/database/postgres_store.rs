//! PostgreSQL implementation of the post store.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{ActiveModelTrait, Condition, DbConn, DbErr, EntityTrait, QueryFilter, QueryOrder, Set};

use quill_core::domain::{Post, PostDraft};
use quill_core::error::RepoError;
use quill_core::ports::PostStore;

use super::entity::post;

/// PostgreSQL post store.
///
/// Identity allocation is delegated to the table's sequence; every operation
/// is a single round trip, relying on the database for atomicity instead of
/// an in-process lock.
pub struct PostgresPostStore {
    db: DbConn,
}

impl PostgresPostStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn map_db_err(err: DbErr) -> RepoError {
    match err {
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}

#[async_trait]
impl PostStore for PostgresPostStore {
    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError> {
        let now = Utc::now();
        let model = post::ActiveModel {
            title: Set(draft.title),
            content: Set(draft.content),
            category: Set(draft.category),
            tags: Set(draft.tags),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            ..Default::default()
        };

        let inserted = model.insert(&self.db).await.map_err(map_db_err)?;
        Ok(inserted.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let found = post::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.map(Into::into))
    }

    async fn find_all(&self, term: Option<&str>) -> Result<Vec<Post>, RepoError> {
        let mut query = post::Entity::find().order_by_asc(post::Column::Id);

        if let Some(term) = term {
            let pattern = format!("%{term}%");
            query = query.filter(
                Condition::any()
                    .add(Expr::col(post::Column::Title).ilike(pattern.clone()))
                    .add(Expr::col(post::Column::Content).ilike(pattern.clone()))
                    .add(Expr::col(post::Column::Category).ilike(pattern)),
            );
        }

        let rows = query.all(&self.db).await.map_err(map_db_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i64, draft: PostDraft) -> Result<Post, RepoError> {
        // Single UPDATE .. RETURNING; `created_at` stays untouched and comes
        // back in the returning clause.
        let model = post::ActiveModel {
            id: Set(id),
            title: Set(draft.title),
            content: Set(draft.content),
            category: Set(draft.category),
            tags: Set(draft.tags),
            updated_at: Set(Utc::now().into()),
            ..Default::default()
        };

        match model.update(&self.db).await {
            Ok(updated) => Ok(updated.into()),
            Err(DbErr::RecordNotUpdated) => Err(RepoError::NotFound),
            Err(err) => Err(map_db_err(err)),
        }
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let result = post::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
