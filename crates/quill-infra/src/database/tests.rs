#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use quill_core::domain::Post;
    use quill_core::error::RepoError;
    use quill_core::ports::PostStore;

    use crate::database::PostgresPostStore;
    use crate::database::entity::post;

    fn sample_model(id: i64, title: &str) -> post::Model {
        let now = chrono::Utc::now();
        post::Model {
            id,
            title: title.to_owned(),
            content: "Content".to_owned(),
            category: "general".to_owned(),
            tags: vec!["rust".to_owned()],
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn test_find_post_by_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![sample_model(1, "Test Post")]])
            .into_connection();

        let store = PostgresPostStore::new(db);

        let result: Option<Post> = store.find_by_id(1).await.unwrap();

        assert!(result.is_some());
        let found = result.unwrap();
        assert_eq!(found.title, "Test Post");
        assert_eq!(found.id, 1);
        assert_eq!(found.tags, vec!["rust".to_owned()]);
    }

    #[tokio::test]
    async fn test_find_all_maps_every_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                sample_model(1, "First"),
                sample_model(2, "Second"),
            ]])
            .into_connection();

        let store = PostgresPostStore::new(db);

        let posts = store.find_all(None).await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, 1);
        assert_eq!(posts[1].title, "Second");
    }

    #[tokio::test]
    async fn test_delete_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let store = PostgresPostStore::new(db);

        let err = store.delete(42).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
    }
}
