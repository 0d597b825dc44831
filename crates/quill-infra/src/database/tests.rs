#[cfg(test)]
mod tests {
    use crate::database::entity::post;
    use crate::database::postgres_repo::{PostgresPostRepository, map_write_err};
    use quill_core::domain::{Post, PostDraft};
    use quill_core::error::RepoError;
    use quill_core::ports::PostRepository;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, RuntimeErr};

    fn model(slug: &str, title: &str, markdown: &str) -> post::Model {
        let now = chrono::Utc::now();
        post::Model {
            id: uuid::Uuid::new_v4(),
            slug: slug.to_owned(),
            title: title.to_owned(),
            markdown: markdown.to_owned(),
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn test_find_post_by_slug() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model("hello-world", "Hello World", "# hi")]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result: Option<Post> = repo.find_by_slug("hello-world").await.unwrap();

        assert!(result.is_some());
        let found = result.unwrap();
        assert_eq!(found.slug, "hello-world");
        assert_eq!(found.title, "Hello World");
    }

    #[tokio::test]
    async fn test_find_missing_slug_returns_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result = repo.find_by_slug("missing").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_list_returns_all_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                model("first", "First", "# one"),
                model("second", "Second", "# two"),
            ]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let posts = repo.list().await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].slug, "first");
        assert_eq!(posts[1].slug, "second");
    }

    #[tokio::test]
    async fn test_create_returns_inserted_row() {
        let inserted = model("hello-world", "Hello World", "# hi");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![inserted.clone()]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let created = repo
            .create(PostDraft::new("hello-world", "Hello World", "# hi").unwrap())
            .await
            .unwrap();
        assert_eq!(created.id, inserted.id);
        assert_eq!(created.slug, "hello-world");
    }

    #[tokio::test]
    async fn test_update_missing_prior_slug_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let err = repo
            .update(
                "missing",
                PostDraft::new("missing", "Title", "# body").unwrap(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_zero_rows_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let err = repo.delete("missing").await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_removes_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        repo.delete("hello-world").await.unwrap();
    }

    #[test]
    fn test_unique_violation_maps_to_constraint() {
        let err = map_write_err(DbErr::Query(RuntimeErr::Internal(
            "duplicate key value violates unique constraint \"posts_slug_key\"".to_owned(),
        )));
        assert!(matches!(err, RepoError::Constraint(_)));
    }

    #[test]
    fn test_other_write_errors_map_to_query() {
        let err = map_write_err(DbErr::Query(RuntimeErr::Internal(
            "syntax error at or near".to_owned(),
        )));
        assert!(matches!(err, RepoError::Query(_)));
    }

    #[test]
    fn test_connection_failures_map_to_connection() {
        let err = map_write_err(DbErr::Conn(RuntimeErr::Internal(
            "pool timed out while waiting for an open connection".to_owned(),
        )));
        assert!(matches!(err, RepoError::Connection(_)));
    }
}
