//! PostgreSQL repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter};

use quill_core::domain::{Post, PostDraft};
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};

/// PostgreSQL post repository.
///
/// Holds a pooled connection handed to it at construction; slug uniqueness
/// is enforced by the unique index on `posts.slug`, so a losing writer in a
/// concurrent race observes `RepoError::Constraint`.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

/// Map a write failure, folding unique-index violations into `Constraint`.
pub(crate) fn map_write_err(e: DbErr) -> RepoError {
    if let DbErr::Conn(e) = e {
        return RepoError::Connection(e.to_string());
    }

    let err_str = e.to_string();
    if err_str.contains("duplicate") || err_str.contains("unique") {
        RepoError::Constraint("Slug already in use".to_string())
    } else {
        RepoError::Query(err_str)
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        tracing::debug!(post_slug = %slug, "Finding post by slug");

        let result = PostEntity::find()
            .filter(post::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError> {
        let active: post::ActiveModel = Post::new(draft).into();
        let model = active.insert(&self.db).await.map_err(map_write_err)?;

        Ok(model.into())
    }

    async fn update(&self, prior_slug: &str, draft: PostDraft) -> Result<Post, RepoError> {
        let existing = PostEntity::find()
            .filter(post::Column::Slug.eq(prior_slug))
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        let Some(model) = existing else {
            return Err(RepoError::NotFound);
        };

        let current: Post = model.into();
        let active: post::ActiveModel = current.apply(draft).into();
        let model = active.update(&self.db).await.map_err(|e| match e {
            // The row vanished between the lookup and the write.
            DbErr::RecordNotUpdated => RepoError::NotFound,
            e => map_write_err(e),
        })?;

        Ok(model.into())
    }

    async fn delete(&self, slug: &str) -> Result<(), RepoError> {
        let result = PostEntity::delete_many()
            .filter(post::Column::Slug.eq(slug))
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
