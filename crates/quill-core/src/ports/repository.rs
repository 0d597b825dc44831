use async_trait::async_trait;

use crate::domain::{Post, PostDraft};
use crate::error::RepoError;

/// Post repository - sole mediator between callers and the persisted
/// post collection.
///
/// Every operation is a single atomic request against the store; uniqueness
/// of `slug` is enforced by the store itself, so overlapping calls may race
/// and the loser observes `RepoError::Constraint`.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts, store-default order.
    async fn list(&self) -> Result<Vec<Post>, RepoError>;

    /// Find a post by its exact slug.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError>;

    /// Insert a new post with a freshly assigned id.
    /// Fails with `Constraint` if the slug is already taken.
    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError>;

    /// Replace slug/title/markdown of the post currently known by `prior_slug`.
    /// Fails with `NotFound` if no such post exists, `Constraint` if the new
    /// slug collides with a different post.
    async fn update(&self, prior_slug: &str, draft: PostDraft) -> Result<Post, RepoError>;

    /// Remove the post matching `slug`. Fails with `NotFound` when nothing
    /// was removed.
    async fn delete(&self, slug: &str) -> Result<(), RepoError>;
}
