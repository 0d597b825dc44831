//! In-memory post repository - used as fallback when no database is configured.

use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::domain::{Post, PostDraft};
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

/// In-memory post collection behind an async RwLock.
///
/// Enforces the same slug uniqueness contract as the PostgreSQL repository.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.posts.read().await.clone())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.slug == slug).cloned())
    }

    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;

        if posts.iter().any(|p| p.slug == draft.slug) {
            return Err(RepoError::Constraint("Slug already in use".to_string()));
        }

        let post = Post::new(draft);
        posts.push(post.clone());
        Ok(post)
    }

    async fn update(&self, prior_slug: &str, draft: PostDraft) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;

        let Some(idx) = posts.iter().position(|p| p.slug == prior_slug) else {
            return Err(RepoError::NotFound);
        };

        let collides = posts
            .iter()
            .enumerate()
            .any(|(i, p)| i != idx && p.slug == draft.slug);
        if collides {
            return Err(RepoError::Constraint("Slug already in use".to_string()));
        }

        let updated = posts[idx].clone().apply(draft);
        posts[idx] = updated.clone();
        Ok(updated)
    }

    async fn delete(&self, slug: &str) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;

        let before = posts.len();
        posts.retain(|p| p.slug != slug);
        if posts.len() == before {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
