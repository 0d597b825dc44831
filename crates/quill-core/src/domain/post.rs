use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - a single blog article.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub markdown: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post from a validated draft, assigning id and timestamps.
    pub fn new(draft: PostDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            slug: draft.slug,
            title: draft.title,
            markdown: draft.markdown,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a draft to an existing post, refreshing `updated_at`.
    pub fn apply(mut self, draft: PostDraft) -> Self {
        self.slug = draft.slug;
        self.title = draft.title;
        self.markdown = draft.markdown;
        self.updated_at = Utc::now();
        self
    }
}

/// Validated input for creating or updating a post.
///
/// Can only be obtained through [`PostDraft::new`], so a draft reaching a
/// repository has already passed the presence checks.
#[derive(Debug, Clone)]
pub struct PostDraft {
    pub slug: String,
    pub title: String,
    pub markdown: String,
}

impl PostDraft {
    /// Validate the raw field triple. Presence checks only.
    pub fn new(
        slug: impl Into<String>,
        title: impl Into<String>,
        markdown: impl Into<String>,
    ) -> Result<Self, FieldErrors> {
        let slug = slug.into();
        let title = title.into();
        let markdown = markdown.into();

        let errors = FieldErrors {
            title: title.is_empty().then_some("Title is required"),
            slug: slug.is_empty().then_some("Slug is required"),
            markdown: markdown.is_empty().then_some("Markdown is required"),
        };
        if errors.any() {
            return Err(errors);
        }

        Ok(Self {
            slug,
            title,
            markdown,
        })
    }
}

/// Per-field validation messages. `None` means the field passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    pub title: Option<&'static str>,
    pub slug: Option<&'static str>,
    pub markdown: Option<&'static str>,
}

impl FieldErrors {
    pub fn any(&self) -> bool {
        self.title.is_some() || self.slug.is_some() || self.markdown.is_some()
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> = [self.title, self.slug, self.markdown]
            .into_iter()
            .flatten()
            .collect();
        write!(f, "{}", messages.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_accepts_non_empty_fields() {
        let draft = PostDraft::new("hello-world", "Hello World", "# hi").unwrap();
        assert_eq!(draft.slug, "hello-world");
        assert_eq!(draft.title, "Hello World");
        assert_eq!(draft.markdown, "# hi");
    }

    #[test]
    fn draft_reports_every_missing_field() {
        let errors = PostDraft::new("", "", "").unwrap_err();
        assert_eq!(errors.title, Some("Title is required"));
        assert_eq!(errors.slug, Some("Slug is required"));
        assert_eq!(errors.markdown, Some("Markdown is required"));
    }

    #[test]
    fn draft_reports_only_the_missing_field() {
        let errors = PostDraft::new("hello-world", "", "# hi").unwrap_err();
        assert_eq!(errors.title, Some("Title is required"));
        assert_eq!(errors.slug, None);
        assert_eq!(errors.markdown, None);
    }

    #[test]
    fn new_post_carries_draft_fields() {
        let post = Post::new(PostDraft::new("hello-world", "Hello World", "# hi").unwrap());
        assert_eq!(post.slug, "hello-world");
        assert_eq!(post.title, "Hello World");
        assert_eq!(post.created_at, post.updated_at);
    }

    #[test]
    fn apply_replaces_fields_and_keeps_id() {
        let post = Post::new(PostDraft::new("hello-world", "Hello World", "# hi").unwrap());
        let id = post.id;
        let updated = post.apply(
            PostDraft::new("hello-world-2", "Hello World 2", "# hi there").unwrap(),
        );
        assert_eq!(updated.id, id);
        assert_eq!(updated.slug, "hello-world-2");
        assert_eq!(updated.title, "Hello World 2");
        assert!(updated.updated_at >= updated.created_at);
    }
}
