//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Form payload for creating a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPostForm {
    pub slug: String,
    pub title: String,
    pub markdown: String,
}

/// Form payload for the admin edit endpoint.
///
/// The post being edited is addressed by its prior slug in the URL; the
/// `action` discriminator selects exactly one of update or delete. Only the
/// discriminator is mandatory - a delete submission carries nothing else,
/// and an update with absent fields fails presence validation downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditPostForm {
    pub action: AdminAction,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub markdown: String,
}

/// The closed set of admin mutations. Serialized lowercase on the wire
/// (`action=update`, `action=delete`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminAction {
    Update,
    Delete,
}

/// Response containing a post's public representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub markdown: String,
    pub created_at: String,
    pub updated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_action_decodes_lowercase() {
        let form: EditPostForm = serde_json::from_value(serde_json::json!({
            "action": "update",
            "slug": "hello-world",
            "title": "Hello World",
            "markdown": "# hi",
        }))
        .unwrap();
        assert_eq!(form.action, AdminAction::Update);
    }

    #[test]
    fn edit_form_defaults_everything_but_the_action() {
        // A delete submission only needs the discriminator.
        let form: EditPostForm = serde_json::from_value(serde_json::json!({
            "action": "delete",
        }))
        .unwrap();
        assert_eq!(form.action, AdminAction::Delete);
        assert!(form.slug.is_empty());
        assert!(form.title.is_empty());
        assert!(form.markdown.is_empty());
    }

    #[test]
    fn unknown_action_is_rejected() {
        let result = serde_json::from_value::<EditPostForm>(serde_json::json!({
            "action": "publish",
            "slug": "hello-world",
        }));
        assert!(result.is_err());
    }
}
