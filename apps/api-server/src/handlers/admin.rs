//! Admin post handlers - the create/update/delete surface.
//!
//! Mutations are form submissions; a successful one redirects back to the
//! admin listing, a failed validation answers 422 with per-field messages.

use actix_web::{HttpResponse, http::header, web};

use quill_core::domain::PostDraft;
use quill_shared::dto::{AdminAction, EditPostForm, NewPostForm, PostResponse};

use super::posts::post_response;
use crate::middleware::error::AppResult;
use crate::state::AppState;

const ADMIN_LISTING: &str = "/api/posts/admin";

fn redirect_to_listing() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, ADMIN_LISTING))
        .finish()
}

/// GET /api/posts/admin - the listing admin mutations redirect back to.
pub async fn listing(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    let body: Vec<PostResponse> = posts.into_iter().map(post_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// POST /api/posts/admin/new - create a post.
pub async fn create(
    state: web::Data<AppState>,
    form: web::Form<NewPostForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();

    let draft = PostDraft::new(form.slug, form.title, form.markdown)?;
    state.posts.create(draft).await?;

    Ok(redirect_to_listing())
}

/// POST /api/posts/admin/{slug} - update or delete the addressed post.
///
/// The path segment is the post's current slug; the form's `action` field
/// selects exactly one of the two mutations. Update validates the submitted
/// fields before touching the store, delete is keyed by the path alone.
pub async fn edit(
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Form<EditPostForm>,
) -> AppResult<HttpResponse> {
    let prior_slug = path.into_inner();
    let form = form.into_inner();

    match form.action {
        AdminAction::Update => {
            let draft = PostDraft::new(form.slug, form.title, form.markdown)?;
            state.posts.update(&prior_slug, draft).await?;
        }
        AdminAction::Delete => {
            state.posts.delete(&prior_slug).await?;
        }
    }

    Ok(redirect_to_listing())
}
