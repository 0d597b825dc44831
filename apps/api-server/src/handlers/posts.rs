//! Public post handlers.

use actix_web::{HttpResponse, web};

use quill_core::domain::Post;
use quill_shared::dto::PostResponse;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

pub(super) fn post_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        slug: post.slug,
        title: post.title,
        markdown: post.markdown,
        created_at: post.created_at.to_rfc3339(),
        updated_at: post.updated_at.to_rfc3339(),
    }
}

/// GET /api/posts - all posts, store-default order.
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    let body: Vec<PostResponse> = posts.into_iter().map(post_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/posts/{slug} - a single post.
pub async fn detail(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let slug = path.into_inner();

    let post = state
        .posts
        .find_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post not found: {}", slug)))?;

    Ok(HttpResponse::Ok().json(post_response(post)))
}
