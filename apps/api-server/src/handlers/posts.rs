//! Post CRUD handlers.
//!
//! Every handler follows the same flow: parse inputs (400), call the
//! post service under the request deadline (500), then reply.

use actix_web::{HttpResponse, http::header, web};
use uuid::Uuid;

use quill_core::DomainError;
use quill_core::domain::Post;
use quill_shared::dto::{PostPayload, PostResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn parse_post_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|err| {
        tracing::error!(error = %err, id = raw, "Invalid ID parameter");
        AppError::BadRequest("Invalid ID parameter".to_string())
    })
}

// The body is decoded regardless of Content-Type. Only the first JSON
// value is read; anything after it is ignored.
fn parse_payload(body: &[u8]) -> AppResult<PostPayload> {
    let reject = |err: &dyn std::fmt::Display| {
        tracing::error!(error = %err, "Failed to parse request body");
        AppError::BadRequest("Failed to parse request body".to_string())
    };

    match serde_json::Deserializer::from_slice(body)
        .into_iter::<PostPayload>()
        .next()
    {
        Some(Ok(payload)) => Ok(payload),
        Some(Err(err)) => Err(reject(&err)),
        None => Err(reject(&"empty request body")),
    }
}

fn plain_text(message: &'static str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(message)
}

/// GET /api/v1/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;

    match state.within_deadline(state.posts.get_post(id)).await {
        Ok(post) => Ok(HttpResponse::Ok().json(PostResponse {
            id: post.id,
            title: post.title,
            content: post.content,
        })),
        Err(DomainError::NotFound { .. }) => {
            tracing::info!(post_id = %id, "Post not found");
            Err(AppError::NotFound("Post not found".to_string()))
        }
        Err(err) => {
            tracing::error!(error = %err, post_id = %id, "Failed to fetch post");
            Err(AppError::Internal(format!("Failed to fetch post with ID {id}")))
        }
    }
}

/// POST /api/v1/posts
pub async fn create_post(state: web::Data<AppState>, body: web::Bytes) -> AppResult<HttpResponse> {
    let payload = parse_payload(&body)?;
    let post = Post::new(payload.title, payload.content);

    if let Err(err) = state.within_deadline(state.posts.create_post(&post)).await {
        tracing::error!(error = %err, post = ?post, "Failed to create post");
        return Err(AppError::Internal("Failed to create post".to_string()));
    }

    tracing::info!(post = ?post, "Post created successfully");
    Ok(HttpResponse::Ok()
        .insert_header((header::LOCATION, format!("/api/v1/posts/{}", post.id)))
        .content_type("text/plain; charset=utf-8")
        .body("Post created successfully"))
}

/// PUT /api/v1/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;
    let payload = parse_payload(&body)?;
    let post = Post::with_id(id, payload.title, payload.content);

    if let Err(err) = state.within_deadline(state.posts.update_post(id, &post)).await {
        tracing::error!(error = %err, post = ?post, "Failed to update post");
        return Err(AppError::Internal("Failed to update post".to_string()));
    }

    tracing::info!(post = ?post, "Post updated successfully");
    Ok(plain_text("Post updated successfully"))
}

/// DELETE /api/v1/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;

    if let Err(err) = state.within_deadline(state.posts.delete_post(id)).await {
        tracing::error!(error = %err, post_id = %id, "Failed to delete post");
        return Err(AppError::Internal("Failed to delete post".to_string()));
    }

    tracing::info!(post_id = %id, "Post deleted successfully");
    Ok(plain_text("Post deleted successfully"))
}
