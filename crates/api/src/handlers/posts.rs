//! Handlers for blog posts.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use wayfarer_core::error::CoreError;
use wayfarer_core::{ids, slug};
use wayfarer_db::models::post::{CreatePost, Post, UpdatePost};
use wayfarer_db::repositories::PostRepo;

use crate::error::{AppError, AppResult};
use crate::extract::FormPayload;
use crate::handlers::{destroy_stored_image, upload_form_image};
use crate::middleware::auth::AdminSession;
use crate::response::MessageResponse;
use crate::state::AppState;

const MEDIA_FOLDER: &str = "posts";

/// Author recorded when the form leaves the field blank.
const DEFAULT_AUTHOR: &str = "Admin";

#[derive(Debug, Serialize)]
pub struct PostList {
    pub posts: Vec<Post>,
}

#[derive(Debug, Serialize)]
pub struct PostBody {
    pub post: Post,
}

#[derive(Debug, Serialize)]
pub struct PostCreated {
    pub message: &'static str,
    pub post: Post,
}

/// GET /api/posts
pub async fn list_public(State(state): State<AppState>) -> AppResult<Json<PostList>> {
    let posts = PostRepo::list_active(&state.pool).await?;
    Ok(Json(PostList { posts }))
}

/// GET /api/posts/{slug}
///
/// Public single-post lookup; hidden posts read as absent.
pub async fn get_public(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<PostBody>> {
    let post = PostRepo::find_active_by_slug(&state.pool, &slug)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Post" }))?;
    Ok(Json(PostBody { post }))
}

/// GET /api/admin/posts
pub async fn list_admin(
    _admin: AdminSession,
    State(state): State<AppState>,
) -> AppResult<Json<PostList>> {
    let posts = PostRepo::list_all(&state.pool).await?;
    Ok(Json(PostList { posts }))
}

/// POST /api/admin/posts (multipart)
pub async fn create(
    admin: AdminSession,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<PostCreated>)> {
    let mut form = FormPayload::from_multipart(multipart).await?;
    let stored = upload_form_image(&state, &mut form, MEDIA_FOLDER).await?;

    let title = form.text("title");
    let input = CreatePost {
        public_id: ids::post_id(),
        slug: slug::slugify(title.as_deref()),
        title,
        content: form.raw_text("content"),
        author: form
            .text("author")
            .unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
        image_url: stored.as_ref().map(|img| img.url.clone()),
        image_public_id: stored.map(|img| img.public_id),
        active: form.flag("active").unwrap_or(false),
    };

    let post = PostRepo::create(&state.pool, &input).await?;
    tracing::info!(id = %post.public_id, slug = %post.slug, username = %admin.username, "Post created");

    Ok((
        StatusCode::CREATED,
        Json(PostCreated {
            message: "Post created successfully",
            post,
        }),
    ))
}

/// PUT /api/admin/posts/{id} (multipart)
///
/// The slug is fixed at creation; retitling a post does not move its URL.
pub async fn update(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> AppResult<Json<MessageResponse>> {
    let mut form = FormPayload::from_multipart(multipart).await?;
    let stored = upload_form_image(&state, &mut form, MEDIA_FOLDER).await?;

    let input = UpdatePost {
        title: form.text("title"),
        content: form.raw_text("content"),
        author: form.text("author"),
        active: form.flag("active"),
        image_url: stored.as_ref().map(|img| img.url.clone()),
        image_public_id: stored.map(|img| img.public_id),
    };

    PostRepo::update_by_public_id(&state.pool, &id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Post" }))?;

    Ok(Json(MessageResponse {
        message: "Post updated successfully",
    }))
}

/// DELETE /api/admin/posts/{id}
pub async fn delete(
    admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let post = PostRepo::find_by_public_id(&state.pool, &id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Post" }))?;

    destroy_stored_image(
        &state,
        post.image_url.as_deref(),
        post.image_public_id.as_deref(),
        MEDIA_FOLDER,
    )
    .await?;

    PostRepo::delete_by_public_id(&state.pool, &id).await?;
    tracing::info!(id = %id, username = %admin.username, "Post deleted");

    Ok(Json(MessageResponse {
        message: "Post deleted successfully",
    }))
}
