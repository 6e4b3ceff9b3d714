use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use super::{invalid_body, not_found, storage_error};
use crate::{
    models::{blog::InsertBlogPost, parse_insert},
    AppState,
};

/// Public listing. Drafts are filtered out at the storage layer.
pub async fn list_blog_posts(
    State(state): State<AppState>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let posts = state
        .storage
        .list_published_blog_posts()
        .await
        .map_err(|e| storage_error("Failed to fetch blog posts", e))?;
    Ok(Json(json!({ "blogPosts": posts })))
}

/// A direct read reaches drafts too; only the listing is gated.
pub async fn get_blog_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let post = state
        .storage
        .get_blog_post(id)
        .await
        .map_err(|e| storage_error("Failed to fetch blog post", e))?
        .ok_or_else(|| not_found("Blog post not found"))?;
    Ok(Json(json!({ "blogPost": post })))
}

pub async fn get_blog_post_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let post = state
        .storage
        .get_blog_post_by_slug(&slug)
        .await
        .map_err(|e| storage_error("Failed to fetch blog post", e))?
        .ok_or_else(|| not_found("Blog post not found"))?;
    Ok(Json(json!({ "blogPost": post })))
}

pub async fn create_blog_post(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let insert = parse_insert::<InsertBlogPost>(body).map_err(invalid_body)?;
    let post = state
        .storage
        .create_blog_post(insert)
        .await
        .map_err(|e| storage_error("Failed to create blog post", e))?;
    Ok((StatusCode::CREATED, Json(json!({ "blogPost": post }))))
}
