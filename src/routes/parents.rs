use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use super::{invalid_body, not_found, storage_error};
use crate::{
    models::{parent::InsertParent, parse_insert},
    AppState,
};

pub async fn create_parent(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let insert = parse_insert::<InsertParent>(body).map_err(invalid_body)?;
    let parent = state
        .storage
        .create_parent(insert)
        .await
        .map_err(|e| storage_error("Failed to create parent", e))?;
    Ok((StatusCode::CREATED, Json(json!({ "parent": parent }))))
}

pub async fn get_parent(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let parent = state
        .storage
        .get_parent(id)
        .await
        .map_err(|e| storage_error("Failed to fetch parent", e))?
        .ok_or_else(|| not_found("Parent not found"))?;
    Ok(Json(json!({ "parent": parent })))
}

pub async fn get_parent_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let parent = state
        .storage
        .get_parent_by_user(user_id)
        .await
        .map_err(|e| storage_error("Failed to fetch parent", e))?
        .ok_or_else(|| not_found("Parent not found"))?;
    Ok(Json(json!({ "parent": parent })))
}
