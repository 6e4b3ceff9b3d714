use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use super::{invalid_body, not_found, storage_error};
use crate::{
    models::{parse_insert, user::InsertUser},
    AppState,
};

pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let insert = parse_insert::<InsertUser>(body).map_err(invalid_body)?;
    let user = state
        .storage
        .create_user(insert)
        .await
        .map_err(|e| storage_error("Failed to create user", e))?;
    Ok((StatusCode::CREATED, Json(json!({ "user": user }))))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let user = state
        .storage
        .get_user(id)
        .await
        .map_err(|e| storage_error("Failed to fetch user", e))?
        .ok_or_else(|| not_found("User not found"))?;
    Ok(Json(json!({ "user": user })))
}
