use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use super::{invalid_body, not_found, storage_error};
use crate::{
    models::{course::InsertCourse, parse_insert},
    AppState,
};

pub async fn list_courses(
    State(state): State<AppState>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let courses = state
        .storage
        .list_courses()
        .await
        .map_err(|e| storage_error("Failed to fetch courses", e))?;
    Ok(Json(json!({ "courses": courses })))
}

pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let course = state
        .storage
        .get_course(id)
        .await
        .map_err(|e| storage_error("Failed to fetch course", e))?
        .ok_or_else(|| not_found("Course not found"))?;
    Ok(Json(json!({ "course": course })))
}

/// Back-office endpoint for extending the catalog.
pub async fn create_course(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let insert = parse_insert::<InsertCourse>(body).map_err(invalid_body)?;
    let course = state
        .storage
        .create_course(insert)
        .await
        .map_err(|e| storage_error("Failed to create course", e))?;
    Ok((StatusCode::CREATED, Json(json!({ "course": course }))))
}
