use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use super::{invalid_body, not_found, storage_error};
use crate::{
    models::{enrollment::InsertEnrollment, parse_insert},
    AppState,
};

pub async fn create_enrollment(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let insert = parse_insert::<InsertEnrollment>(body).map_err(invalid_body)?;
    let enrollment = state
        .storage
        .create_enrollment(insert)
        .await
        .map_err(|e| storage_error("Failed to create enrollment", e))?;
    Ok((StatusCode::CREATED, Json(json!({ "enrollment": enrollment }))))
}

pub async fn get_enrollment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let enrollment = state
        .storage
        .get_enrollment(id)
        .await
        .map_err(|e| storage_error("Failed to fetch enrollment", e))?
        .ok_or_else(|| not_found("Enrollment not found"))?;
    Ok(Json(json!({ "enrollment": enrollment })))
}

pub async fn list_by_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let enrollments = state
        .storage
        .list_enrollments_by_student(id)
        .await
        .map_err(|e| storage_error("Failed to fetch enrollments", e))?;
    Ok(Json(json!({ "enrollments": enrollments })))
}

pub async fn list_by_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let enrollments = state
        .storage
        .list_enrollments_by_course(id)
        .await
        .map_err(|e| storage_error("Failed to fetch enrollments", e))?;
    Ok(Json(json!({ "enrollments": enrollments })))
}
