use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use super::{invalid_body, not_found, storage_error};
use crate::{
    models::{parse_insert, student::InsertStudent},
    AppState,
};

pub async fn create_student(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let insert = parse_insert::<InsertStudent>(body).map_err(invalid_body)?;
    let student = state
        .storage
        .create_student(insert)
        .await
        .map_err(|e| storage_error("Failed to create student", e))?;
    Ok((StatusCode::CREATED, Json(json!({ "student": student }))))
}

pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let student = state
        .storage
        .get_student(id)
        .await
        .map_err(|e| storage_error("Failed to fetch student", e))?
        .ok_or_else(|| not_found("Student not found"))?;
    Ok(Json(json!({ "student": student })))
}

pub async fn get_student_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let student = state
        .storage
        .get_student_by_user(user_id)
        .await
        .map_err(|e| storage_error("Failed to fetch student", e))?
        .ok_or_else(|| not_found("Student not found"))?;
    Ok(Json(json!({ "student": student })))
}
