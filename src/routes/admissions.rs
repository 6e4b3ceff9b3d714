use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use super::{invalid_body, not_found, storage_error};
use crate::{
    models::{admission::InsertAdmissionApplication, parse_insert},
    AppState,
};

pub async fn create_application(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let insert = parse_insert::<InsertAdmissionApplication>(body).map_err(invalid_body)?;
    let application = state
        .storage
        .create_admission_application(insert)
        .await
        .map_err(|e| storage_error("Failed to submit admission application", e))?;
    Ok((StatusCode::CREATED, Json(json!({ "application": application }))))
}

pub async fn get_application(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let application = state
        .storage
        .get_admission_application(id)
        .await
        .map_err(|e| storage_error("Failed to fetch admission application", e))?
        .ok_or_else(|| not_found("Admission application not found"))?;
    Ok(Json(json!({ "application": application })))
}

pub async fn list_applications(
    State(state): State<AppState>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let applications = state
        .storage
        .list_admission_applications()
        .await
        .map_err(|e| storage_error("Failed to fetch admission applications", e))?;
    Ok(Json(json!({ "applications": applications })))
}
