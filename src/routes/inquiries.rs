use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use super::{invalid_body, not_found, storage_error};
use crate::{
    models::{inquiry::InsertInquiry, parse_insert},
    AppState,
};

/// Contact-form submissions from the public site.
pub async fn create_inquiry(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let insert = parse_insert::<InsertInquiry>(body).map_err(invalid_body)?;
    let inquiry = state
        .storage
        .create_inquiry(insert)
        .await
        .map_err(|e| storage_error("Failed to submit inquiry", e))?;
    Ok((StatusCode::CREATED, Json(json!({ "inquiry": inquiry }))))
}

pub async fn get_inquiry(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let inquiry = state
        .storage
        .get_inquiry(id)
        .await
        .map_err(|e| storage_error("Failed to fetch inquiry", e))?
        .ok_or_else(|| not_found("Inquiry not found"))?;
    Ok(Json(json!({ "inquiry": inquiry })))
}

pub async fn list_inquiries(
    State(state): State<AppState>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let inquiries = state
        .storage
        .list_inquiries()
        .await
        .map_err(|e| storage_error("Failed to fetch inquiries", e))?;
    Ok(Json(json!({ "inquiries": inquiries })))
}
