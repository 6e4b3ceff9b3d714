use axum::{http::StatusCode, Json};
use serde::Deserialize;
use serde_json::{json, Value};

/// Login payload. Every field lands as `Option` so absence and emptiness get
/// reported with the single message the portal expects.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub user_type: Option<String>,
}

/// Demo login. No credential store is wired up yet, so any non-empty
/// email/password/userType combination is accepted and answered with a canned
/// portal profile.
pub async fn login(
    Json(payload): Json<LoginRequest>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let filled = |field: &Option<String>| field.as_deref().is_some_and(|s| !s.is_empty());
    if !filled(&payload.email) || !filled(&payload.password) || !filled(&payload.user_type) {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Email, password, and user type are required" })),
        ));
    }

    let user_type = payload.user_type.unwrap_or_default();
    let name = if user_type == "student" { "Rohit Sharma" } else { "Prakash Sharma" };

    Ok(Json(json!({
        "success": true,
        "message": "Login successful",
        "user": {
            "id": 1,
            "email": payload.email,
            "userType": user_type,
            "name": name,
        }
    })))
}
