use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::{Field, Kind, WireShape};

/// A contact-form submission. `createdAt` and `isResolved` are server-assigned
/// and never accepted from the client.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub is_resolved: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InsertInquiry {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    pub phone: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub subject: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub message: String,
}

impl WireShape for InsertInquiry {
    const FIELDS: &'static [Field] = &[
        Field::required("name", Kind::Text),
        Field::required("email", Kind::Text),
        Field::optional("phone", Kind::Text),
        Field::required("subject", Kind::Text),
        Field::required("message", Kind::Text),
    ];
}
