use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::{Field, Kind, WireShape};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Student,
    Parent,
    Admin,
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            UserType::Student => "student",
            UserType::Parent => "parent",
            UserType::Admin => "admin",
        };
        write!(f, "{s}")
    }
}

/// DB row struct — user_type is stored as TEXT; inserts type it through
/// [`UserType`] so an unknown value never reaches the store.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub user_type: String,
    pub created_at: DateTime<Utc>,
}

/// Fields a client may supply when registering a user.
/// `id` and `createdAt` are server-assigned.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InsertUser {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub last_name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub password: String,
    pub user_type: UserType,
}

impl WireShape for InsertUser {
    const FIELDS: &'static [Field] = &[
        Field::required("firstName", Kind::Text),
        Field::required("lastName", Kind::Text),
        Field::required("email", Kind::Text),
        Field::required("password", Kind::Text),
        Field::required("userType", Kind::Text),
    ];
}
