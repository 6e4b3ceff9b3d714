use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::{Field, Kind, WireShape};

/// A catalog entry. `category` is a comma-joined tag list ("primary,secondary",
/// "competitive", "skills") and `price` a pre-formatted display string — both
/// are consumed verbatim by the course cards on the site.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub duration: String,
    pub audience: String,
    pub price: String,
    pub is_popular: bool,
    pub is_new: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InsertCourse {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub description: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub category: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub duration: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub audience: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub price: String,
    /// Defaults to false when omitted.
    pub is_popular: Option<bool>,
    /// Defaults to false when omitted.
    pub is_new: Option<bool>,
}

impl WireShape for InsertCourse {
    const FIELDS: &'static [Field] = &[
        Field::required("title", Kind::Text),
        Field::required("description", Kind::Text),
        Field::required("category", Kind::Text),
        Field::required("duration", Kind::Text),
        Field::required("audience", Kind::Text),
        Field::required("price", Kind::Text),
        Field::optional("isPopular", Kind::Bool),
        Field::optional("isNew", Kind::Bool),
    ];
}
