use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::{Field, Kind, WireShape};

/// A blog article. `slug` is the unique URL segment; drafts carry
/// `is_published = false` and are excluded from the public listing.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub content: String,
    pub category: String,
    pub slug: String,
    pub publish_date: NaiveDate,
    pub is_published: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InsertBlogPost {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub description: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub content: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub category: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub slug: String,
    pub publish_date: NaiveDate,
    /// Defaults to true when omitted.
    pub is_published: Option<bool>,
}

impl WireShape for InsertBlogPost {
    const FIELDS: &'static [Field] = &[
        Field::required("title", Kind::Text),
        Field::required("description", Kind::Text),
        Field::required("content", Kind::Text),
        Field::required("category", Kind::Text),
        Field::required("slug", Kind::Text),
        Field::required("publishDate", Kind::Date),
        Field::optional("isPublished", Kind::Bool),
    ];
}
