use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::{Field, Kind, WireShape};

/// A student profile attached to a user account. `parent_id` is optional —
/// portal accounts can exist before a parent record is linked.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i32,
    pub user_id: i32,
    pub grade: String,
    pub enrollment_date: NaiveDate,
    pub parent_id: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InsertStudent {
    pub user_id: i32,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub grade: String,
    pub enrollment_date: NaiveDate,
    pub parent_id: Option<i32>,
}

impl WireShape for InsertStudent {
    const FIELDS: &'static [Field] = &[
        Field::required("userId", Kind::Int),
        Field::required("grade", Kind::Text),
        Field::required("enrollmentDate", Kind::Date),
        Field::optional("parentId", Kind::Int),
    ];
}
