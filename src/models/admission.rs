use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::{Field, Kind, WireShape};

/// An admission-form submission. `status` starts at "pending" and moves to
/// "approved"/"rejected" by back-office review; the client never sets it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionApplication {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub student_grade: String,
    pub interested_course: String,
    pub previous_school: String,
    pub parent_name: String,
    pub parent_relation: String,
    pub additional_info: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InsertAdmissionApplication {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub last_name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub phone: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub address: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub student_grade: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub interested_course: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub previous_school: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub parent_name: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub parent_relation: String,
    pub additional_info: Option<String>,
}

impl WireShape for InsertAdmissionApplication {
    const FIELDS: &'static [Field] = &[
        Field::required("firstName", Kind::Text),
        Field::required("lastName", Kind::Text),
        Field::required("email", Kind::Text),
        Field::required("phone", Kind::Text),
        Field::required("address", Kind::Text),
        Field::required("studentGrade", Kind::Text),
        Field::required("interestedCourse", Kind::Text),
        Field::required("previousSchool", Kind::Text),
        Field::required("parentName", Kind::Text),
        Field::required("parentRelation", Kind::Text),
        Field::optional("additionalInfo", Kind::Text),
    ];
}
