use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::{Field, Kind, WireShape};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    Active,
    Completed,
    Pending,
}

impl std::fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EnrollmentStatus::Active => "active",
            EnrollmentStatus::Completed => "completed",
            EnrollmentStatus::Pending => "pending",
        };
        write!(f, "{s}")
    }
}

/// Links one student to one course. Referential integrity is the database's
/// job — the in-memory store accepts dangling ids (see storage docs).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id: i32,
    pub student_id: i32,
    pub course_id: i32,
    pub enrollment_date: NaiveDate,
    pub status: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InsertEnrollment {
    pub student_id: i32,
    pub course_id: i32,
    pub enrollment_date: NaiveDate,
    pub status: EnrollmentStatus,
}

impl WireShape for InsertEnrollment {
    const FIELDS: &'static [Field] = &[
        Field::required("studentId", Kind::Int),
        Field::required("courseId", Kind::Int),
        Field::required("enrollmentDate", Kind::Date),
        Field::required("status", Kind::Text),
    ];
}

#[cfg(test)]
mod tests {
    use super::EnrollmentStatus;

    // The store persists Display output into the status column, so it must
    // agree with the wire form serde accepts.
    #[test]
    fn display_matches_wire_form() {
        for (status, wire) in [
            (EnrollmentStatus::Active, "active"),
            (EnrollmentStatus::Completed, "completed"),
            (EnrollmentStatus::Pending, "pending"),
        ] {
            assert_eq!(status.to_string(), wire);
            let parsed: EnrollmentStatus =
                serde_json::from_value(serde_json::json!(wire)).unwrap();
            assert_eq!(parsed, status);
        }
    }
}
