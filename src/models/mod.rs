pub mod admission;
pub mod blog;
pub mod course;
pub mod enrollment;
pub mod inquiry;
pub mod parent;
pub mod student;
pub mod user;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use validator::Validate;

/// Input failed shape or constraint checks before reaching the store.
/// Carries one aggregated human-readable message.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

/// One key of an insert payload as the wire sees it.
pub struct Field {
    name: &'static str,
    kind: Kind,
    required: bool,
}

impl Field {
    pub const fn required(name: &'static str, kind: Kind) -> Self {
        Field { name, kind, required: true }
    }

    pub const fn optional(name: &'static str, kind: Kind) -> Self {
        Field { name, kind, required: false }
    }
}

/// JSON kind a field accepts. Dates and discriminators travel as strings;
/// discriminator values are checked by serde, not here.
pub enum Kind {
    Text,
    Int,
    Bool,
    Date,
}

impl Kind {
    fn admits(&self, value: &Value) -> bool {
        match self {
            Kind::Text => value.is_string(),
            Kind::Int => value.as_i64().is_some_and(|n| i32::try_from(n).is_ok()),
            Kind::Bool => value.is_boolean(),
            Kind::Date => value.as_str().is_some_and(|s| s.parse::<NaiveDate>().is_ok()),
        }
    }

    fn expectation(&self) -> &'static str {
        match self {
            Kind::Text => "must be a string",
            Kind::Int => "must be an integer",
            Kind::Bool => "must be a boolean",
            Kind::Date => "must be a date in YYYY-MM-DD form",
        }
    }
}

/// Declared wire keys of an insert payload. The shape pass reports every
/// missing or mistyped key in one message.
pub trait WireShape {
    const FIELDS: &'static [Field];
}

/// Parse an untyped JSON body into a validated insert payload.
///
/// Three stages, all pure: a shape pass over the declared wire keys (every
/// missing or mistyped key is collected into one message), deserialization
/// (residual failures such as an unknown discriminator value keep serde's
/// message naming the allowed values), and field validation (every violation
/// found is folded into one message). Nothing is persisted on any failure.
pub fn parse_insert<T>(value: Value) -> Result<T, ValidationError>
where
    T: DeserializeOwned + Validate + WireShape,
{
    let mut problems: Vec<String> = Vec::new();
    for field in T::FIELDS {
        match value.get(field.name) {
            None | Some(Value::Null) => {
                if field.required {
                    problems.push(format!("{} is required", field.name));
                }
            }
            Some(supplied) if !field.kind.admits(supplied) => {
                problems.push(format!("{} {}", field.name, field.kind.expectation()));
            }
            Some(_) => {}
        }
    }
    if !problems.is_empty() {
        return Err(ValidationError(problems.join("; ")));
    }

    let insert: T = serde_json::from_value(value).map_err(|e| ValidationError(e.to_string()))?;
    insert
        .validate()
        .map_err(|e| ValidationError(flatten_field_errors(&e)))?;
    Ok(insert)
}

/// One line per violation, "field message", joined with "; " in field order.
fn flatten_field_errors(errors: &validator::ValidationErrors) -> String {
    let mut parts: Vec<String> = Vec::new();
    for (field, field_errors) in errors.field_errors() {
        for err in field_errors {
            let detail = err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| err.code.to_string());
            parts.push(format!("{} {}", camel_case(field), detail));
        }
    }
    // field_errors() iterates a HashMap; sort so the message is stable
    parts.sort();
    parts.join("; ")
}

/// The API speaks camelCase but validator reports Rust field idents.
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::admission::InsertAdmissionApplication;
    use super::course::InsertCourse;
    use super::enrollment::InsertEnrollment;
    use super::inquiry::InsertInquiry;
    use super::user::{InsertUser, UserType};
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_field_names_the_camel_case_key() {
        let body = json!({
            "lastName": "Sharma",
            "email": "rohit@example.com",
            "phone": "9876543210",
            "address": "12 MG Road, Nashik",
            "studentGrade": "9",
            "interestedCourse": "Advanced Mathematics",
            "previousSchool": "St. Mary's",
            "parentName": "Prakash Sharma",
            "parentRelation": "father"
        });

        let err = parse_insert::<InsertAdmissionApplication>(body).unwrap_err();
        assert!(err.0.contains("firstName"), "message was: {}", err.0);
    }

    #[test]
    fn missing_fields_are_reported_together() {
        let body = json!({
            "email": "rohit@example.com",
            "password": "secret",
            "userType": "student"
        });

        let err = parse_insert::<InsertUser>(body).unwrap_err();
        assert!(err.0.contains("firstName is required"), "message was: {}", err.0);
        assert!(err.0.contains("lastName is required"), "message was: {}", err.0);
    }

    #[test]
    fn mistyped_fields_are_named_alongside_missing_ones() {
        let body = json!({
            "studentId": "five",
            "courseId": 2,
            "enrollmentDate": "mid-July"
        });

        let err = parse_insert::<InsertEnrollment>(body).unwrap_err();
        assert!(err.0.contains("studentId must be an integer"), "message was: {}", err.0);
        assert!(err.0.contains("enrollmentDate must be a date"), "message was: {}", err.0);
        assert!(err.0.contains("status is required"), "message was: {}", err.0);
    }

    #[test]
    fn null_counts_as_missing() {
        let body = json!({
            "userId": 3,
            "grade": null,
            "enrollmentDate": "2024-06-01"
        });

        let err = parse_insert::<super::student::InsertStudent>(body).unwrap_err();
        assert!(err.0.contains("grade is required"), "message was: {}", err.0);
    }

    #[test]
    fn empty_fields_are_aggregated_into_one_message() {
        let body = json!({
            "title": "",
            "description": "",
            "category": "primary",
            "duration": "16 weeks",
            "audience": "Grades 8-10",
            "price": "₹15,000"
        });

        let err = parse_insert::<InsertCourse>(body).unwrap_err();
        assert!(err.0.contains("title must not be empty"), "message was: {}", err.0);
        assert!(err.0.contains("description must not be empty"), "message was: {}", err.0);
        assert!(err.0.contains("; "), "expected both violations in one message: {}", err.0);
    }

    #[test]
    fn unknown_discriminator_is_rejected() {
        let body = json!({
            "firstName": "Rohit",
            "lastName": "Sharma",
            "email": "rohit@example.com",
            "password": "secret",
            "userType": "teacher"
        });

        let err = parse_insert::<InsertUser>(body).unwrap_err();
        assert!(err.0.contains("userType") || err.0.contains("teacher"), "message was: {}", err.0);
    }

    #[test]
    fn malformed_email_is_rejected() {
        let body = json!({
            "name": "Anita Desai",
            "email": "not-an-address",
            "subject": "Batch timings",
            "message": "Which evening batches have seats open?"
        });

        let err = parse_insert::<InsertInquiry>(body).unwrap_err();
        assert!(err.0.contains("email"), "message was: {}", err.0);
    }

    #[test]
    fn valid_payload_parses() {
        let body = json!({
            "firstName": "Rohit",
            "lastName": "Sharma",
            "email": "rohit@example.com",
            "password": "secret",
            "userType": "student"
        });

        let insert = parse_insert::<InsertUser>(body).unwrap();
        assert_eq!(insert.first_name, "Rohit");
        assert_eq!(insert.user_type, UserType::Student);
    }

    #[test]
    fn optional_fields_may_be_omitted() {
        let body = json!({
            "name": "Anita Desai",
            "email": "anita@example.com",
            "subject": "Fee structure",
            "message": "Please share the fee details for grade 8."
        });

        let insert = parse_insert::<InsertInquiry>(body).unwrap();
        assert_eq!(insert.phone, None);
    }
}
