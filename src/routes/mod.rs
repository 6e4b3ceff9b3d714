pub mod admissions;
pub mod auth;
pub mod blog;
pub mod courses;
pub mod enrollments;
pub mod health;
pub mod inquiries;
pub mod parents;
pub mod students;
pub mod users;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::models::ValidationError;
use crate::storage::StorageError;
use crate::AppState;

/// Build the `/api` router. Middleware layers (tracing, CORS) are applied by
/// the caller; tests drive this router directly over an in-memory store.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_check))
        // Portal login (demo)
        .route("/api/login", post(auth::login))
        // Users
        .route("/api/users", post(users::create_user))
        .route("/api/users/{id}", get(users::get_user))
        // Students
        .route("/api/students", post(students::create_student))
        .route("/api/students/{id}", get(students::get_student))
        .route("/api/students/by-user/{user_id}", get(students::get_student_by_user))
        .route("/api/students/{id}/enrollments", get(enrollments::list_by_student))
        // Parents
        .route("/api/parents", post(parents::create_parent))
        .route("/api/parents/{id}", get(parents::get_parent))
        .route("/api/parents/by-user/{user_id}", get(parents::get_parent_by_user))
        // Courses
        .route("/api/courses", get(courses::list_courses).post(courses::create_course))
        .route("/api/courses/{id}", get(courses::get_course))
        .route("/api/courses/{id}/enrollments", get(enrollments::list_by_course))
        // Enrollments
        .route("/api/enrollments", post(enrollments::create_enrollment))
        .route("/api/enrollments/{id}", get(enrollments::get_enrollment))
        // Contact inquiries
        .route("/api/inquiries", get(inquiries::list_inquiries).post(inquiries::create_inquiry))
        .route("/api/inquiries/{id}", get(inquiries::get_inquiry))
        // Admission applications
        .route(
            "/api/admission-applications",
            get(admissions::list_applications).post(admissions::create_application),
        )
        .route("/api/admission-applications/{id}", get(admissions::get_application))
        // Blog
        .route("/api/blog-posts", get(blog::list_blog_posts).post(blog::create_blog_post))
        .route("/api/blog-posts/{id}", get(blog::get_blog_post))
        .route("/api/blog-posts/slug/{slug}", get(blog::get_blog_post_by_slug))
        .with_state(state)
}

pub(crate) fn invalid_body(e: ValidationError) -> (StatusCode, Json<Value>) {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() })))
}

pub(crate) fn not_found(message: &str) -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "error": message })))
}

/// Constraint breaks answer 409 with the database's message. Anything else is
/// logged and answered with the endpoint's generic label, keeping connection
/// strings and SQL off the wire.
pub(crate) fn storage_error(label: &str, e: StorageError) -> (StatusCode, Json<Value>) {
    match e {
        StorageError::Constraint(message) => {
            (StatusCode::CONFLICT, Json(json!({ "error": message })))
        }
        StorageError::Database(e) => {
            tracing::error!("{label}: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": label })))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::api_router;
    use crate::storage::MemStorage;
    use crate::AppState;

    fn test_router() -> Router {
        api_router(AppState { storage: Arc::new(MemStorage::new()) })
    }

    fn seeded_router() -> Router {
        api_router(AppState { storage: Arc::new(MemStorage::with_sample_data()) })
    }

    async fn send(
        router: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let request = match body {
            Some(value) => Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(value.to_string()))
                .unwrap(),
            None => Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        };

        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
        send(router, Method::GET, uri, None).await
    }

    async fn post(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
        send(router, Method::POST, uri, Some(body)).await
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let router = test_router();
        let (status, body) = get(&router, "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn user_create_and_fetch() {
        let router = test_router();

        let (status, body) = post(
            &router,
            "/api/users",
            json!({
                "firstName": "Rohit",
                "lastName": "Sharma",
                "email": "rohit@example.com",
                "password": "secret123",
                "userType": "student"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["user"]["id"], 1);
        assert_eq!(body["user"]["firstName"], "Rohit");
        assert_eq!(body["user"]["userType"], "student");
        assert!(body["user"]["createdAt"].is_string());

        let (status, body) = get(&router, "/api/users/1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user"]["email"], "rohit@example.com");
    }

    #[tokio::test]
    async fn user_create_names_every_missing_field() {
        let router = test_router();

        let (status, body) = post(
            &router,
            "/api/users",
            json!({
                "email": "rohit@example.com",
                "password": "secret123",
                "userType": "student"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let message = body["error"].as_str().unwrap();
        assert!(message.contains("firstName"), "unexpected message: {message}");
        assert!(message.contains("lastName"), "unexpected message: {message}");
    }

    #[tokio::test]
    async fn user_fetch_missing_is_404() {
        let router = test_router();
        let (status, body) = get(&router, "/api/users/42").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "User not found");
    }

    #[tokio::test]
    async fn user_fetch_rejects_non_numeric_id() {
        let router = test_router();
        let (status, _) = get(&router, "/api/users/abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn login_requires_all_fields() {
        let router = test_router();

        let (status, body) = post(
            &router,
            "/api/login",
            json!({ "email": "rohit@example.com", "password": "secret123" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Email, password, and user type are required");

        let (status, _) = post(
            &router,
            "/api/login",
            json!({ "email": "", "password": "secret123", "userType": "student" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn login_answers_with_demo_profile() {
        let router = test_router();

        let (status, body) = post(
            &router,
            "/api/login",
            json!({ "email": "rohit@example.com", "password": "pw", "userType": "student" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Login successful");
        assert_eq!(body["user"]["name"], "Rohit Sharma");

        let (_, body) = post(
            &router,
            "/api/login",
            json!({ "email": "p@example.com", "password": "pw", "userType": "parent" }),
        )
        .await;
        assert_eq!(body["user"]["name"], "Prakash Sharma");
    }

    #[tokio::test]
    async fn course_catalog_lists_seeded_entries() {
        let router = seeded_router();

        let (status, body) = get(&router, "/api/courses").await;
        assert_eq!(status, StatusCode::OK);
        let courses = body["courses"].as_array().unwrap();
        assert_eq!(courses.len(), 3);
        assert_eq!(courses[0]["title"], "Advanced Mathematics");
        assert_eq!(courses[0]["isPopular"], true);
        assert_eq!(courses[2]["price"], "₹45,000");

        let (status, body) = get(&router, "/api/courses/2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["course"]["title"], "Integrated Science Program");

        let (status, body) = get(&router, "/api/courses/99").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Course not found");
    }

    #[tokio::test]
    async fn course_create_applies_flag_defaults() {
        let router = test_router();

        let (status, body) = post(
            &router,
            "/api/courses",
            json!({
                "title": "Mathematics",
                "description": "Algebra and geometry",
                "category": "primary",
                "duration": "12 weeks",
                "audience": "Grades 6-8",
                "price": "₹9,000"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["course"]["id"], 1);
        assert_eq!(body["course"]["isPopular"], false);
        assert_eq!(body["course"]["isNew"], false);
    }

    #[tokio::test]
    async fn inquiry_create_sets_server_fields() {
        let router = test_router();

        let (status, body) = post(
            &router,
            "/api/inquiries",
            json!({
                "name": "Anita Desai",
                "email": "anita@example.com",
                "subject": "Batch timings",
                "message": "When does the next batch start?"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["inquiry"]["isResolved"], false);
        assert_eq!(body["inquiry"]["phone"], Value::Null);
        assert!(body["inquiry"]["createdAt"].is_string());

        let (status, body) = post(
            &router,
            "/api/inquiries",
            json!({
                "name": "Anita Desai",
                "email": "not-an-email",
                "subject": "Hi",
                "message": "Hello"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("email"));
    }

    #[tokio::test]
    async fn admission_application_starts_pending() {
        let router = test_router();

        let (status, body) = post(
            &router,
            "/api/admission-applications",
            json!({
                "firstName": "Kavya",
                "lastName": "Iyer",
                "email": "kavya@example.com",
                "phone": "+91 98765 43210",
                "address": "12 MG Road, Pune",
                "studentGrade": "Grade 9",
                "interestedCourse": "Advanced Mathematics",
                "previousSchool": "St. Mary's High School",
                "parentName": "Suresh Iyer",
                "parentRelation": "father"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["application"]["status"], "pending");

        let (status, body) = get(&router, "/api/admission-applications").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["applications"].as_array().unwrap().len(), 1);

        // A rejected submission must not leave a row behind.
        let (status, _) = post(
            &router,
            "/api/admission-applications",
            json!({ "lastName": "Iyer", "email": "kavya@example.com" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, body) = get(&router, "/api/admission-applications").await;
        assert_eq!(body["applications"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn blog_listing_hides_drafts_but_direct_reads_work() {
        let router = test_router();

        let (status, _) = post(
            &router,
            "/api/blog-posts",
            json!({
                "title": "Board Exam Tips",
                "description": "How to plan the final three months.",
                "content": "Start with a subject-wise timetable...",
                "category": "Exam Preparation",
                "slug": "board-exam-tips",
                "publishDate": "2024-11-05"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = post(
            &router,
            "/api/blog-posts",
            json!({
                "title": "Draft Notes",
                "description": "Not ready yet.",
                "content": "...",
                "category": "News",
                "slug": "draft-notes",
                "publishDate": "2024-12-01",
                "isPublished": false
            }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let draft_id = body["blogPost"]["id"].as_i64().unwrap();

        let (_, body) = get(&router, "/api/blog-posts").await;
        let posts = body["blogPosts"].as_array().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0]["slug"], "board-exam-tips");

        let (status, body) = get(&router, &format!("/api/blog-posts/{draft_id}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["blogPost"]["isPublished"], false);

        let (status, body) = get(&router, "/api/blog-posts/slug/board-exam-tips").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["blogPost"]["title"], "Board Exam Tips");

        let (status, body) = get(&router, "/api/blog-posts/slug/missing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Blog post not found");
    }

    #[tokio::test]
    async fn enrollments_create_and_filter() {
        let router = test_router();

        let (status, body) = post(
            &router,
            "/api/enrollments",
            json!({
                "studentId": 5,
                "courseId": 2,
                "enrollmentDate": "2024-07-15",
                "status": "active"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["enrollment"]["status"], "active");

        let (status, body) = get(&router, "/api/students/5/enrollments").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["enrollments"].as_array().unwrap().len(), 1);

        let (_, body) = get(&router, "/api/courses/2/enrollments").await;
        assert_eq!(body["enrollments"].as_array().unwrap().len(), 1);

        let (_, body) = get(&router, "/api/students/6/enrollments").await;
        assert!(body["enrollments"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn enrollment_rejects_unknown_status() {
        let router = test_router();

        let (status, _) = post(
            &router,
            "/api/enrollments",
            json!({
                "studentId": 1,
                "courseId": 1,
                "enrollmentDate": "2024-07-15",
                "status": "paused"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn student_profile_lookup_by_user() {
        let router = test_router();

        let (status, _) = post(
            &router,
            "/api/students",
            json!({
                "userId": 3,
                "grade": "Grade 10",
                "enrollmentDate": "2024-06-01"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = get(&router, "/api/students/by-user/3").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["student"]["grade"], "Grade 10");
        assert_eq!(body["student"]["parentId"], Value::Null);

        let (status, body) = get(&router, "/api/students/by-user/4").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Student not found");
    }

    #[tokio::test]
    async fn parent_create_validates_relation() {
        let router = test_router();

        let (status, body) = post(
            &router,
            "/api/parents",
            json!({ "userId": 2, "relation": "mother" }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["parent"]["relation"], "mother");

        let (status, _) = post(
            &router,
            "/api/parents",
            json!({ "userId": 2, "relation": "uncle" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let router = test_router();
        let (status, _) = get(&router, "/api/does-not-exist").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
