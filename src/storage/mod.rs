pub mod memory;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::admission::{AdmissionApplication, InsertAdmissionApplication};
use crate::models::blog::{BlogPost, InsertBlogPost};
use crate::models::course::{Course, InsertCourse};
use crate::models::enrollment::{Enrollment, InsertEnrollment};
use crate::models::inquiry::{InsertInquiry, Inquiry};
use crate::models::parent::{InsertParent, Parent};
use crate::models::student::{InsertStudent, Student};
use crate::models::user::{InsertUser, User};

pub use memory::MemStorage;
pub use postgres::PgStorage;

/// Failures surfaced by a storage backend. A lookup that finds nothing is not
/// a failure; it comes back as `Ok(None)`.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A uniqueness or referential-integrity rule was broken at write time.
    /// Only the database backend raises this; the in-memory store does not
    /// enforce those rules (a known asymmetry, see [`MemStorage`]).
    #[error("{0}")]
    Constraint(String),
    /// The backing store itself failed.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Shared handle the routes hold. One backend instance per process, chosen at
/// startup from the environment.
pub type DynStorage = Arc<dyn Storage>;

/// Persistence contract for the eight entity tables. Both backends satisfy it
/// identically from the caller's side: every `create_*` assigns the id and the
/// server-owned defaults and returns the complete stored row, and ids are
/// per-entity, starting at 1 and never reused.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Liveness probe for the health endpoint.
    async fn ping(&self) -> StorageResult<()>;

    // Users
    async fn create_user(&self, insert: InsertUser) -> StorageResult<User>;
    async fn get_user(&self, id: i32) -> StorageResult<Option<User>>;
    async fn get_user_by_email(&self, email: &str) -> StorageResult<Option<User>>;

    // Students
    async fn create_student(&self, insert: InsertStudent) -> StorageResult<Student>;
    async fn get_student(&self, id: i32) -> StorageResult<Option<Student>>;
    async fn get_student_by_user(&self, user_id: i32) -> StorageResult<Option<Student>>;

    // Parents
    async fn create_parent(&self, insert: InsertParent) -> StorageResult<Parent>;
    async fn get_parent(&self, id: i32) -> StorageResult<Option<Parent>>;
    async fn get_parent_by_user(&self, user_id: i32) -> StorageResult<Option<Parent>>;

    // Courses
    async fn create_course(&self, insert: InsertCourse) -> StorageResult<Course>;
    async fn get_course(&self, id: i32) -> StorageResult<Option<Course>>;
    async fn list_courses(&self) -> StorageResult<Vec<Course>>;

    // Enrollments
    async fn create_enrollment(&self, insert: InsertEnrollment) -> StorageResult<Enrollment>;
    async fn get_enrollment(&self, id: i32) -> StorageResult<Option<Enrollment>>;
    async fn list_enrollments_by_student(&self, student_id: i32)
        -> StorageResult<Vec<Enrollment>>;
    async fn list_enrollments_by_course(&self, course_id: i32) -> StorageResult<Vec<Enrollment>>;

    // Contact inquiries
    async fn create_inquiry(&self, insert: InsertInquiry) -> StorageResult<Inquiry>;
    async fn get_inquiry(&self, id: i32) -> StorageResult<Option<Inquiry>>;
    async fn list_inquiries(&self) -> StorageResult<Vec<Inquiry>>;

    // Admission applications
    async fn create_admission_application(
        &self,
        insert: InsertAdmissionApplication,
    ) -> StorageResult<AdmissionApplication>;
    async fn get_admission_application(
        &self,
        id: i32,
    ) -> StorageResult<Option<AdmissionApplication>>;
    async fn list_admission_applications(&self) -> StorageResult<Vec<AdmissionApplication>>;

    // Blog posts
    async fn create_blog_post(&self, insert: InsertBlogPost) -> StorageResult<BlogPost>;
    async fn get_blog_post(&self, id: i32) -> StorageResult<Option<BlogPost>>;
    async fn get_blog_post_by_slug(&self, slug: &str) -> StorageResult<Option<BlogPost>>;
    /// Public listing. Drafts (`is_published = false`) are excluded; fetching
    /// a draft by id or slug still works.
    async fn list_published_blog_posts(&self) -> StorageResult<Vec<BlogPost>>;
}
