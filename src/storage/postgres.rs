use async_trait::async_trait;
use sqlx::error::ErrorKind;
use sqlx::PgPool;

use super::{Storage, StorageError, StorageResult};
use crate::models::admission::{AdmissionApplication, InsertAdmissionApplication};
use crate::models::blog::{BlogPost, InsertBlogPost};
use crate::models::course::{Course, InsertCourse};
use crate::models::enrollment::{Enrollment, InsertEnrollment};
use crate::models::inquiry::{InsertInquiry, Inquiry};
use crate::models::parent::{InsertParent, Parent};
use crate::models::student::{InsertStudent, Student};
use crate::models::user::{InsertUser, User};

/// Database backend over the shared connection pool. Ids come from the
/// `SERIAL` sequences and uniqueness plus foreign keys are enforced by the
/// schema, so violations surface as [`StorageError::Constraint`].
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Unique and foreign-key breaks carry a caller-usable message; everything
// else stays a plain database error.
fn map_write_error(e: sqlx::Error) -> StorageError {
    if let sqlx::Error::Database(db_err) = &e {
        if matches!(db_err.kind(), ErrorKind::UniqueViolation | ErrorKind::ForeignKeyViolation) {
            return StorageError::Constraint(db_err.message().to_string());
        }
    }
    StorageError::Database(e)
}

#[async_trait]
impl Storage for PgStorage {
    async fn ping(&self) -> StorageResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn create_user(&self, insert: InsertUser) -> StorageResult<User> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (first_name, last_name, email, password, user_type)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *",
        )
        .bind(&insert.first_name)
        .bind(&insert.last_name)
        .bind(&insert.email)
        .bind(&insert.password)
        .bind(insert.user_type.to_string())
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;
        Ok(user)
    }

    async fn get_user(&self, id: i32) -> StorageResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn get_user_by_email(&self, email: &str) -> StorageResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn create_student(&self, insert: InsertStudent) -> StorageResult<Student> {
        let student = sqlx::query_as::<_, Student>(
            "INSERT INTO students (user_id, grade, enrollment_date, parent_id)
             VALUES ($1, $2, $3, $4)
             RETURNING *",
        )
        .bind(insert.user_id)
        .bind(&insert.grade)
        .bind(insert.enrollment_date)
        .bind(insert.parent_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;
        Ok(student)
    }

    async fn get_student(&self, id: i32) -> StorageResult<Option<Student>> {
        let student = sqlx::query_as::<_, Student>("SELECT * FROM students WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(student)
    }

    async fn get_student_by_user(&self, user_id: i32) -> StorageResult<Option<Student>> {
        let student = sqlx::query_as::<_, Student>("SELECT * FROM students WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(student)
    }

    async fn create_parent(&self, insert: InsertParent) -> StorageResult<Parent> {
        let parent = sqlx::query_as::<_, Parent>(
            "INSERT INTO parents (user_id, relation)
             VALUES ($1, $2)
             RETURNING *",
        )
        .bind(insert.user_id)
        .bind(insert.relation.to_string())
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;
        Ok(parent)
    }

    async fn get_parent(&self, id: i32) -> StorageResult<Option<Parent>> {
        let parent = sqlx::query_as::<_, Parent>("SELECT * FROM parents WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(parent)
    }

    async fn get_parent_by_user(&self, user_id: i32) -> StorageResult<Option<Parent>> {
        let parent = sqlx::query_as::<_, Parent>("SELECT * FROM parents WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(parent)
    }

    async fn create_course(&self, insert: InsertCourse) -> StorageResult<Course> {
        let course = sqlx::query_as::<_, Course>(
            "INSERT INTO courses (title, description, category, duration, audience, price,
                                  is_popular, is_new)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING *",
        )
        .bind(&insert.title)
        .bind(&insert.description)
        .bind(&insert.category)
        .bind(&insert.duration)
        .bind(&insert.audience)
        .bind(&insert.price)
        .bind(insert.is_popular.unwrap_or(false))
        .bind(insert.is_new.unwrap_or(false))
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;
        Ok(course)
    }

    async fn get_course(&self, id: i32) -> StorageResult<Option<Course>> {
        let course = sqlx::query_as::<_, Course>("SELECT * FROM courses WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(course)
    }

    async fn list_courses(&self) -> StorageResult<Vec<Course>> {
        let courses = sqlx::query_as::<_, Course>("SELECT * FROM courses ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(courses)
    }

    async fn create_enrollment(&self, insert: InsertEnrollment) -> StorageResult<Enrollment> {
        let enrollment = sqlx::query_as::<_, Enrollment>(
            "INSERT INTO enrollments (student_id, course_id, enrollment_date, status)
             VALUES ($1, $2, $3, $4)
             RETURNING *",
        )
        .bind(insert.student_id)
        .bind(insert.course_id)
        .bind(insert.enrollment_date)
        .bind(insert.status.to_string())
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;
        Ok(enrollment)
    }

    async fn get_enrollment(&self, id: i32) -> StorageResult<Option<Enrollment>> {
        let enrollment = sqlx::query_as::<_, Enrollment>("SELECT * FROM enrollments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(enrollment)
    }

    async fn list_enrollments_by_student(
        &self,
        student_id: i32,
    ) -> StorageResult<Vec<Enrollment>> {
        let enrollments = sqlx::query_as::<_, Enrollment>(
            "SELECT * FROM enrollments WHERE student_id = $1 ORDER BY id",
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(enrollments)
    }

    async fn list_enrollments_by_course(&self, course_id: i32) -> StorageResult<Vec<Enrollment>> {
        let enrollments = sqlx::query_as::<_, Enrollment>(
            "SELECT * FROM enrollments WHERE course_id = $1 ORDER BY id",
        )
        .bind(course_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(enrollments)
    }

    async fn create_inquiry(&self, insert: InsertInquiry) -> StorageResult<Inquiry> {
        let inquiry = sqlx::query_as::<_, Inquiry>(
            "INSERT INTO inquiries (name, email, phone, subject, message)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *",
        )
        .bind(&insert.name)
        .bind(&insert.email)
        .bind(&insert.phone)
        .bind(&insert.subject)
        .bind(&insert.message)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;
        Ok(inquiry)
    }

    async fn get_inquiry(&self, id: i32) -> StorageResult<Option<Inquiry>> {
        let inquiry = sqlx::query_as::<_, Inquiry>("SELECT * FROM inquiries WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(inquiry)
    }

    async fn list_inquiries(&self) -> StorageResult<Vec<Inquiry>> {
        let inquiries = sqlx::query_as::<_, Inquiry>("SELECT * FROM inquiries ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(inquiries)
    }

    async fn create_admission_application(
        &self,
        insert: InsertAdmissionApplication,
    ) -> StorageResult<AdmissionApplication> {
        let application = sqlx::query_as::<_, AdmissionApplication>(
            "INSERT INTO admission_applications
                 (first_name, last_name, email, phone, address, student_grade,
                  interested_course, previous_school, parent_name, parent_relation,
                  additional_info)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING *",
        )
        .bind(&insert.first_name)
        .bind(&insert.last_name)
        .bind(&insert.email)
        .bind(&insert.phone)
        .bind(&insert.address)
        .bind(&insert.student_grade)
        .bind(&insert.interested_course)
        .bind(&insert.previous_school)
        .bind(&insert.parent_name)
        .bind(&insert.parent_relation)
        .bind(&insert.additional_info)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;
        Ok(application)
    }

    async fn get_admission_application(
        &self,
        id: i32,
    ) -> StorageResult<Option<AdmissionApplication>> {
        let application = sqlx::query_as::<_, AdmissionApplication>(
            "SELECT * FROM admission_applications WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(application)
    }

    async fn list_admission_applications(&self) -> StorageResult<Vec<AdmissionApplication>> {
        let applications = sqlx::query_as::<_, AdmissionApplication>(
            "SELECT * FROM admission_applications ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(applications)
    }

    async fn create_blog_post(&self, insert: InsertBlogPost) -> StorageResult<BlogPost> {
        let post = sqlx::query_as::<_, BlogPost>(
            "INSERT INTO blog_posts (title, description, content, category, slug,
                                     publish_date, is_published)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING *",
        )
        .bind(&insert.title)
        .bind(&insert.description)
        .bind(&insert.content)
        .bind(&insert.category)
        .bind(&insert.slug)
        .bind(insert.publish_date)
        .bind(insert.is_published.unwrap_or(true))
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;
        Ok(post)
    }

    async fn get_blog_post(&self, id: i32) -> StorageResult<Option<BlogPost>> {
        let post = sqlx::query_as::<_, BlogPost>("SELECT * FROM blog_posts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(post)
    }

    async fn get_blog_post_by_slug(&self, slug: &str) -> StorageResult<Option<BlogPost>> {
        let post = sqlx::query_as::<_, BlogPost>("SELECT * FROM blog_posts WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;
        Ok(post)
    }

    async fn list_published_blog_posts(&self) -> StorageResult<Vec<BlogPost>> {
        let posts = sqlx::query_as::<_, BlogPost>(
            "SELECT * FROM blog_posts WHERE is_published = TRUE ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(posts)
    }
}
