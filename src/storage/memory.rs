use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::Utc;

use super::{Storage, StorageResult};
use crate::models::admission::{AdmissionApplication, InsertAdmissionApplication};
use crate::models::blog::{BlogPost, InsertBlogPost};
use crate::models::course::{Course, InsertCourse};
use crate::models::enrollment::{Enrollment, InsertEnrollment};
use crate::models::inquiry::{InsertInquiry, Inquiry};
use crate::models::parent::{InsertParent, Parent};
use crate::models::student::{InsertStudent, Student};
use crate::models::user::{InsertUser, User};

/// One entity table: rows keyed by id plus the id counter. The caller holds
/// the table lock for the whole assign-and-insert step, so concurrent creates
/// can never share an id and the sequence stays dense.
struct Table<T> {
    rows: BTreeMap<i32, T>,
    next_id: i32,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Self { rows: BTreeMap::new(), next_id: 1 }
    }

    fn insert_with(&mut self, build: impl FnOnce(i32) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    fn get(&self, id: i32) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    fn find(&self, pred: impl Fn(&T) -> bool) -> Option<T> {
        self.rows.values().find(|row| pred(row)).cloned()
    }

    fn filter(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows.values().filter(|row| pred(row)).cloned().collect()
    }

    fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }
}

// Writes are single inserts, so a table behind a poisoned lock is still
// coherent; recover the guard instead of cascading the panic.
fn lock<T>(table: &Mutex<Table<T>>) -> MutexGuard<'_, Table<T>> {
    table.lock().unwrap_or_else(PoisonError::into_inner)
}

/// In-memory backend. Each entity lives in its own table behind its own lock,
/// with ids assigned from a per-table counter starting at 1.
///
/// Unlike [`PgStorage`](super::PgStorage) this store enforces no uniqueness or
/// referential-integrity rules: duplicate emails and dangling foreign ids are
/// accepted without complaint. Deployments that need those guarantees need the
/// database backend.
pub struct MemStorage {
    users: Mutex<Table<User>>,
    students: Mutex<Table<Student>>,
    parents: Mutex<Table<Parent>>,
    courses: Mutex<Table<Course>>,
    enrollments: Mutex<Table<Enrollment>>,
    inquiries: Mutex<Table<Inquiry>>,
    admission_applications: Mutex<Table<AdmissionApplication>>,
    blog_posts: Mutex<Table<BlogPost>>,
}

impl MemStorage {
    /// An empty store. Ids for every entity start at 1.
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Table::new()),
            students: Mutex::new(Table::new()),
            parents: Mutex::new(Table::new()),
            courses: Mutex::new(Table::new()),
            enrollments: Mutex::new(Table::new()),
            inquiries: Mutex::new(Table::new()),
            admission_applications: Mutex::new(Table::new()),
            blog_posts: Mutex::new(Table::new()),
        }
    }

    /// A store pre-loaded with the course catalog the promotional site renders
    /// out of the box. Used when the process runs without a database.
    pub fn with_sample_data() -> Self {
        let storage = Self::new();
        {
            let mut table = lock(&storage.courses);
            for sample in sample_courses() {
                insert_course(&mut table, sample);
            }
        }
        storage
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

fn insert_course(table: &mut Table<Course>, insert: InsertCourse) -> Course {
    table.insert_with(|id| Course {
        id,
        title: insert.title,
        description: insert.description,
        category: insert.category,
        duration: insert.duration,
        audience: insert.audience,
        price: insert.price,
        is_popular: insert.is_popular.unwrap_or(false),
        is_new: insert.is_new.unwrap_or(false),
    })
}

fn sample_courses() -> Vec<InsertCourse> {
    vec![
        InsertCourse {
            title: "Advanced Mathematics".to_string(),
            description: "Comprehensive course covering algebra, geometry, calculus, and \
                          problem-solving strategies."
                .to_string(),
            category: "primary,secondary".to_string(),
            duration: "16 weeks".to_string(),
            audience: "Grades 8-12".to_string(),
            price: "₹15,000".to_string(),
            is_popular: Some(true),
            is_new: Some(false),
        },
        InsertCourse {
            title: "Integrated Science Program".to_string(),
            description: "Explore physics, chemistry, and biology through practical experiments \
                          and conceptual learning."
                .to_string(),
            category: "primary,secondary".to_string(),
            duration: "20 weeks".to_string(),
            audience: "Grades 6-10".to_string(),
            price: "₹18,500".to_string(),
            is_popular: Some(false),
            is_new: Some(false),
        },
        InsertCourse {
            title: "JEE/NEET Preparation".to_string(),
            description: "Intensive coaching for JEE and NEET aspirants with regular mock tests \
                          and personalized feedback."
                .to_string(),
            category: "competitive".to_string(),
            duration: "12 months".to_string(),
            audience: "Grades 11-12".to_string(),
            price: "₹45,000".to_string(),
            is_popular: Some(false),
            is_new: Some(true),
        },
    ]
}

#[async_trait]
impl Storage for MemStorage {
    async fn ping(&self) -> StorageResult<()> {
        Ok(())
    }

    async fn create_user(&self, insert: InsertUser) -> StorageResult<User> {
        let mut table = lock(&self.users);
        Ok(table.insert_with(|id| User {
            id,
            first_name: insert.first_name,
            last_name: insert.last_name,
            email: insert.email,
            password: insert.password,
            user_type: insert.user_type.to_string(),
            created_at: Utc::now(),
        }))
    }

    async fn get_user(&self, id: i32) -> StorageResult<Option<User>> {
        Ok(lock(&self.users).get(id))
    }

    async fn get_user_by_email(&self, email: &str) -> StorageResult<Option<User>> {
        Ok(lock(&self.users).find(|user| user.email == email))
    }

    async fn create_student(&self, insert: InsertStudent) -> StorageResult<Student> {
        let mut table = lock(&self.students);
        Ok(table.insert_with(|id| Student {
            id,
            user_id: insert.user_id,
            grade: insert.grade,
            enrollment_date: insert.enrollment_date,
            parent_id: insert.parent_id,
        }))
    }

    async fn get_student(&self, id: i32) -> StorageResult<Option<Student>> {
        Ok(lock(&self.students).get(id))
    }

    async fn get_student_by_user(&self, user_id: i32) -> StorageResult<Option<Student>> {
        Ok(lock(&self.students).find(|student| student.user_id == user_id))
    }

    async fn create_parent(&self, insert: InsertParent) -> StorageResult<Parent> {
        let mut table = lock(&self.parents);
        Ok(table.insert_with(|id| Parent {
            id,
            user_id: insert.user_id,
            relation: insert.relation.to_string(),
        }))
    }

    async fn get_parent(&self, id: i32) -> StorageResult<Option<Parent>> {
        Ok(lock(&self.parents).get(id))
    }

    async fn get_parent_by_user(&self, user_id: i32) -> StorageResult<Option<Parent>> {
        Ok(lock(&self.parents).find(|parent| parent.user_id == user_id))
    }

    async fn create_course(&self, insert: InsertCourse) -> StorageResult<Course> {
        let mut table = lock(&self.courses);
        Ok(insert_course(&mut table, insert))
    }

    async fn get_course(&self, id: i32) -> StorageResult<Option<Course>> {
        Ok(lock(&self.courses).get(id))
    }

    async fn list_courses(&self) -> StorageResult<Vec<Course>> {
        Ok(lock(&self.courses).all())
    }

    async fn create_enrollment(&self, insert: InsertEnrollment) -> StorageResult<Enrollment> {
        let mut table = lock(&self.enrollments);
        Ok(table.insert_with(|id| Enrollment {
            id,
            student_id: insert.student_id,
            course_id: insert.course_id,
            enrollment_date: insert.enrollment_date,
            status: insert.status.to_string(),
        }))
    }

    async fn get_enrollment(&self, id: i32) -> StorageResult<Option<Enrollment>> {
        Ok(lock(&self.enrollments).get(id))
    }

    async fn list_enrollments_by_student(
        &self,
        student_id: i32,
    ) -> StorageResult<Vec<Enrollment>> {
        Ok(lock(&self.enrollments).filter(|enrollment| enrollment.student_id == student_id))
    }

    async fn list_enrollments_by_course(&self, course_id: i32) -> StorageResult<Vec<Enrollment>> {
        Ok(lock(&self.enrollments).filter(|enrollment| enrollment.course_id == course_id))
    }

    async fn create_inquiry(&self, insert: InsertInquiry) -> StorageResult<Inquiry> {
        let mut table = lock(&self.inquiries);
        Ok(table.insert_with(|id| Inquiry {
            id,
            name: insert.name,
            email: insert.email,
            phone: insert.phone,
            subject: insert.subject,
            message: insert.message,
            created_at: Utc::now(),
            is_resolved: false,
        }))
    }

    async fn get_inquiry(&self, id: i32) -> StorageResult<Option<Inquiry>> {
        Ok(lock(&self.inquiries).get(id))
    }

    async fn list_inquiries(&self) -> StorageResult<Vec<Inquiry>> {
        Ok(lock(&self.inquiries).all())
    }

    async fn create_admission_application(
        &self,
        insert: InsertAdmissionApplication,
    ) -> StorageResult<AdmissionApplication> {
        let mut table = lock(&self.admission_applications);
        Ok(table.insert_with(|id| AdmissionApplication {
            id,
            first_name: insert.first_name,
            last_name: insert.last_name,
            email: insert.email,
            phone: insert.phone,
            address: insert.address,
            student_grade: insert.student_grade,
            interested_course: insert.interested_course,
            previous_school: insert.previous_school,
            parent_name: insert.parent_name,
            parent_relation: insert.parent_relation,
            additional_info: insert.additional_info,
            status: "pending".to_string(),
            created_at: Utc::now(),
        }))
    }

    async fn get_admission_application(
        &self,
        id: i32,
    ) -> StorageResult<Option<AdmissionApplication>> {
        Ok(lock(&self.admission_applications).get(id))
    }

    async fn list_admission_applications(&self) -> StorageResult<Vec<AdmissionApplication>> {
        Ok(lock(&self.admission_applications).all())
    }

    async fn create_blog_post(&self, insert: InsertBlogPost) -> StorageResult<BlogPost> {
        let mut table = lock(&self.blog_posts);
        Ok(table.insert_with(|id| BlogPost {
            id,
            title: insert.title,
            description: insert.description,
            content: insert.content,
            category: insert.category,
            slug: insert.slug,
            publish_date: insert.publish_date,
            is_published: insert.is_published.unwrap_or(true),
        }))
    }

    async fn get_blog_post(&self, id: i32) -> StorageResult<Option<BlogPost>> {
        Ok(lock(&self.blog_posts).get(id))
    }

    async fn get_blog_post_by_slug(&self, slug: &str) -> StorageResult<Option<BlogPost>> {
        Ok(lock(&self.blog_posts).find(|post| post.slug == slug))
    }

    async fn list_published_blog_posts(&self) -> StorageResult<Vec<BlogPost>> {
        Ok(lock(&self.blog_posts).filter(|post| post.is_published))
    }
}
