//! Demo data seed script
//!
//! Resets and repopulates the public-facing content of a Borse Classes
//! database:
//! - The 3 catalog courses shown on the landing page
//! - 3 blog articles (2 published, 1 draft)
//! - 1 admin portal account
//!
//! Usage:
//!   DATABASE_URL=... ADMIN_PASSWORD=Admin2024! ./seed-demo
//!
//! Environment variables:
//!   DATABASE_URL    — PostgreSQL connection string (required)
//!   ADMIN_PASSWORD  — Password for the admin account (default: Admin2024!)

use anyhow::{Context, Result};
use chrono::NaiveDate;
use sqlx::postgres::PgPoolOptions;
use std::env;

use borse_classes_api::models::blog::InsertBlogPost;
use borse_classes_api::models::course::InsertCourse;
use borse_classes_api::models::user::{InsertUser, UserType};
use borse_classes_api::storage::{PgStorage, Storage, StorageError};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let database_url = env::var("DATABASE_URL").context("DATABASE_URL required")?;
    let admin_password = env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "Admin2024!".to_string());

    println!("=== Seed Demo Data ===");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    borse_classes_api::db::run_migrations(&pool)
        .await
        .context("Failed to run migrations")?;

    // 1. Clear existing catalog content. Enrollments reference courses, so
    //    the cascade takes them along.
    println!("Clearing courses and blog posts...");
    sqlx::raw_sql("TRUNCATE courses, blog_posts RESTART IDENTITY CASCADE")
        .execute(&pool)
        .await
        .context("Failed to clear catalog tables")?;

    let storage = PgStorage::new(pool);

    // 2. Catalog courses
    println!("Seeding courses...");
    for course in demo_courses() {
        let created = storage
            .create_course(course)
            .await
            .context("Failed to seed course")?;
        println!("  [{}] {}", created.id, created.title);
    }

    // 3. Blog articles
    println!("Seeding blog posts...");
    for post in demo_blog_posts() {
        let created = storage
            .create_blog_post(post)
            .await
            .context("Failed to seed blog post")?;
        let visibility = if created.is_published { "published" } else { "draft" };
        println!("  [{}] {} ({visibility})", created.id, created.slug);
    }

    // 4. Admin account
    println!("Seeding admin account...");
    let admin = InsertUser {
        first_name: "Prakash".to_string(),
        last_name: "Borse".to_string(),
        email: "admin@borseclasses.in".to_string(),
        password: admin_password,
        user_type: UserType::Admin,
    };
    match storage.create_user(admin).await {
        Ok(user) => println!("  [{}] {}", user.id, user.email),
        Err(StorageError::Constraint(_)) => println!("  admin@borseclasses.in already present"),
        Err(e) => return Err(e).context("Failed to seed admin account"),
    }

    println!("Done.");
    Ok(())
}

fn demo_courses() -> Vec<InsertCourse> {
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

fn demo_blog_posts() -> Vec<InsertBlogPost> {
    vec![
        InsertBlogPost {
            title: "How to Prepare for JEE Main: A Month-by-Month Plan".to_string(),
            description: "A realistic twelve-month roadmap for JEE Main aspirants, from syllabus \
                          coverage to full-length mocks."
                .to_string(),
            content: "Most students start their JEE preparation with enthusiasm and lose \
                      direction by the third month. The fix is a plan that assigns every month \
                      one job. Months one to four belong to the Class 11 syllabus, five to \
                      eight to Class 12, and the rest to revision cycles and mock analysis. \
                      This article breaks each phase into weekly targets with the common traps \
                      to avoid."
                .to_string(),
            category: "Competitive Exams".to_string(),
            slug: "jee-main-month-by-month-plan".to_string(),
            publish_date: NaiveDate::from_ymd_opt(2024, 10, 14)
                .unwrap_or_default(),
            is_published: Some(true),
        },
        InsertBlogPost {
            title: "Board Exam Revision: The Three-Round Method".to_string(),
            description: "Why one slow read-through loses to three fast rounds, and how to \
                          schedule them in the final ten weeks."
                .to_string(),
            content: "The three-round method splits your remaining time into a coverage round, \
                      a problem round, and a recall round. Round one rebuilds the concept map \
                      chapter by chapter. Round two is nothing but past papers under the clock. \
                      Round three is pure retrieval: blank-page summaries and formula sheets \
                      written from memory. Here is how our toppers scheduled all three."
                .to_string(),
            category: "Exam Preparation".to_string(),
            slug: "board-exam-three-round-revision".to_string(),
            publish_date: NaiveDate::from_ymd_opt(2024, 12, 2)
                .unwrap_or_default(),
            is_published: Some(true),
        },
        InsertBlogPost {
            title: "Announcing Our New Weekend Doubt-Clearing Sessions".to_string(),
            description: "Open doubt-clearing hours every Saturday for all enrolled students."
                .to_string(),
            content: "Starting next month, every Saturday afternoon is reserved for open \
                      doubt-clearing across all batches. Details on slots and sign-up will be \
                      published here once the schedule is final."
                .to_string(),
            category: "News".to_string(),
            slug: "weekend-doubt-clearing-sessions".to_string(),
            publish_date: NaiveDate::from_ymd_opt(2025, 1, 6)
                .unwrap_or_default(),
            is_published: Some(false),
        },
    ]
}
