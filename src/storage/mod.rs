//! Storage Provider - create/read operations for the persisted entities.
//!
//! Two implementations share one contract: [`MemStorage`] (baseline,
//! non-durable) and [`PgStorage`] (PostgreSQL, selected when DATABASE_URL is
//! set). Callers must not depend on the id-generation strategy or on
//! durability, only on the operation contracts.

pub mod memory;
pub mod postgres;

pub use memory::MemStorage;
pub use postgres::PgStorage;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use thiserror::Error;

use crate::schema::{
    BlogPost, Contact, InsertBlogPost, InsertContact, InsertJobApplication, InsertUser,
    JobApplication, User,
};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("username already taken")]
    DuplicateUsername,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait Storage: Send + Sync {
    async fn create_user(&self, user: InsertUser) -> Result<User, StorageError>;
    async fn get_user(&self, id: i32) -> Result<Option<User>, StorageError>;
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StorageError>;

    async fn create_contact(&self, contact: InsertContact) -> Result<Contact, StorageError>;
    /// All contact messages, most recent first.
    async fn get_contacts(&self) -> Result<Vec<Contact>, StorageError>;

    /// All blog posts, most recently published first.
    async fn get_blog_posts(&self) -> Result<Vec<BlogPost>, StorageError>;
    async fn get_blog_post(&self, slug: &str) -> Result<Option<BlogPost>, StorageError>;
    async fn create_blog_post(&self, post: InsertBlogPost) -> Result<BlogPost, StorageError>;

    async fn create_job_application(
        &self,
        application: InsertJobApplication,
    ) -> Result<JobApplication, StorageError>;
    /// All job applications, most recent first.
    async fn get_job_applications(&self) -> Result<Vec<JobApplication>, StorageError>;
}

/// The three sample posts both backends seed at startup.
///
/// Publish timestamps are staggered a day apart so that publish-time order is
/// deterministic and coincides with seeding order (last seeded is newest).
pub fn sample_blog_posts() -> Vec<(InsertBlogPost, chrono::DateTime<Utc>)> {
    let now = Utc::now();
    let posts = vec![
        InsertBlogPost {
            title: "The Future of Smart Infrastructure: IoT Integration in Civil Engineering"
                .to_string(),
            slug: "smart-infrastructure-iot-integration".to_string(),
            excerpt: "Exploring how Internet of Things (IoT) technology is revolutionizing \
                      infrastructure monitoring and maintenance in modern cities..."
                .to_string(),
            content: "Internet of Things (IoT) technology is transforming how we design, \
                      monitor, and maintain civil infrastructure. Smart sensors embedded in \
                      bridges, roads, and buildings provide real-time data on structural \
                      health, traffic patterns, and environmental conditions. This \
                      data-driven approach enables predictive maintenance, reduces costs, \
                      and improves safety. Civil engineers are now designing infrastructure \
                      with IoT integration from the ground up, creating responsive systems \
                      that can adapt to changing conditions and user needs."
                .to_string(),
            author: "James Mitchell".to_string(),
            category: "Smart Cities".to_string(),
            image_url: "https://images.unsplash.com/photo-1573164713714-d95e436ab8d6?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=300"
                .to_string(),
        },
        InsertBlogPost {
            title: "Sustainable Design Principles for Modern Infrastructure Projects".to_string(),
            slug: "sustainable-design-principles".to_string(),
            excerpt: "A comprehensive guide to implementing eco-friendly practices and \
                      materials in large-scale civil engineering projects..."
                .to_string(),
            content: "Sustainable infrastructure design is no longer optional. It is \
                      essential for meeting climate goals and regulatory requirements. This \
                      article explores key principles including material selection, energy \
                      efficiency, water management, and lifecycle assessment. We examine \
                      case studies of successful green infrastructure projects and provide \
                      practical guidelines for implementing sustainable practices in design \
                      and construction phases."
                .to_string(),
            author: "Sarah Thompson".to_string(),
            category: "Sustainability".to_string(),
            image_url: "https://images.unsplash.com/photo-1518780664697-55e3ad937233?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=300"
                .to_string(),
        },
        InsertBlogPost {
            title: "Digital Transformation in Construction: BIM and Drone Technology"
                .to_string(),
            slug: "digital-transformation-construction-bim-drone".to_string(),
            excerpt: "How Building Information Modeling (BIM) and drone surveys are \
                      improving project accuracy and reducing construction timelines..."
                .to_string(),
            content: "The construction industry is experiencing a digital revolution with \
                      Building Information Modeling (BIM) and drone technology leading the \
                      charge. BIM enables collaborative design and clash detection before \
                      construction begins, while drones provide accurate site surveys and \
                      progress monitoring. These technologies together reduce errors, \
                      improve communication, and accelerate project delivery while \
                      maintaining high quality standards."
                .to_string(),
            author: "Emily Chen".to_string(),
            category: "Technology".to_string(),
            image_url: "https://images.unsplash.com/photo-1473968512647-3e447244af8f?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=300"
                .to_string(),
        },
    ];

    let count = posts.len() as i64;
    posts
        .into_iter()
        .enumerate()
        .map(|(i, post)| (post, now - Duration::days(count - 1 - i as i64)))
        .collect()
}
