//! In-memory storage provider - the baseline, non-durable backend.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::schema::{
    BlogPost, Contact, InsertBlogPost, InsertContact, InsertJobApplication, InsertUser,
    JobApplication, User,
};
use crate::storage::{sample_blog_posts, Storage, StorageError};

#[derive(Debug, Default)]
struct Tables {
    users: HashMap<i32, User>,
    contacts: HashMap<i32, Contact>,
    blog_posts: HashMap<i32, BlogPost>,
    job_applications: HashMap<i32, JobApplication>,
    next_user_id: i32,
    next_contact_id: i32,
    next_blog_post_id: i32,
    next_job_application_id: i32,
}

impl Tables {
    fn new() -> Self {
        Self {
            next_user_id: 1,
            next_contact_id: 1,
            next_blog_post_id: 1,
            next_job_application_id: 1,
            ..Self::default()
        }
    }
}

/// Owns all entity maps and id counters behind one lock; ids are
/// monotonically increasing per entity type and never reused.
pub struct MemStorage {
    tables: RwLock<Tables>,
}

impl MemStorage {
    pub fn new() -> Self {
        let mut tables = Tables::new();

        for (post, published_at) in sample_blog_posts() {
            let id = tables.next_blog_post_id;
            tables.next_blog_post_id += 1;
            tables.blog_posts.insert(
                id,
                BlogPost {
                    id,
                    title: post.title,
                    slug: post.slug,
                    excerpt: post.excerpt,
                    content: post.content,
                    author: post.author,
                    category: post.category,
                    image_url: post.image_url,
                    published_at,
                },
            );
        }

        Self {
            tables: RwLock::new(tables),
        }
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemStorage {
    async fn create_user(&self, user: InsertUser) -> Result<User, StorageError> {
        let mut tables = self.tables.write().await;
        if tables.users.values().any(|u| u.username == user.username) {
            return Err(StorageError::DuplicateUsername);
        }
        let id = tables.next_user_id;
        tables.next_user_id += 1;
        let user = User {
            id,
            username: user.username,
            password: user.password,
        };
        tables.users.insert(id, user.clone());
        Ok(user)
    }

    async fn get_user(&self, id: i32) -> Result<Option<User>, StorageError> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StorageError> {
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn create_contact(&self, contact: InsertContact) -> Result<Contact, StorageError> {
        let mut tables = self.tables.write().await;
        let id = tables.next_contact_id;
        tables.next_contact_id += 1;
        let contact = Contact {
            id,
            first_name: contact.first_name,
            last_name: contact.last_name,
            email: contact.email,
            phone: contact.phone,
            company: contact.company,
            service: contact.service,
            message: contact.message,
            created_at: Utc::now(),
        };
        tables.contacts.insert(id, contact.clone());
        Ok(contact)
    }

    async fn get_contacts(&self) -> Result<Vec<Contact>, StorageError> {
        let tables = self.tables.read().await;
        let mut contacts: Vec<Contact> = tables.contacts.values().cloned().collect();
        // Newest first; id breaks ties between same-instant submissions.
        contacts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(contacts)
    }

    async fn get_blog_posts(&self) -> Result<Vec<BlogPost>, StorageError> {
        let tables = self.tables.read().await;
        let mut posts: Vec<BlogPost> = tables.blog_posts.values().cloned().collect();
        posts.sort_by(|a, b| b.published_at.cmp(&a.published_at).then(b.id.cmp(&a.id)));
        Ok(posts)
    }

    async fn get_blog_post(&self, slug: &str) -> Result<Option<BlogPost>, StorageError> {
        let tables = self.tables.read().await;
        Ok(tables
            .blog_posts
            .values()
            .find(|post| post.slug == slug)
            .cloned())
    }

    async fn create_blog_post(&self, post: InsertBlogPost) -> Result<BlogPost, StorageError> {
        let mut tables = self.tables.write().await;
        let id = tables.next_blog_post_id;
        tables.next_blog_post_id += 1;
        let post = BlogPost {
            id,
            title: post.title,
            slug: post.slug,
            excerpt: post.excerpt,
            content: post.content,
            author: post.author,
            category: post.category,
            image_url: post.image_url,
            published_at: Utc::now(),
        };
        tables.blog_posts.insert(id, post.clone());
        Ok(post)
    }

    async fn create_job_application(
        &self,
        application: InsertJobApplication,
    ) -> Result<JobApplication, StorageError> {
        let mut tables = self.tables.write().await;
        let id = tables.next_job_application_id;
        tables.next_job_application_id += 1;
        let application = JobApplication {
            id,
            position: application.position,
            first_name: application.first_name,
            last_name: application.last_name,
            email: application.email,
            phone: application.phone,
            resume_url: application.resume_url,
            cover_letter: application.cover_letter,
            applied_at: Utc::now(),
        };
        tables.job_applications.insert(id, application.clone());
        Ok(application)
    }

    async fn get_job_applications(&self) -> Result<Vec<JobApplication>, StorageError> {
        let tables = self.tables.read().await;
        let mut applications: Vec<JobApplication> =
            tables.job_applications.values().cloned().collect();
        applications.sort_by(|a, b| b.applied_at.cmp(&a.applied_at).then(b.id.cmp(&a.id)));
        Ok(applications)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insert_contact(first_name: &str) -> InsertContact {
        InsertContact {
            first_name: first_name.to_string(),
            last_name: "Tester".to_string(),
            email: "tester@example.com".to_string(),
            phone: None,
            company: None,
            service: None,
            message: "hello".to_string(),
        }
    }

    #[tokio::test]
    async fn test_contact_ids_strictly_increase() {
        let storage = MemStorage::new();
        let mut last_id = 0;
        for i in 0..5 {
            let contact = storage
                .create_contact(insert_contact(&format!("c{i}")))
                .await
                .unwrap();
            assert!(contact.id > last_id);
            last_id = contact.id;
        }
    }

    #[tokio::test]
    async fn test_get_contacts_newest_first() {
        let storage = MemStorage::new();
        for i in 0..4 {
            storage
                .create_contact(insert_contact(&format!("c{i}")))
                .await
                .unwrap();
        }
        let contacts = storage.get_contacts().await.unwrap();
        assert_eq!(contacts.len(), 4);
        for pair in contacts.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
        assert_eq!(contacts[0].first_name, "c3");
    }

    #[tokio::test]
    async fn test_seeded_blog_posts_count_and_order() {
        let storage = MemStorage::new();
        let posts = storage.get_blog_posts().await.unwrap();
        assert_eq!(posts.len(), 3);
        // Seed timestamps are staggered, so the last seeded post is newest.
        assert_eq!(
            posts[0].slug,
            "digital-transformation-construction-bim-drone"
        );
        assert_eq!(posts[1].slug, "sustainable-design-principles");
        assert_eq!(posts[2].slug, "smart-infrastructure-iot-integration");
        for pair in posts.windows(2) {
            assert!(pair[0].published_at > pair[1].published_at);
        }
    }

    #[tokio::test]
    async fn test_get_blog_post_by_slug() {
        let storage = MemStorage::new();
        let post = storage
            .get_blog_post("sustainable-design-principles")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(post.author, "Sarah Thompson");
        assert_eq!(post.category, "Sustainability");
    }

    #[tokio::test]
    async fn test_get_blog_post_absent_slug_is_none() {
        let storage = MemStorage::new();
        let post = storage.get_blog_post("does-not-exist").await.unwrap();
        assert!(post.is_none());
    }

    #[tokio::test]
    async fn test_create_blog_post_continues_id_sequence() {
        let storage = MemStorage::new();
        let post = storage
            .create_blog_post(InsertBlogPost {
                title: "Retrofit Strategies for Ageing Bridges".to_string(),
                slug: "retrofit-strategies-ageing-bridges".to_string(),
                excerpt: "excerpt".to_string(),
                content: "content".to_string(),
                author: "Michael Rodriguez".to_string(),
                category: "Technology".to_string(),
                image_url: "https://example.com/bridge.jpg".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(post.id, 4);
        let posts = storage.get_blog_posts().await.unwrap();
        assert_eq!(posts.len(), 4);
        assert_eq!(posts[0].id, 4);
    }

    #[tokio::test]
    async fn test_user_roundtrip_and_duplicate_username() {
        let storage = MemStorage::new();
        let user = storage
            .create_user(InsertUser {
                username: "jmitchell".to_string(),
                password: "secret".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(user.id, 1);

        let by_id = storage.get_user(user.id).await.unwrap().unwrap();
        assert_eq!(by_id.username, "jmitchell");

        let by_name = storage
            .get_user_by_username("jmitchell")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_name.id, user.id);

        let duplicate = storage
            .create_user(InsertUser {
                username: "jmitchell".to_string(),
                password: "other".to_string(),
            })
            .await;
        assert!(matches!(duplicate, Err(StorageError::DuplicateUsername)));
    }

    #[tokio::test]
    async fn test_get_user_absent_is_none() {
        let storage = MemStorage::new();
        assert!(storage.get_user(99).await.unwrap().is_none());
        assert!(storage
            .get_user_by_username("nobody")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_job_applications_newest_first() {
        let storage = MemStorage::new();
        for position in ["Site Engineer", "Project Manager", "CAD Technician"] {
            storage
                .create_job_application(InsertJobApplication {
                    position: position.to_string(),
                    first_name: "Sam".to_string(),
                    last_name: "Lee".to_string(),
                    email: "sam@example.com".to_string(),
                    phone: None,
                    resume_url: None,
                    cover_letter: None,
                })
                .await
                .unwrap();
        }
        let applications = storage.get_job_applications().await.unwrap();
        assert_eq!(applications.len(), 3);
        assert_eq!(applications[0].position, "CAD Technician");
        for pair in applications.windows(2) {
            assert!(pair[0].applied_at >= pair[1].applied_at);
        }
    }
}
