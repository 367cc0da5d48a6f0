//! PostgreSQL storage provider - durable backend behind the same contract.

use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::schema::{
    BlogPost, Contact, InsertBlogPost, InsertContact, InsertJobApplication, InsertUser,
    JobApplication, User,
};
use crate::storage::{sample_blog_posts, Storage, StorageError};

#[derive(Debug, Clone)]
pub struct DbConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub idle_timeout_secs: u64,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgresql://localhost/sterling".to_string()),
            max_connections: std::env::var("DB_POOL_MAX")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            min_connections: std::env::var("DB_POOL_MIN")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(2),
            idle_timeout_secs: std::env::var("DB_IDLE_TIMEOUT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(300),
        }
    }
}

/// Startup DDL. One command per entry: queries go through the prepared
/// (extended) protocol, which rejects multi-command strings.
const MIGRATIONS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id SERIAL PRIMARY KEY,
        username TEXT UNIQUE NOT NULL,
        password TEXT NOT NULL
    )
"#,
    r#"
    CREATE TABLE IF NOT EXISTS contacts (
        id SERIAL PRIMARY KEY,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        email TEXT NOT NULL,
        phone TEXT,
        company TEXT,
        service TEXT,
        message TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
"#,
    r#"
    CREATE INDEX IF NOT EXISTS idx_contacts_created_at
        ON contacts(created_at DESC)
"#,
    r#"
    CREATE TABLE IF NOT EXISTS blog_posts (
        id SERIAL PRIMARY KEY,
        title TEXT NOT NULL,
        slug TEXT NOT NULL,
        excerpt TEXT NOT NULL,
        content TEXT NOT NULL,
        author TEXT NOT NULL,
        category TEXT NOT NULL,
        image_url TEXT NOT NULL,
        published_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
"#,
    r#"
    CREATE INDEX IF NOT EXISTS idx_blog_posts_slug ON blog_posts(slug)
"#,
    r#"
    CREATE INDEX IF NOT EXISTS idx_blog_posts_published_at
        ON blog_posts(published_at DESC)
"#,
    r#"
    CREATE TABLE IF NOT EXISTS job_applications (
        id SERIAL PRIMARY KEY,
        position TEXT NOT NULL,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        email TEXT NOT NULL,
        phone TEXT,
        resume_url TEXT,
        cover_letter TEXT,
        applied_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
"#,
];

/// Owns the connection pool; constructed once at process start.
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    /// Connect, verify the connection, create tables, and seed sample posts
    /// into an empty blog table.
    pub async fn connect(config: DbConfig) -> Result<Self, StorageError> {
        tracing::info!("Initializing database connection pool...");

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(std::time::Duration::from_secs(3))
            .idle_timeout(std::time::Duration::from_secs(config.idle_timeout_secs))
            .max_lifetime(std::time::Duration::from_secs(1800))
            .test_before_acquire(true)
            .connect(&config.url)
            .await?;

        sqlx::query("SELECT 1").fetch_one(&pool).await?;
        tracing::info!("Database connection pool initialized successfully");

        let storage = Self { pool };
        storage.run_migrations().await?;
        storage.seed_blog_posts().await?;
        Ok(storage)
    }

    async fn run_migrations(&self) -> Result<(), StorageError> {
        tracing::info!("Running database migrations...");

        for statement in MIGRATIONS {
            sqlx::query(statement).execute(&self.pool).await?;
        }

        tracing::info!("Database migrations completed successfully");
        Ok(())
    }

    async fn seed_blog_posts(&self) -> Result<(), StorageError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM blog_posts")
            .fetch_one(&self.pool)
            .await?;
        if count > 0 {
            return Ok(());
        }

        tracing::info!("Seeding sample blog posts");
        for (post, published_at) in sample_blog_posts() {
            sqlx::query(
                r#"
                INSERT INTO blog_posts
                    (title, slug, excerpt, content, author, category, image_url, published_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
            )
            .bind(&post.title)
            .bind(&post.slug)
            .bind(&post.excerpt)
            .bind(&post.content)
            .bind(&post.author)
            .bind(&post.category)
            .bind(&post.image_url)
            .bind(published_at)
            .execute(&self.pool)
            .await?;
        }
        Ok(())
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => db.code().as_deref() == Some("23505"),
        _ => false,
    }
}

#[async_trait]
impl Storage for PgStorage {
    async fn create_user(&self, user: InsertUser) -> Result<User, StorageError> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password)
            VALUES ($1, $2)
            RETURNING id, username, password
        "#,
        )
        .bind(&user.username)
        .bind(&user.password)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                StorageError::DuplicateUsername
            } else {
                StorageError::Database(e)
            }
        })
    }

    async fn get_user(&self, id: i32) -> Result<Option<User>, StorageError> {
        let user =
            sqlx::query_as::<_, User>("SELECT id, username, password FROM users WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(user)
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StorageError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn create_contact(&self, contact: InsertContact) -> Result<Contact, StorageError> {
        let contact = sqlx::query_as::<_, Contact>(
            r#"
            INSERT INTO contacts
                (first_name, last_name, email, phone, company, service, message, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, now())
            RETURNING id, first_name, last_name, email, phone, company, service, message,
                      created_at
        "#,
        )
        .bind(&contact.first_name)
        .bind(&contact.last_name)
        .bind(&contact.email)
        .bind(&contact.phone)
        .bind(&contact.company)
        .bind(&contact.service)
        .bind(&contact.message)
        .fetch_one(&self.pool)
        .await?;
        Ok(contact)
    }

    async fn get_contacts(&self) -> Result<Vec<Contact>, StorageError> {
        let contacts = sqlx::query_as::<_, Contact>(
            r#"
            SELECT id, first_name, last_name, email, phone, company, service, message,
                   created_at
            FROM contacts
            ORDER BY created_at DESC, id DESC
        "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(contacts)
    }

    async fn get_blog_posts(&self) -> Result<Vec<BlogPost>, StorageError> {
        let posts = sqlx::query_as::<_, BlogPost>(
            r#"
            SELECT id, title, slug, excerpt, content, author, category, image_url,
                   published_at
            FROM blog_posts
            ORDER BY published_at DESC, id DESC
        "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(posts)
    }

    async fn get_blog_post(&self, slug: &str) -> Result<Option<BlogPost>, StorageError> {
        let post = sqlx::query_as::<_, BlogPost>(
            r#"
            SELECT id, title, slug, excerpt, content, author, category, image_url,
                   published_at
            FROM blog_posts
            WHERE slug = $1
        "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;
        Ok(post)
    }

    async fn create_blog_post(&self, post: InsertBlogPost) -> Result<BlogPost, StorageError> {
        let post = sqlx::query_as::<_, BlogPost>(
            r#"
            INSERT INTO blog_posts
                (title, slug, excerpt, content, author, category, image_url, published_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, now())
            RETURNING id, title, slug, excerpt, content, author, category, image_url,
                      published_at
        "#,
        )
        .bind(&post.title)
        .bind(&post.slug)
        .bind(&post.excerpt)
        .bind(&post.content)
        .bind(&post.author)
        .bind(&post.category)
        .bind(&post.image_url)
        .fetch_one(&self.pool)
        .await?;
        Ok(post)
    }

    async fn create_job_application(
        &self,
        application: InsertJobApplication,
    ) -> Result<JobApplication, StorageError> {
        let application = sqlx::query_as::<_, JobApplication>(
            r#"
            INSERT INTO job_applications
                (position, first_name, last_name, email, phone, resume_url, cover_letter,
                 applied_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, now())
            RETURNING id, position, first_name, last_name, email, phone, resume_url,
                      cover_letter, applied_at
        "#,
        )
        .bind(&application.position)
        .bind(&application.first_name)
        .bind(&application.last_name)
        .bind(&application.email)
        .bind(&application.phone)
        .bind(&application.resume_url)
        .bind(&application.cover_letter)
        .fetch_one(&self.pool)
        .await?;
        Ok(application)
    }

    async fn get_job_applications(&self) -> Result<Vec<JobApplication>, StorageError> {
        let applications = sqlx::query_as::<_, JobApplication>(
            r#"
            SELECT id, position, first_name, last_name, email, phone, resume_url,
                   cover_letter, applied_at
            FROM job_applications
            ORDER BY applied_at DESC, id DESC
        "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(applications)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migration_statements_are_single_commands() {
        for statement in MIGRATIONS {
            let body = statement.trim().trim_end_matches(';');
            assert!(
                !body.contains(';'),
                "multi-command statement would be rejected by the prepared protocol: {statement}"
            );
        }
    }

    #[test]
    fn test_db_config_default_uses_env_or_fallback() {
        let config = DbConfig::default();
        assert!(config.max_connections >= 1);
        assert!(config.idle_timeout_secs >= 1);
        assert!(!config.url.is_empty());
    }
}
