//! Entity Schemas - record types, insert variants, and declared validators.
//!
//! The insert variants omit every server-assigned field (`id` and the
//! timestamps); only the storage provider produces those. Validators are
//! structural: required-ness and email shape, nothing storage-specific.

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

lazy_static! {
    /// Same permissive pattern the contact form applies before submitting.
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

// ============================================================================
// Entities
// ============================================================================

/// User account (signup path; not exposed through the HTTP surface)
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password: String,
}

/// New user for insertion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertUser {
    pub username: String,
    pub password: String,
}

/// Contact message submitted through the contact form
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub service: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// New contact message for insertion
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertContact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub service: Option<String>,
    pub message: String,
}

/// Blog post
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub category: String,
    pub image_url: String,
    pub published_at: DateTime<Utc>,
}

/// New blog post for creation (seed or admin path)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertBlogPost {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub category: String,
    pub image_url: String,
}

/// Job application submitted through the careers form
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub id: i32,
    pub position: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub resume_url: Option<String>,
    pub cover_letter: Option<String>,
    pub applied_at: DateTime<Utc>,
}

/// New job application for insertion
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertJobApplication {
    pub position: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub resume_url: Option<String>,
    pub cover_letter: Option<String>,
}

// ============================================================================
// Validation
// ============================================================================

/// One invalid field with a user-facing message
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Every invalid field of a submitted payload, not just the first
#[derive(Debug, Clone, thiserror::Error)]
#[error("validation failed for {} field(s)", .errors.len())]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    fn new() -> Self {
        Self { errors: Vec::new() }
    }

    fn require(&mut self, field: &'static str, value: &str) {
        if value.trim().is_empty() {
            self.errors.push(FieldError {
                field,
                message: format!("{field} is required"),
            });
        }
    }

    fn require_email(&mut self, field: &'static str, value: &str) {
        if value.trim().is_empty() {
            self.errors.push(FieldError {
                field,
                message: format!("{field} is required"),
            });
        } else if !is_valid_email(value) {
            self.errors.push(FieldError {
                field,
                message: "Please enter a valid email address".to_string(),
            });
        }
    }

    fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Raw contact form body. Missing fields deserialize to empty strings so the
/// validator can report all of them at once instead of failing in serde.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub service: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<InsertContact, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("firstName", &self.first_name);
        errors.require("lastName", &self.last_name);
        errors.require_email("email", &self.email);
        errors.require("message", &self.message);
        errors.finish()?;

        Ok(InsertContact {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: optional(self.phone.clone()),
            company: optional(self.company.clone()),
            service: optional(self.service.clone()),
            message: self.message.trim().to_string(),
        })
    }
}

/// Raw careers application body
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationForm {
    pub position: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub resume_url: String,
    pub cover_letter: String,
}

impl ApplicationForm {
    pub fn validate(&self) -> Result<InsertJobApplication, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("position", &self.position);
        errors.require("firstName", &self.first_name);
        errors.require("lastName", &self.last_name);
        errors.require_email("email", &self.email);
        errors.finish()?;

        Ok(InsertJobApplication {
            position: self.position.trim().to_string(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: optional(self.phone.clone()),
            resume_url: optional(self.resume_url.clone()),
            cover_letter: optional(self.cover_letter.clone()),
        })
    }
}

/// Raw blog post body (admin creation path)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogPostForm {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub category: String,
    pub image_url: String,
}

impl BlogPostForm {
    pub fn validate(&self) -> Result<InsertBlogPost, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("title", &self.title);
        errors.require("slug", &self.slug);
        errors.require("excerpt", &self.excerpt);
        errors.require("content", &self.content);
        errors.require("author", &self.author);
        errors.require("category", &self.category);
        errors.require("imageUrl", &self.image_url);
        errors.finish()?;

        Ok(InsertBlogPost {
            title: self.title.trim().to_string(),
            slug: self.slug.trim().to_string(),
            excerpt: self.excerpt.trim().to_string(),
            content: self.content.trim().to_string(),
            author: self.author.trim().to_string(),
            category: self.category.trim().to_string(),
            image_url: self.image_url.trim().to_string(),
        })
    }
}

/// Raw signup body
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SignupForm {
    pub username: String,
    pub password: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<InsertUser, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("username", &self.username);
        errors.require("password", &self.password);
        errors.finish()?;

        Ok(InsertUser {
            username: self.username.trim().to_string(),
            password: self.password.clone(),
        })
    }
}
