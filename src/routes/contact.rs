/**
 * Contact Routes
 * Contact form submission and the admin listing endpoint
 */
use axum::{extract::State, Json};
use serde::Serialize;

use crate::routes::{ApiError, ApiJson};
use crate::schema::{Contact, ContactForm};
use crate::AppState;

/// Response for POST /api/contact
#[derive(Debug, Serialize)]
pub struct ContactCreated {
    pub success: bool,
    pub contact: Contact,
}

/// POST /api/contact - store a contact form submission
pub async fn submit_contact(
    State(state): State<AppState>,
    ApiJson(form): ApiJson<ContactForm>,
) -> Result<Json<ContactCreated>, ApiError> {
    let insert = form.validate()?;
    let contact = state.storage.create_contact(insert).await?;
    tracing::info!(contact_id = contact.id, "contact message stored");
    Ok(Json(ContactCreated {
        success: true,
        contact,
    }))
}

/// GET /api/contacts - all contact messages, newest first.
/// Unauthenticated admin listing; access control is a known design gap.
pub async fn list_contacts(
    State(state): State<AppState>,
) -> Result<Json<Vec<Contact>>, ApiError> {
    let contacts = state.storage.get_contacts().await?;
    Ok(Json(contacts))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::routes::test_support::{get_json, post_json, test_app};

    #[tokio::test]
    async fn test_submit_contact_returns_created_record() {
        let (status, body) = post_json(
            test_app(),
            "/api/contact",
            json!({
                "firstName": "A",
                "lastName": "B",
                "email": "a@b.com",
                "message": "hi"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert!(body["contact"]["id"].is_number());
        assert!(body["contact"]["createdAt"].is_string());
        assert_eq!(body["contact"]["firstName"], "A");
        assert_eq!(body["contact"]["phone"], serde_json::Value::Null);
    }

    #[tokio::test]
    async fn test_submit_contact_malformed_email_is_rejected() {
        let (status, body) = post_json(
            test_app(),
            "/api/contact",
            json!({
                "firstName": "A",
                "lastName": "B",
                "email": "not-an-email",
                "message": "hi"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Validation error");
        assert_eq!(body["errors"][0]["field"], "email");
    }

    #[tokio::test]
    async fn test_submit_contact_lists_every_missing_field() {
        let (status, body) = post_json(test_app(), "/api/contact", json!({})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let errors = body["errors"].as_array().unwrap();
        assert_eq!(errors.len(), 4);
    }

    #[tokio::test]
    async fn test_submit_contact_type_mismatch_gets_validation_shape() {
        let (status, body) = post_json(
            test_app(),
            "/api/contact",
            json!({
                "firstName": 123,
                "lastName": "B",
                "email": "a@b.com",
                "message": "hi"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Validation error");
        assert_eq!(body["errors"][0]["field"], "body");
    }

    #[tokio::test]
    async fn test_rejected_submission_never_reaches_storage() {
        let app = test_app();
        let (status, _) = post_json(
            app.clone(),
            "/api/contact",
            json!({"firstName": "A", "email": "bad"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, contacts) = get_json(app, "/api/contacts").await;
        assert!(contacts.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_contacts_newest_first() {
        let app = test_app();
        for name in ["first", "second", "third"] {
            let (status, _) = post_json(
                app.clone(),
                "/api/contact",
                json!({
                    "firstName": name,
                    "lastName": "Tester",
                    "email": "t@example.com",
                    "message": "hi"
                }),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
        }

        let (status, contacts) = get_json(app, "/api/contacts").await;
        assert_eq!(status, StatusCode::OK);
        let contacts = contacts.as_array().unwrap();
        assert_eq!(contacts.len(), 3);
        assert_eq!(contacts[0]["firstName"], "third");
        assert_eq!(contacts[2]["firstName"], "first");
    }
}
