/**
 * Careers Routes
 * Job listings, application submission, and the admin listing endpoint
 */
use axum::{extract::State, Json};
use serde::Serialize;

use crate::catalog::JobListing;
use crate::routes::{ApiError, ApiJson};
use crate::schema::{ApplicationForm, JobApplication};
use crate::AppState;

/// Response for POST /api/careers/apply
#[derive(Debug, Serialize)]
pub struct ApplicationCreated {
    pub success: bool,
    pub application: JobApplication,
}

/// GET /api/careers/jobs - open positions, ordered by title
pub async fn list_jobs(State(state): State<AppState>) -> Json<Vec<JobListing>> {
    Json(state.catalog.job_listings().to_vec())
}

/// POST /api/careers/apply - store a job application
pub async fn submit_application(
    State(state): State<AppState>,
    ApiJson(form): ApiJson<ApplicationForm>,
) -> Result<Json<ApplicationCreated>, ApiError> {
    let insert = form.validate()?;
    let application = state.storage.create_job_application(insert).await?;
    tracing::info!(
        application_id = application.id,
        position = %application.position,
        "job application stored"
    );
    Ok(Json(ApplicationCreated {
        success: true,
        application,
    }))
}

/// GET /api/careers/applications - all applications, newest first.
/// Unauthenticated admin listing; access control is a known design gap.
pub async fn list_applications(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobApplication>>, ApiError> {
    let applications = state.storage.get_job_applications().await?;
    Ok(Json(applications))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::routes::test_support::{get_json, post_json, test_app};

    #[tokio::test]
    async fn test_list_jobs_ordered_by_title() {
        let (status, body) = get_json(test_app(), "/api/careers/jobs").await;

        assert_eq!(status, StatusCode::OK);
        let jobs = body.as_array().unwrap();
        assert_eq!(jobs.len(), 3);
        let titles: Vec<&str> = jobs.iter().map(|j| j["title"].as_str().unwrap()).collect();
        let mut sorted = titles.clone();
        sorted.sort_unstable();
        assert_eq!(titles, sorted);
        assert!(jobs[0]["requirements"].is_array());
        assert!(jobs[0]["benefits"].is_array());
        assert!(jobs[0]["type"].is_string());
    }

    #[tokio::test]
    async fn test_submit_application_returns_created_record() {
        let (status, body) = post_json(
            test_app(),
            "/api/careers/apply",
            json!({
                "position": "Senior Structural Engineer",
                "firstName": "Grace",
                "lastName": "Hopper",
                "email": "grace@example.com",
                "coverLetter": "I build things that last."
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert!(body["application"]["id"].is_number());
        assert!(body["application"]["appliedAt"].is_string());
        assert_eq!(body["application"]["resumeUrl"], serde_json::Value::Null);
    }

    #[tokio::test]
    async fn test_submit_application_validates_fields() {
        let (status, body) = post_json(
            test_app(),
            "/api/careers/apply",
            json!({"firstName": "Grace", "email": "not-an-email"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Validation error");
        let fields: Vec<&str> = body["errors"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["field"].as_str().unwrap())
            .collect();
        assert_eq!(fields, vec!["position", "lastName", "email"]);
    }

    #[tokio::test]
    async fn test_list_applications_newest_first() {
        let app = test_app();
        for position in ["Site Engineer", "Project Manager"] {
            let (status, _) = post_json(
                app.clone(),
                "/api/careers/apply",
                json!({
                    "position": position,
                    "firstName": "Sam",
                    "lastName": "Lee",
                    "email": "sam@example.com"
                }),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
        }

        let (status, applications) = get_json(app, "/api/careers/applications").await;
        assert_eq!(status, StatusCode::OK);
        let applications = applications.as_array().unwrap();
        assert_eq!(applications.len(), 2);
        assert_eq!(applications[0]["position"], "Project Manager");
    }
}
