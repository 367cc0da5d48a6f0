/**
 * Content Routes
 * Read-only site collections served from the content catalog
 */
use axum::{extract::State, Json};
use serde::Serialize;

use crate::catalog::{Department, ProcessStep, Project, Service, TeamMember};
use crate::AppState;

/// Response for GET /api/services
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesPage {
    pub services: Vec<Service>,
    pub process_steps: Vec<ProcessStep>,
}

/// Response for GET /api/team
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPage {
    pub team_members: Vec<TeamMember>,
    pub departments: Vec<Department>,
}

/// GET /api/projects - completed projects
pub async fn list_projects(State(state): State<AppState>) -> Json<Vec<Project>> {
    Json(state.catalog.projects().to_vec())
}

/// GET /api/team - team profiles and department summaries
pub async fn team_page(State(state): State<AppState>) -> Json<TeamPage> {
    Json(TeamPage {
        team_members: state.catalog.team_members().to_vec(),
        departments: state.catalog.departments().to_vec(),
    })
}

/// GET /api/services - service offerings and the engagement process
pub async fn services_page(State(state): State<AppState>) -> Json<ServicesPage> {
    Json(ServicesPage {
        services: state.catalog.services().to_vec(),
        process_steps: state.catalog.process_steps().to_vec(),
    })
}
