//! Project entity model and DTOs.

use chrono::NaiveDate;
use crewdeck_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::status::ProjectStatus;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub organization_id: DbId,
    pub name: String,
    pub description: String,
    #[sqlx(rename = "status_id")]
    pub status: ProjectStatus,
    pub due_date: Option<NaiveDate>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Project payload enriched with per-read task aggregates.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectSummary {
    #[serde(flatten)]
    pub project: Project,
    pub task_count: i64,
    pub completed_task_count: i64,
    pub completion_rate: f64,
}

/// DTO for inserting a new project under an already-resolved organization.
#[derive(Debug, Clone)]
pub struct CreateProject {
    pub organization_id: DbId,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub due_date: Option<NaiveDate>,
}

/// DTO for updating an existing project. Only non-`None` fields change;
/// an empty description string still counts as supplied.
#[derive(Debug, Clone, Default)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
    pub due_date: Option<NaiveDate>,
}
