//! Aggregate statistics payloads. All counts are recomputed per read;
//! nothing here is stored.

use crewdeck_core::types::DbId;
use serde::Serialize;

/// Per-status task counts and completion rate for a single project.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectStatistics {
    pub project_id: DbId,
    pub project_name: String,
    pub total_tasks: i64,
    pub completed_tasks: i64,
    pub in_progress_tasks: i64,
    pub todo_tasks: i64,
    pub blocked_tasks: i64,
    pub completion_rate: f64,
}

/// Project counts by status plus the task-level completion rate across
/// every project in the organization.
#[derive(Debug, Clone, Serialize)]
pub struct OrganizationStatistics {
    pub organization_id: DbId,
    pub organization_name: String,
    pub total_projects: i64,
    pub active_projects: i64,
    pub completed_projects: i64,
    pub total_tasks: i64,
    pub completed_tasks: i64,
    pub overall_completion_rate: f64,
}
