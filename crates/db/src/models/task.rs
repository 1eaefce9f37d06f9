//! Task entity model and DTOs.

use crewdeck_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::status::{TaskPriority, TaskStatus};

/// A task row from the `tasks` table. The owning organization is derived
/// transitively through the project.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub description: String,
    #[sqlx(rename = "status_id")]
    pub status: TaskStatus,
    #[sqlx(rename = "priority_id")]
    pub priority: TaskPriority,
    pub assignee_email: String,
    pub due_date: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Task payload enriched with the per-read comment count.
#[derive(Debug, Clone, Serialize)]
pub struct TaskSummary {
    #[serde(flatten)]
    pub task: Task,
    pub comment_count: i64,
}

/// DTO for inserting a new task under an already-resolved project.
#[derive(Debug, Clone)]
pub struct CreateTask {
    pub project_id: DbId,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub assignee_email: String,
    pub due_date: Option<Timestamp>,
}

/// DTO for updating an existing task. Only non-`None` fields change.
#[derive(Debug, Clone, Default)]
pub struct UpdateTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub assignee_email: Option<String>,
    pub due_date: Option<Timestamp>,
}
