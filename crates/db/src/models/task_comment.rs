//! Task comment entity model and DTOs.

use crewdeck_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A comment row from the `task_comments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TaskComment {
    pub id: DbId,
    pub task_id: DbId,
    pub content: String,
    pub author_email: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a new comment under an already-resolved task.
#[derive(Debug, Clone)]
pub struct CreateTaskComment {
    pub task_id: DbId,
    pub content: String,
    pub author_email: String,
}
