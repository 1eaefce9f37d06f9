//! Repository for the `task_comments` table.

use crewdeck_core::types::DbId;
use sqlx::PgPool;

use crate::models::task_comment::{CreateTaskComment, TaskComment};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, task_id, content, author_email, created_at, updated_at";

/// Provides CRUD operations for task comments.
pub struct TaskCommentRepo;

impl TaskCommentRepo {
    /// Insert a new comment, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTaskComment,
    ) -> Result<TaskComment, sqlx::Error> {
        let query = format!(
            "INSERT INTO task_comments (task_id, content, author_email)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TaskComment>(&query)
            .bind(input.task_id)
            .bind(&input.content)
            .bind(&input.author_email)
            .fetch_one(pool)
            .await
    }

    /// Find a comment by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TaskComment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM task_comments WHERE id = $1");
        sqlx::query_as::<_, TaskComment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all comments on one task, newest first.
    pub async fn list_by_task(
        pool: &PgPool,
        task_id: DbId,
    ) -> Result<Vec<TaskComment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM task_comments
             WHERE task_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, TaskComment>(&query)
            .bind(task_id)
            .fetch_all(pool)
            .await
    }

    /// Replace a comment's content. Returns `None` if no row with the given
    /// `id` exists.
    pub async fn update_content(
        pool: &PgPool,
        id: DbId,
        content: &str,
    ) -> Result<Option<TaskComment>, sqlx::Error> {
        let query = format!(
            "UPDATE task_comments SET content = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TaskComment>(&query)
            .bind(id)
            .bind(content)
            .fetch_optional(pool)
            .await
    }

    /// Delete a comment by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM task_comments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
