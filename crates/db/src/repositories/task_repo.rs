//! Repository for the `tasks` table.

use crewdeck_core::types::DbId;
use sqlx::{FromRow, PgPool};

use crate::models::status::{TaskPriority, TaskStatus};
use crate::models::task::{CreateTask, Task, TaskSummary, UpdateTask};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, title, description, status_id, priority_id, \
     assignee_email, due_date, created_at, updated_at";

/// Qualified column list for joined aggregate queries.
const QUALIFIED: &str = "t.id, t.project_id, t.title, t.description, t.status_id, \
     t.priority_id, t.assignee_email, t.due_date, t.created_at, t.updated_at";

#[derive(FromRow)]
struct TaskAggRow {
    #[sqlx(flatten)]
    task: Task,
    comment_count: i64,
}

impl From<TaskAggRow> for TaskSummary {
    fn from(row: TaskAggRow) -> Self {
        Self {
            task: row.task,
            comment_count: row.comment_count,
        }
    }
}

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTask) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks
                (project_id, title, description, status_id, priority_id, assignee_email, due_date)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(input.project_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.status)
            .bind(input.priority)
            .bind(&input.assignee_email)
            .bind(input.due_date)
            .fetch_one(pool)
            .await
    }

    /// Find a task by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the tasks of one project with comment counts, highest priority
    /// first, then newest first. Status and priority filters combine with
    /// AND semantics.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
        status: Option<TaskStatus>,
        priority: Option<TaskPriority>,
    ) -> Result<Vec<TaskSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {QUALIFIED}, COUNT(c.id) AS comment_count
             FROM tasks t
             LEFT JOIN task_comments c ON c.task_id = t.id
             WHERE t.project_id = $1
               AND ($2::smallint IS NULL OR t.status_id = $2)
               AND ($3::smallint IS NULL OR t.priority_id = $3)
             GROUP BY t.id
             ORDER BY t.priority_id DESC, t.created_at DESC, t.id DESC"
        );
        let rows = sqlx::query_as::<_, TaskAggRow>(&query)
            .bind(project_id)
            .bind(status.map(TaskStatus::id))
            .bind(priority.map(TaskPriority::id))
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Find a task with its comment count by internal ID.
    pub async fn summary_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TaskSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {QUALIFIED}, COUNT(c.id) AS comment_count
             FROM tasks t
             LEFT JOIN task_comments c ON c.task_id = t.id
             WHERE t.id = $1
             GROUP BY t.id"
        );
        let row = sqlx::query_as::<_, TaskAggRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Into::into))
    }

    /// Update a task. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                status_id = COALESCE($4, status_id),
                priority_id = COALESCE($5, priority_id),
                assignee_email = COALESCE($6, assignee_email),
                due_date = COALESCE($7, due_date)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.status)
            .bind(input.priority)
            .bind(&input.assignee_email)
            .bind(input.due_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete a task by ID, cascading to its comments. Returns `true` if a
    /// row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of comments attached to the task.
    pub async fn comment_count(pool: &PgPool, id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM task_comments WHERE task_id = $1")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }
}
