//! Repository for the `projects` table.

use crewdeck_core::stats::completion_rate;
use crewdeck_core::types::DbId;
use sqlx::{FromRow, PgPool};

use crate::models::project::{CreateProject, Project, ProjectSummary, UpdateProject};
use crate::models::status::{ProjectStatus, TaskStatus};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, organization_id, name, description, status_id, due_date, created_at, updated_at";

/// Qualified column list for joined aggregate queries.
const QUALIFIED: &str = "p.id, p.organization_id, p.name, p.description, p.status_id, \
     p.due_date, p.created_at, p.updated_at";

#[derive(FromRow)]
struct ProjectAggRow {
    #[sqlx(flatten)]
    project: Project,
    task_count: i64,
    completed_task_count: i64,
}

impl From<ProjectAggRow> for ProjectSummary {
    fn from(row: ProjectAggRow) -> Self {
        Self {
            completion_rate: completion_rate(row.completed_task_count, row.task_count),
            project: row.project,
            task_count: row.task_count,
            completed_task_count: row.completed_task_count,
        }
    }
}

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// A duplicate name within the organization surfaces as a unique
    /// constraint violation on `uq_projects_organization_id_name`.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (organization_id, name, description, status_id, due_date)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(input.organization_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.status)
            .bind(input.due_date)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the projects of one organization, newest first, with task
    /// aggregates. The slug join is the tenant-isolation boundary: an
    /// unknown slug simply yields an empty list.
    pub async fn list_by_organization_slug(
        pool: &PgPool,
        organization_slug: &str,
        status: Option<ProjectStatus>,
    ) -> Result<Vec<ProjectSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {QUALIFIED},
                    COUNT(t.id) AS task_count,
                    COUNT(t.id) FILTER (WHERE t.status_id = $3) AS completed_task_count
             FROM projects p
             JOIN organizations o ON o.id = p.organization_id
             LEFT JOIN tasks t ON t.project_id = p.id
             WHERE o.slug = $1
               AND ($2::smallint IS NULL OR p.status_id = $2)
             GROUP BY p.id
             ORDER BY p.created_at DESC, p.id DESC"
        );
        let rows = sqlx::query_as::<_, ProjectAggRow>(&query)
            .bind(organization_slug)
            .bind(status.map(ProjectStatus::id))
            .bind(TaskStatus::Done.id())
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Find a project with its task aggregates by internal ID.
    pub async fn summary_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProjectSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {QUALIFIED},
                    COUNT(t.id) AS task_count,
                    COUNT(t.id) FILTER (WHERE t.status_id = $2) AS completed_task_count
             FROM projects p
             LEFT JOIN tasks t ON t.project_id = p.id
             WHERE p.id = $1
             GROUP BY p.id"
        );
        let row = sqlx::query_as::<_, ProjectAggRow>(&query)
            .bind(id)
            .bind(TaskStatus::Done.id())
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Into::into))
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                status_id = COALESCE($4, status_id),
                due_date = COALESCE($5, due_date)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.status)
            .bind(input.due_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by ID, cascading to its tasks and their comments.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total and completed task counts for one project.
    pub async fn task_counts(pool: &PgPool, id: DbId) -> Result<(i64, i64), sqlx::Error> {
        sqlx::query_as(
            "SELECT COUNT(*), COUNT(*) FILTER (WHERE status_id = $2)
             FROM tasks WHERE project_id = $1",
        )
        .bind(id)
        .bind(TaskStatus::Done.id())
        .fetch_one(pool)
        .await
    }
}
