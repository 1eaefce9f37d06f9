//! Aggregate statistics queries. Counts are computed with `FILTER` clauses
//! in a single pass per table; the completion-rate formula lives in
//! `crewdeck_core::stats` so both scopes share it.

use sqlx::PgPool;

use crewdeck_core::stats::completion_rate;

use crate::models::organization::Organization;
use crate::models::project::Project;
use crate::models::stats::{OrganizationStatistics, ProjectStatistics};
use crate::models::status::{ProjectStatus, TaskStatus};

/// Read-side statistics over projects and tasks.
pub struct StatsRepo;

impl StatsRepo {
    /// Per-status task counts and completion rate for one project.
    pub async fn project_statistics(
        pool: &PgPool,
        project: &Project,
    ) -> Result<ProjectStatistics, sqlx::Error> {
        let (total, completed, in_progress, todo, blocked): (i64, i64, i64, i64, i64) =
            sqlx::query_as(
                "SELECT COUNT(*),
                        COUNT(*) FILTER (WHERE status_id = $2),
                        COUNT(*) FILTER (WHERE status_id = $3),
                        COUNT(*) FILTER (WHERE status_id = $4),
                        COUNT(*) FILTER (WHERE status_id = $5)
                 FROM tasks
                 WHERE project_id = $1",
            )
            .bind(project.id)
            .bind(TaskStatus::Done.id())
            .bind(TaskStatus::InProgress.id())
            .bind(TaskStatus::Todo.id())
            .bind(TaskStatus::Blocked.id())
            .fetch_one(pool)
            .await?;

        Ok(ProjectStatistics {
            project_id: project.id,
            project_name: project.name.clone(),
            total_tasks: total,
            completed_tasks: completed,
            in_progress_tasks: in_progress,
            todo_tasks: todo,
            blocked_tasks: blocked,
            completion_rate: completion_rate(completed, total),
        })
    }

    /// Project counts by status plus the task-level completion rate across
    /// every project in the organization.
    pub async fn organization_statistics(
        pool: &PgPool,
        organization: &Organization,
    ) -> Result<OrganizationStatistics, sqlx::Error> {
        let (total_projects, active_projects, completed_projects): (i64, i64, i64) =
            sqlx::query_as(
                "SELECT COUNT(*),
                        COUNT(*) FILTER (WHERE status_id = $2),
                        COUNT(*) FILTER (WHERE status_id = $3)
                 FROM projects
                 WHERE organization_id = $1",
            )
            .bind(organization.id)
            .bind(ProjectStatus::Active.id())
            .bind(ProjectStatus::Completed.id())
            .fetch_one(pool)
            .await?;

        let (total_tasks, completed_tasks): (i64, i64) = sqlx::query_as(
            "SELECT COUNT(t.id),
                    COUNT(t.id) FILTER (WHERE t.status_id = $2)
             FROM tasks t
             JOIN projects p ON p.id = t.project_id
             WHERE p.organization_id = $1",
        )
        .bind(organization.id)
        .bind(TaskStatus::Done.id())
        .fetch_one(pool)
        .await?;

        Ok(OrganizationStatistics {
            organization_id: organization.id,
            organization_name: organization.name.clone(),
            total_projects,
            active_projects,
            completed_projects,
            total_tasks,
            completed_tasks,
            overall_completion_rate: completion_rate(completed_tasks, total_tasks),
        })
    }
}
