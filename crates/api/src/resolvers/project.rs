//! Project query and mutation resolvers.

use crewdeck_core::error::CoreError;
use crewdeck_core::stats::completion_rate;
use crewdeck_core::types::DbId;
use crewdeck_db::models::project::{CreateProject, Project, ProjectSummary, UpdateProject};
use crewdeck_db::models::status::ProjectStatus;
use crewdeck_db::repositories::{OrganizationRepo, ProjectRepo};
use crewdeck_db::DbPool;
use serde::Serialize;

use crate::document::{CreateProjectArgs, UpdateProjectArgs};
use crate::error::classify_db_error;
use crate::resolvers::check;
use crate::response::DeletePayload;

/// Mutation payload for project create/update.
#[derive(Debug, Serialize)]
pub struct ProjectPayload {
    pub project: Option<ProjectSummary>,
    pub success: bool,
    pub errors: Vec<String>,
}

impl ProjectPayload {
    fn from_result(result: Result<ProjectSummary, CoreError>) -> Self {
        match result {
            Ok(project) => Self {
                project: Some(project),
                success: true,
                errors: Vec::new(),
            },
            Err(err) => Self {
                project: None,
                success: false,
                errors: vec![err.client_message()],
            },
        }
    }
}

/// Projects of one organization, optionally filtered by status.
///
/// An unknown organization slug yields an empty list, and so does a status
/// value outside the fixed set: a filter nothing carries can match nothing.
pub async fn projects(
    pool: &DbPool,
    organization_slug: &str,
    status: Option<&str>,
) -> Result<Vec<ProjectSummary>, CoreError> {
    let status = match status {
        Some(code) => match ProjectStatus::from_code(code) {
            Some(parsed) => Some(parsed),
            None => return Ok(Vec::new()),
        },
        None => None,
    };
    ProjectRepo::list_by_organization_slug(pool, organization_slug, status)
        .await
        .map_err(classify_db_error)
}

/// One project by id; null when the id does not resolve.
pub async fn project(pool: &DbPool, id: DbId) -> Result<Option<ProjectSummary>, CoreError> {
    ProjectRepo::summary_by_id(pool, id)
        .await
        .map_err(classify_db_error)
}

pub async fn create_project(pool: &DbPool, args: CreateProjectArgs) -> ProjectPayload {
    ProjectPayload::from_result(try_create(pool, args).await)
}

async fn try_create(pool: &DbPool, args: CreateProjectArgs) -> Result<ProjectSummary, CoreError> {
    check(&args)?;
    let CreateProjectArgs {
        organization_slug,
        name,
        description,
        status,
        due_date,
    } = args;
    let organization = OrganizationRepo::find_by_slug(pool, &organization_slug)
        .await
        .map_err(classify_db_error)?
        .ok_or(CoreError::NotFound {
            entity: "Organization",
        })?;
    let status = parse_status(status.as_deref())?.unwrap_or(ProjectStatus::Active);
    let input = CreateProject {
        organization_id: organization.id,
        name,
        description: description.unwrap_or_default(),
        status,
        due_date,
    };
    let project = ProjectRepo::create(pool, &input)
        .await
        .map_err(classify_db_error)?;
    summarize(pool, project).await
}

pub async fn update_project(pool: &DbPool, args: UpdateProjectArgs) -> ProjectPayload {
    ProjectPayload::from_result(try_update(pool, args).await)
}

async fn try_update(pool: &DbPool, args: UpdateProjectArgs) -> Result<ProjectSummary, CoreError> {
    let UpdateProjectArgs {
        id,
        name,
        description,
        status,
        due_date,
    } = args;
    let input = UpdateProject {
        name,
        description,
        status: parse_status(status.as_deref())?,
        due_date,
    };
    let project = ProjectRepo::update(pool, id, &input)
        .await
        .map_err(classify_db_error)?
        .ok_or(CoreError::NotFound { entity: "Project" })?;
    summarize(pool, project).await
}

pub async fn delete_project(pool: &DbPool, id: DbId) -> DeletePayload {
    let result = match ProjectRepo::delete(pool, id).await.map_err(classify_db_error) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CoreError::NotFound { entity: "Project" }),
        Err(err) => Err(err),
    };
    DeletePayload::from_result(result)
}

fn parse_status(code: Option<&str>) -> Result<Option<ProjectStatus>, CoreError> {
    code.map(|c| {
        ProjectStatus::from_code(c)
            .ok_or_else(|| CoreError::Validation(format!("Invalid project status: {c}")))
    })
    .transpose()
}

async fn summarize(pool: &DbPool, project: Project) -> Result<ProjectSummary, CoreError> {
    let (task_count, completed_task_count) = ProjectRepo::task_counts(pool, project.id)
        .await
        .map_err(classify_db_error)?;
    Ok(ProjectSummary {
        completion_rate: completion_rate(completed_task_count, task_count),
        project,
        task_count,
        completed_task_count,
    })
}
