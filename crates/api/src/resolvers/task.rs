//! Task query and mutation resolvers.

use crewdeck_core::error::CoreError;
use crewdeck_core::types::DbId;
use crewdeck_db::models::status::{TaskPriority, TaskStatus};
use crewdeck_db::models::task::{CreateTask, Task, TaskSummary, UpdateTask};
use crewdeck_db::repositories::{ProjectRepo, TaskRepo};
use crewdeck_db::DbPool;
use serde::Serialize;

use crate::document::{CreateTaskArgs, UpdateTaskArgs};
use crate::error::classify_db_error;
use crate::resolvers::check;
use crate::response::DeletePayload;

/// Mutation payload for task create/update.
#[derive(Debug, Serialize)]
pub struct TaskPayload {
    pub task: Option<TaskSummary>,
    pub success: bool,
    pub errors: Vec<String>,
}

impl TaskPayload {
    fn from_result(result: Result<TaskSummary, CoreError>) -> Self {
        match result {
            Ok(task) => Self {
                task: Some(task),
                success: true,
                errors: Vec::new(),
            },
            Err(err) => Self {
                task: None,
                success: false,
                errors: vec![err.client_message()],
            },
        }
    }
}

/// Tasks of one project, optionally filtered by status and/or priority
/// (AND semantics). Out-of-set filter values match nothing.
pub async fn tasks(
    pool: &DbPool,
    project_id: DbId,
    status: Option<&str>,
    priority: Option<&str>,
) -> Result<Vec<TaskSummary>, CoreError> {
    let status = match status {
        Some(code) => match TaskStatus::from_code(code) {
            Some(parsed) => Some(parsed),
            None => return Ok(Vec::new()),
        },
        None => None,
    };
    let priority = match priority {
        Some(code) => match TaskPriority::from_code(code) {
            Some(parsed) => Some(parsed),
            None => return Ok(Vec::new()),
        },
        None => None,
    };
    TaskRepo::list_by_project(pool, project_id, status, priority)
        .await
        .map_err(classify_db_error)
}

/// One task by id; null when the id does not resolve.
pub async fn task(pool: &DbPool, id: DbId) -> Result<Option<TaskSummary>, CoreError> {
    TaskRepo::summary_by_id(pool, id)
        .await
        .map_err(classify_db_error)
}

pub async fn create_task(pool: &DbPool, args: CreateTaskArgs) -> TaskPayload {
    TaskPayload::from_result(try_create(pool, args).await)
}

async fn try_create(pool: &DbPool, args: CreateTaskArgs) -> Result<TaskSummary, CoreError> {
    check(&args)?;
    let CreateTaskArgs {
        project_id,
        title,
        description,
        status,
        priority,
        assignee_email,
        due_date,
    } = args;
    let project = ProjectRepo::find_by_id(pool, project_id)
        .await
        .map_err(classify_db_error)?
        .ok_or(CoreError::NotFound { entity: "Project" })?;
    let input = CreateTask {
        project_id: project.id,
        title,
        description: description.unwrap_or_default(),
        status: parse_status(status.as_deref())?.unwrap_or(TaskStatus::Todo),
        priority: parse_priority(priority.as_deref())?.unwrap_or(TaskPriority::Medium),
        assignee_email: assignee_email.unwrap_or_default(),
        due_date,
    };
    let task = TaskRepo::create(pool, &input)
        .await
        .map_err(classify_db_error)?;
    // A fresh task has no comments yet.
    Ok(TaskSummary {
        task,
        comment_count: 0,
    })
}

pub async fn update_task(pool: &DbPool, args: UpdateTaskArgs) -> TaskPayload {
    TaskPayload::from_result(try_update(pool, args).await)
}

async fn try_update(pool: &DbPool, args: UpdateTaskArgs) -> Result<TaskSummary, CoreError> {
    check(&args)?;
    let UpdateTaskArgs {
        id,
        title,
        description,
        status,
        priority,
        assignee_email,
        due_date,
    } = args;
    let input = UpdateTask {
        title,
        description,
        status: parse_status(status.as_deref())?,
        priority: parse_priority(priority.as_deref())?,
        assignee_email,
        due_date,
    };
    let task = TaskRepo::update(pool, id, &input)
        .await
        .map_err(classify_db_error)?
        .ok_or(CoreError::NotFound { entity: "Task" })?;
    summarize(pool, task).await
}

pub async fn delete_task(pool: &DbPool, id: DbId) -> DeletePayload {
    let result = match TaskRepo::delete(pool, id).await.map_err(classify_db_error) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CoreError::NotFound { entity: "Task" }),
        Err(err) => Err(err),
    };
    DeletePayload::from_result(result)
}

fn parse_status(code: Option<&str>) -> Result<Option<TaskStatus>, CoreError> {
    code.map(|c| {
        TaskStatus::from_code(c)
            .ok_or_else(|| CoreError::Validation(format!("Invalid task status: {c}")))
    })
    .transpose()
}

fn parse_priority(code: Option<&str>) -> Result<Option<TaskPriority>, CoreError> {
    code.map(|c| {
        TaskPriority::from_code(c)
            .ok_or_else(|| CoreError::Validation(format!("Invalid task priority: {c}")))
    })
    .transpose()
}

async fn summarize(pool: &DbPool, task: Task) -> Result<TaskSummary, CoreError> {
    let comment_count = TaskRepo::comment_count(pool, task.id)
        .await
        .map_err(classify_db_error)?;
    Ok(TaskSummary {
        task,
        comment_count,
    })
}
