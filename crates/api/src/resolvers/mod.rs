//! Document dispatch.
//!
//! Each domain module exposes plain async functions; this module merges
//! them into a single `execute` entrypoint keyed by operation name.
//! Query failures surface in the envelope's `errors`; mutations never
//! fail the envelope — they always produce a `success`/`errors` payload.

pub mod comment;
pub mod organization;
pub mod project;
pub mod stats;
pub mod task;

use crewdeck_core::error::CoreError;
use crewdeck_db::DbPool;
use serde_json::{json, Value};
use validator::Validate;

use crate::document::{Document, MutationDocument, QueryDocument};
use crate::response::Envelope;

/// Execute a parsed document against the store.
pub async fn execute(pool: &DbPool, document: Document) -> Envelope {
    let result = match document {
        Document::Query(query) => execute_query(pool, query).await,
        Document::Mutation(mutation) => Ok(execute_mutation(pool, mutation).await),
    };
    match result {
        Ok(data) => Envelope::data(data),
        Err(err) => Envelope::error(err.client_message()),
    }
}

async fn execute_query(pool: &DbPool, query: QueryDocument) -> Result<Value, CoreError> {
    let data = match query {
        QueryDocument::Organizations {} => {
            json!({ "organizations": organization::organizations(pool).await? })
        }
        QueryDocument::Organization { id, slug } => {
            json!({ "organization": organization::organization(pool, id, slug.as_deref()).await? })
        }
        QueryDocument::Projects {
            organization_slug,
            status,
        } => {
            json!({ "projects": project::projects(pool, &organization_slug, status.as_deref()).await? })
        }
        QueryDocument::Project { id } => {
            json!({ "project": project::project(pool, id).await? })
        }
        QueryDocument::Tasks {
            project_id,
            status,
            priority,
        } => {
            json!({ "tasks": task::tasks(pool, project_id, status.as_deref(), priority.as_deref()).await? })
        }
        QueryDocument::Task { id } => {
            json!({ "task": task::task(pool, id).await? })
        }
        QueryDocument::TaskComments { task_id } => {
            json!({ "task_comments": comment::task_comments(pool, task_id).await? })
        }
        QueryDocument::ProjectStatistics { project_id } => {
            json!({ "project_statistics": stats::project_statistics(pool, project_id).await? })
        }
        QueryDocument::OrganizationStatistics { organization_slug } => {
            json!({ "organization_statistics": stats::organization_statistics(pool, &organization_slug).await? })
        }
    };
    Ok(data)
}

async fn execute_mutation(pool: &DbPool, mutation: MutationDocument) -> Value {
    match mutation {
        MutationDocument::CreateOrganization(args) => {
            json!({ "create_organization": organization::create_organization(pool, args).await })
        }
        MutationDocument::UpdateOrganization(args) => {
            json!({ "update_organization": organization::update_organization(pool, args).await })
        }
        MutationDocument::CreateProject(args) => {
            json!({ "create_project": project::create_project(pool, args).await })
        }
        MutationDocument::UpdateProject(args) => {
            json!({ "update_project": project::update_project(pool, args).await })
        }
        MutationDocument::DeleteProject { id } => {
            json!({ "delete_project": project::delete_project(pool, id).await })
        }
        MutationDocument::CreateTask(args) => {
            json!({ "create_task": task::create_task(pool, args).await })
        }
        MutationDocument::UpdateTask(args) => {
            json!({ "update_task": task::update_task(pool, args).await })
        }
        MutationDocument::DeleteTask { id } => {
            json!({ "delete_task": task::delete_task(pool, id).await })
        }
        MutationDocument::AddTaskComment(args) => {
            json!({ "add_task_comment": comment::add_task_comment(pool, args).await })
        }
        MutationDocument::UpdateTaskComment { id, content } => {
            json!({ "update_task_comment": comment::update_task_comment(pool, id, content).await })
        }
        MutationDocument::DeleteTaskComment { id } => {
            json!({ "delete_task_comment": comment::delete_task_comment(pool, id).await })
        }
    }
}

/// Run derive-based validation, folding failures into one message.
pub(crate) fn check(args: &impl Validate) -> Result<(), CoreError> {
    match args.validate() {
        Ok(()) => Ok(()),
        Err(errors) => {
            let mut messages = Vec::new();
            for (field, field_errors) in errors.field_errors() {
                for err in field_errors {
                    match &err.message {
                        Some(message) => messages.push(message.to_string()),
                        None => messages.push(format!("Invalid value for {field}")),
                    }
                }
            }
            Err(CoreError::Validation(messages.join("; ")))
        }
    }
}
