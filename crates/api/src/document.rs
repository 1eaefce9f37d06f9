//! Query and mutation documents accepted by the execute endpoint.
//!
//! A document is a single JSON object whose outer key selects the operation
//! class and whose inner key names the operation:
//!
//! ```json
//! { "query":    { "projects": { "organization_slug": "org-1", "status": "ACTIVE" } } }
//! { "mutation": { "create_task": { "project_id": 7, "title": "New Task" } } }
//! ```
//!
//! Status and priority arguments arrive as free strings and are validated
//! against the fixed enums inside the resolvers, so an out-of-set value
//! fails the mutation instead of the whole document.

use chrono::NaiveDate;
use crewdeck_core::types::{DbId, Timestamp};
use serde::Deserialize;
use validator::{Validate, ValidateEmail, ValidationError};

/// Top-level document: exactly one query or one mutation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Document {
    Query(QueryDocument),
    Mutation(MutationDocument),
}

/// Read operations. Entities that do not resolve yield null/empty data,
/// never errors.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryDocument {
    Organizations {},
    Organization {
        id: Option<DbId>,
        slug: Option<String>,
    },
    Projects {
        organization_slug: String,
        status: Option<String>,
    },
    Project {
        id: DbId,
    },
    Tasks {
        project_id: DbId,
        status: Option<String>,
        priority: Option<String>,
    },
    Task {
        id: DbId,
    },
    TaskComments {
        task_id: DbId,
    },
    ProjectStatistics {
        project_id: DbId,
    },
    OrganizationStatistics {
        organization_slug: String,
    },
}

/// Write operations. Every mutation resolves to a payload with
/// `success`/`errors` fields; it never fails the envelope.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationDocument {
    CreateOrganization(CreateOrganizationArgs),
    UpdateOrganization(UpdateOrganizationArgs),
    CreateProject(CreateProjectArgs),
    UpdateProject(UpdateProjectArgs),
    DeleteProject { id: DbId },
    CreateTask(CreateTaskArgs),
    UpdateTask(UpdateTaskArgs),
    DeleteTask { id: DbId },
    AddTaskComment(AddTaskCommentArgs),
    UpdateTaskComment { id: DbId, content: String },
    DeleteTaskComment { id: DbId },
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateOrganizationArgs {
    #[validate(length(min = 1, message = "Organization name is required"))]
    pub name: String,
    /// Defaults to the slugified name if omitted or empty.
    pub slug: Option<String>,
    #[validate(email(message = "Invalid contact email"))]
    pub contact_email: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateOrganizationArgs {
    pub id: DbId,
    pub name: Option<String>,
    #[validate(email(message = "Invalid contact email"))]
    pub contact_email: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateProjectArgs {
    pub organization_slug: String,
    #[validate(length(min = 1, message = "Project name is required"))]
    pub name: String,
    pub description: Option<String>,
    /// Defaults to ACTIVE.
    pub status: Option<String>,
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProjectArgs {
    pub id: DbId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTaskArgs {
    pub project_id: DbId,
    #[validate(length(min = 1, message = "Task title is required"))]
    pub title: String,
    pub description: Option<String>,
    /// Defaults to TODO.
    pub status: Option<String>,
    /// Defaults to MEDIUM.
    pub priority: Option<String>,
    /// Empty means unassigned.
    #[validate(custom(function = "validate_optional_email", message = "Invalid assignee email"))]
    pub assignee_email: Option<String>,
    pub due_date: Option<Timestamp>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTaskArgs {
    pub id: DbId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    #[validate(custom(function = "validate_optional_email", message = "Invalid assignee email"))]
    pub assignee_email: Option<String>,
    pub due_date: Option<Timestamp>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddTaskCommentArgs {
    pub task_id: DbId,
    #[validate(length(min = 1, message = "Comment content is required"))]
    pub content: String,
    #[validate(email(message = "Invalid author email"))]
    pub author_email: String,
}

/// Accepts a well-formed email or the empty string (unassigned).
fn validate_optional_email(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.validate_email() {
        Ok(())
    } else {
        Err(ValidationError::new("email"))
    }
}
