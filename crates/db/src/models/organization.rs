//! Organization entity model and DTOs.

use crewdeck_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// An organization row from the `organizations` table.
///
/// The organization is the tenant boundary: every project, task and comment
/// hangs off exactly one organization.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Organization {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub contact_email: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Organization payload enriched with the per-read project count.
#[derive(Debug, Clone, Serialize)]
pub struct OrganizationSummary {
    #[serde(flatten)]
    pub organization: Organization,
    pub project_count: i64,
}

/// DTO for inserting a new organization. The slug is already final here;
/// deriving it from the name happens at the resolver boundary.
#[derive(Debug, Clone)]
pub struct CreateOrganization {
    pub name: String,
    pub slug: String,
    pub contact_email: String,
}

/// DTO for updating an existing organization. Only non-`None` fields change.
#[derive(Debug, Clone, Default)]
pub struct UpdateOrganization {
    pub name: Option<String>,
    pub contact_email: Option<String>,
}
