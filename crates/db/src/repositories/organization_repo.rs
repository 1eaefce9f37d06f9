//! Repository for the `organizations` table.

use crewdeck_core::types::DbId;
use sqlx::{FromRow, PgPool};

use crate::models::organization::{
    CreateOrganization, Organization, OrganizationSummary, UpdateOrganization,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, slug, contact_email, created_at, updated_at";

/// Qualified column list for joined aggregate queries.
const QUALIFIED: &str = "o.id, o.name, o.slug, o.contact_email, o.created_at, o.updated_at";

#[derive(FromRow)]
struct OrganizationAggRow {
    #[sqlx(flatten)]
    organization: Organization,
    project_count: i64,
}

impl From<OrganizationAggRow> for OrganizationSummary {
    fn from(row: OrganizationAggRow) -> Self {
        Self {
            organization: row.organization,
            project_count: row.project_count,
        }
    }
}

/// Provides CRUD operations for organizations.
pub struct OrganizationRepo;

impl OrganizationRepo {
    /// Insert a new organization, returning the created row.
    ///
    /// The slug must already be final; a duplicate surfaces as a unique
    /// constraint violation on `uq_organizations_slug`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateOrganization,
    ) -> Result<Organization, sqlx::Error> {
        let query = format!(
            "INSERT INTO organizations (name, slug, contact_email)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Organization>(&query)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.contact_email)
            .fetch_one(pool)
            .await
    }

    /// Find an organization by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Organization>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM organizations WHERE id = $1");
        sqlx::query_as::<_, Organization>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an organization by its slug.
    pub async fn find_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<Organization>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM organizations WHERE slug = $1");
        sqlx::query_as::<_, Organization>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List all organizations with project counts, ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<OrganizationSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {QUALIFIED}, COUNT(p.id) AS project_count
             FROM organizations o
             LEFT JOIN projects p ON p.organization_id = o.id
             GROUP BY o.id
             ORDER BY o.name"
        );
        let rows = sqlx::query_as::<_, OrganizationAggRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Find an organization with its project count by internal ID.
    pub async fn summary_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<OrganizationSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {QUALIFIED}, COUNT(p.id) AS project_count
             FROM organizations o
             LEFT JOIN projects p ON p.organization_id = o.id
             WHERE o.id = $1
             GROUP BY o.id"
        );
        let row = sqlx::query_as::<_, OrganizationAggRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Into::into))
    }

    /// Find an organization with its project count by slug.
    pub async fn summary_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<OrganizationSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {QUALIFIED}, COUNT(p.id) AS project_count
             FROM organizations o
             LEFT JOIN projects p ON p.organization_id = o.id
             WHERE o.slug = $1
             GROUP BY o.id"
        );
        let row = sqlx::query_as::<_, OrganizationAggRow>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Into::into))
    }

    /// Update an organization. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateOrganization,
    ) -> Result<Option<Organization>, sqlx::Error> {
        let query = format!(
            "UPDATE organizations SET
                name = COALESCE($2, name),
                contact_email = COALESCE($3, contact_email)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Organization>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.contact_email)
            .fetch_optional(pool)
            .await
    }

    /// Delete an organization by ID, cascading to projects, tasks and
    /// comments. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM organizations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of projects owned by the organization.
    pub async fn project_count(pool: &PgPool, id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM projects WHERE organization_id = $1")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }
}
