//! Statistics query resolvers.

use crewdeck_core::error::CoreError;
use crewdeck_core::types::DbId;
use crewdeck_db::models::stats::{OrganizationStatistics, ProjectStatistics};
use crewdeck_db::repositories::{OrganizationRepo, ProjectRepo, StatsRepo};
use crewdeck_db::DbPool;

use crate::error::classify_db_error;

/// Per-status task counts for one project; null when the id does not
/// resolve.
pub async fn project_statistics(
    pool: &DbPool,
    project_id: DbId,
) -> Result<Option<ProjectStatistics>, CoreError> {
    let Some(project) = ProjectRepo::find_by_id(pool, project_id)
        .await
        .map_err(classify_db_error)?
    else {
        return Ok(None);
    };
    StatsRepo::project_statistics(pool, &project)
        .await
        .map_err(classify_db_error)
        .map(Some)
}

/// Organization-wide project and task aggregates; null when the slug does
/// not resolve.
pub async fn organization_statistics(
    pool: &DbPool,
    organization_slug: &str,
) -> Result<Option<OrganizationStatistics>, CoreError> {
    let Some(organization) = OrganizationRepo::find_by_slug(pool, organization_slug)
        .await
        .map_err(classify_db_error)?
    else {
        return Ok(None);
    };
    StatsRepo::organization_statistics(pool, &organization)
        .await
        .map_err(classify_db_error)
        .map(Some)
}
