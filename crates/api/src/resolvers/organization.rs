//! Organization query and mutation resolvers.

use crewdeck_core::error::CoreError;
use crewdeck_core::slug::slugify;
use crewdeck_core::types::DbId;
use crewdeck_db::models::organization::{
    CreateOrganization, OrganizationSummary, UpdateOrganization,
};
use crewdeck_db::repositories::OrganizationRepo;
use crewdeck_db::DbPool;
use serde::Serialize;

use crate::document::{CreateOrganizationArgs, UpdateOrganizationArgs};
use crate::error::classify_db_error;
use crate::resolvers::check;

/// Mutation payload for organization create/update.
#[derive(Debug, Serialize)]
pub struct OrganizationPayload {
    pub organization: Option<OrganizationSummary>,
    pub success: bool,
    pub errors: Vec<String>,
}

impl OrganizationPayload {
    fn from_result(result: Result<OrganizationSummary, CoreError>) -> Self {
        match result {
            Ok(organization) => Self {
                organization: Some(organization),
                success: true,
                errors: Vec::new(),
            },
            Err(err) => Self {
                organization: None,
                success: false,
                errors: vec![err.client_message()],
            },
        }
    }
}

/// All organizations, ordered by name.
pub async fn organizations(pool: &DbPool) -> Result<Vec<OrganizationSummary>, CoreError> {
    OrganizationRepo::list(pool).await.map_err(classify_db_error)
}

/// One organization by id or slug; null when neither resolves. Supplying
/// neither argument is also null, not an error.
pub async fn organization(
    pool: &DbPool,
    id: Option<DbId>,
    slug: Option<&str>,
) -> Result<Option<OrganizationSummary>, CoreError> {
    let found = if let Some(id) = id {
        OrganizationRepo::summary_by_id(pool, id).await
    } else if let Some(slug) = slug {
        OrganizationRepo::summary_by_slug(pool, slug).await
    } else {
        Ok(None)
    };
    found.map_err(classify_db_error)
}

pub async fn create_organization(
    pool: &DbPool,
    args: CreateOrganizationArgs,
) -> OrganizationPayload {
    OrganizationPayload::from_result(try_create(pool, args).await)
}

async fn try_create(
    pool: &DbPool,
    args: CreateOrganizationArgs,
) -> Result<OrganizationSummary, CoreError> {
    check(&args)?;
    let slug = match args.slug {
        Some(slug) if !slug.is_empty() => slug,
        _ => slugify(&args.name),
    };
    let input = CreateOrganization {
        name: args.name,
        slug,
        contact_email: args.contact_email,
    };
    let organization = OrganizationRepo::create(pool, &input)
        .await
        .map_err(classify_db_error)?;
    // A fresh organization owns no projects yet.
    Ok(OrganizationSummary {
        organization,
        project_count: 0,
    })
}

pub async fn update_organization(
    pool: &DbPool,
    args: UpdateOrganizationArgs,
) -> OrganizationPayload {
    OrganizationPayload::from_result(try_update(pool, args).await)
}

async fn try_update(
    pool: &DbPool,
    args: UpdateOrganizationArgs,
) -> Result<OrganizationSummary, CoreError> {
    check(&args)?;
    let UpdateOrganizationArgs {
        id,
        name,
        contact_email,
    } = args;
    let input = UpdateOrganization {
        name,
        contact_email,
    };
    let organization = OrganizationRepo::update(pool, id, &input)
        .await
        .map_err(classify_db_error)?
        .ok_or(CoreError::NotFound {
            entity: "Organization",
        })?;
    let project_count = OrganizationRepo::project_count(pool, organization.id)
        .await
        .map_err(classify_db_error)?;
    Ok(OrganizationSummary {
        organization,
        project_count,
    })
}
