//! Classification of store-layer failures.
//!
//! Every sqlx error crossing the resolver boundary is folded into a
//! [`CoreError`] here, so client responses never carry raw database error
//! text: unique violations become clean conflict messages, everything
//! unexpected is logged and sanitized.

use crewdeck_core::error::CoreError;

/// Classify a sqlx error into a domain error.
///
/// - Unique violations (code 23505) map to `Conflict`, with a specific
///   message for the known `uq_` constraints.
/// - Foreign-key (23503) and check (23514) violations map to `Validation`.
/// - Everything else maps to `Internal` and is logged at error level.
pub fn classify_db_error(err: sqlx::Error) -> CoreError {
    match &err {
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            Some("23505") => {
                let message = match db_err.constraint() {
                    Some("uq_organizations_slug") => "Organization slug already exists",
                    Some("uq_projects_organization_id_name") => {
                        "Project name already exists in this organization"
                    }
                    _ => "Duplicate value violates a unique constraint",
                };
                CoreError::Conflict(message.to_string())
            }
            Some("23503") => CoreError::Validation("Referenced entity does not exist".to_string()),
            Some("23514") => {
                CoreError::Validation("Value rejected by a check constraint".to_string())
            }
            _ => {
                tracing::error!(error = %db_err, "Database error");
                CoreError::Internal(db_err.to_string())
            }
        },
        other => {
            tracing::error!(error = %other, "Database error");
            CoreError::Internal(other.to_string())
        }
    }
}
