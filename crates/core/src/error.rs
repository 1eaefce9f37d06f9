use thiserror::Error;

/// Domain-level error classification.
///
/// Store failures are sorted into these variants at the resolver boundary,
/// so raw database error text never reaches API clients. The `Display`
/// impl is for logs; [`CoreError::client_message`] is what goes on the wire.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// The message exposed to API clients.
    ///
    /// Internal errors are sanitized; the detail only appears in logs.
    pub fn client_message(&self) -> String {
        match self {
            CoreError::NotFound { entity } => format!("{entity} not found"),
            CoreError::Validation(msg) | CoreError::Conflict(msg) => msg.clone(),
            CoreError::Internal(_) => "An internal error occurred".to_string(),
        }
    }
}
