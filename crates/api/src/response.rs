//! Shared response types for the document endpoint.

use crewdeck_core::error::CoreError;
use serde::Serialize;
use serde_json::Value;

/// Standard `{ data, errors }` envelope wrapping every document response.
///
/// `data` is keyed by the operation name; `errors` is empty unless the
/// document itself failed (malformed input, unexpected store failure on a
/// query path).
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub data: Option<Value>,
    pub errors: Vec<String>,
}

impl Envelope {
    /// A successful response carrying operation data.
    pub fn data(value: Value) -> Self {
        Self {
            data: Some(value),
            errors: Vec::new(),
        }
    }

    /// A failed response carrying a single error message and no data.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            data: None,
            errors: vec![message.into()],
        }
    }
}

/// Payload for delete mutations, which return no entity.
#[derive(Debug, Serialize)]
pub struct DeletePayload {
    pub success: bool,
    pub errors: Vec<String>,
}

impl DeletePayload {
    pub fn from_result(result: Result<(), CoreError>) -> Self {
        match result {
            Ok(()) => Self {
                success: true,
                errors: Vec::new(),
            },
            Err(err) => Self {
                success: false,
                errors: vec![err.client_message()],
            },
        }
    }
}
