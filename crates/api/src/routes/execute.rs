//! The document execution endpoint.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};

use crate::document::Document;
use crate::resolvers;
use crate::response::Envelope;
use crate::state::AppState;

/// Routes mounted at `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/execute", post(execute))
}

/// POST /api/v1/execute
///
/// Accepts one query or mutation document and always answers with a
/// well-formed `{ data, errors }` envelope. A document that fails to
/// parse gets a 400 with the rejection summary in `errors`; execution
/// results come back as 200 regardless of per-operation outcome.
async fn execute(
    State(state): State<AppState>,
    document: Result<Json<Document>, JsonRejection>,
) -> (StatusCode, Json<Envelope>) {
    match document {
        Ok(Json(document)) => (
            StatusCode::OK,
            Json(resolvers::execute(&state.pool, document).await),
        ),
        Err(rejection) => (
            StatusCode::BAD_REQUEST,
            Json(Envelope::error(format!(
                "Malformed document: {}",
                rejection.body_text()
            ))),
        ),
    }
}
