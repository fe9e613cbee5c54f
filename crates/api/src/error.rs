use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use videostore_core::error::CoreError;

/// Message returned for any lookup that matches no record.
pub const NOT_FOUND_MESSAGE: &str = "Not Found";

const NOT_IMPLEMENTED_MESSAGE: &str = "Not Implemented";
const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Every variant renders as a JSON body with a single `errors` key: a
/// field -> messages object for validation failures, a list of messages
/// otherwise.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `videostore_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A path that cannot name any record, e.g. a non-numeric ID.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A malformed request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The route exists but has no behavior behind it yet.
    #[error("Not implemented")]
    NotImplemented,
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Shorthand for a missing record of `entity`.
    pub fn not_found(entity: &'static str, id: videostore_core::types::DbId) -> Self {
        AppError::Core(CoreError::NotFound { entity, id })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, errors) = match &self {
            AppError::Core(core) => match core {
                CoreError::Validation(fields) => (StatusCode::BAD_REQUEST, json!(fields)),
                CoreError::NotFound { .. } => {
                    (StatusCode::NOT_FOUND, json!([NOT_FOUND_MESSAGE]))
                }
            },

            AppError::Database(err) => classify_sqlx_error(err),

            AppError::NotFound(_) => (StatusCode::NOT_FOUND, json!([NOT_FOUND_MESSAGE])),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!([msg])),
            AppError::NotImplemented => (
                StatusCode::NOT_IMPLEMENTED,
                json!([NOT_IMPLEMENTED_MESSAGE]),
            ),
        };

        (status, axum::Json(json!({ "errors": errors }))).into_response()
    }
}

/// Classify a sqlx error into an HTTP status and error list.
///
/// - `RowNotFound` maps to 404.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, serde_json::Value) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, json!([NOT_FOUND_MESSAGE])),
        other => {
            tracing::error!(error = %other, "Database error");
            (StatusCode::INTERNAL_SERVER_ERROR, json!([INTERNAL_MESSAGE]))
        }
    }
}
