use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use prodesc::GenerationError;
use serde_json::json;
use tracing::error;

/// A custom error type for the server application.
///
/// Becomes an HTTP 500 whose body carries the underlying message, so callers
/// can see why generation failed.
#[derive(Debug)]
pub enum AppError {
    /// Errors originating from the `prodesc` pipeline or its backend.
    Generation(GenerationError),
}

/// Conversion from `GenerationError` to `AppError`.
impl From<GenerationError> for AppError {
    fn from(err: GenerationError) -> Self {
        AppError::Generation(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_message = match self {
            AppError::Generation(err) => {
                error!("Error generating description: {err:?}");
                format!("Generation failed: {err}")
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
