use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use herald_core::CoreError;
use herald_dispatch::DispatchError;
use serde_json::json;

/// Error type of the HTTP handlers.
///
/// The status code tells the pushing bus what to do with the event: 4xx
/// means redelivery cannot help, 5xx asks for a retry.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::Dispatch(err) => match err {
                DispatchError::MalformedPayload { .. } => {
                    (StatusCode::BAD_REQUEST, "MALFORMED_EVENT")
                }
                DispatchError::MissingPhone { .. } | DispatchError::MissingTenant => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "UNPROCESSABLE_EVENT")
                }
                DispatchError::Core(core) => match core {
                    CoreError::NotFound { .. } | CoreError::InvalidFormat(_) => {
                        (StatusCode::UNPROCESSABLE_ENTITY, "UNPROCESSABLE_EVENT")
                    }
                    CoreError::Upstream { .. }
                    | CoreError::Status { .. }
                    | CoreError::Decode { .. } => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR"),
                },
            },
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            AppError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
        };

        let message = match &self {
            AppError::BadRequest(msg) | AppError::Unauthorized(msg) => msg.clone(),
            other => other.to_string(),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
