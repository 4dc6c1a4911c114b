use crate::services::providers::ProviderError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Request-level failures for the multiplex endpoint.
///
/// Every variant maps to HTTP 400 with the `{is_success: false, message}`
/// envelope; client-input and downstream failures are not distinguished at
/// the status level.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Request body is required")]
    MissingBody,

    #[error("Exactly one key is required")]
    KeyCount,

    #[error("Invalid key")]
    InvalidKey,

    /// Payload failed the selected operation's shape check. Carries the
    /// operation's fixed message.
    #[error("{0}")]
    InvalidPayload(&'static str),

    /// Arithmetic failure during computation (e.g. overflow).
    #[error("{0}")]
    Computation(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct FailureEnvelope {
            is_success: bool,
            message: String,
        }

        (
            StatusCode::BAD_REQUEST,
            Json(FailureEnvelope {
                is_success: false,
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}
