use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::routes::contact::ContactResponse;

/// Failures of the submission endpoint, mapped onto the wire contract.
///
/// Upstream and internal details are logged here and never forwarded to the
/// caller.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("email delivery is not configured")]
    NotConfigured,

    #[error("invalid request format")]
    InvalidBody,

    #[error(transparent)]
    Validation(#[from] saiyana_contact::ValidationError),

    #[error("operator notification dispatch failed")]
    AdminDispatch(#[source] anyhow::Error),

    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::NotConfigured => {
                tracing::error!("Email delivery not configured, rejecting submission");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server configuration error".to_string(),
                )
            }
            ApiError::InvalidBody => (
                StatusCode::BAD_REQUEST,
                "Invalid request format".to_string(),
            ),
            ApiError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ApiError::AdminDispatch(err) => {
                tracing::error!("Operator notification failed: {err:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to send notification email".to_string(),
                )
            }
            ApiError::Internal(err) => {
                tracing::error!("Internal error: {err:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ContactResponse::error(message))).into_response()
    }
}
