//! Error handling for the API gateway

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// API error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

/// API errors
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Ledger error: {0}")]
    Common(#[from] common::error::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Generate a request ID for tracking errors
        let request_id = Uuid::new_v4().to_string();

        // Log the error with request ID for backend tracing
        tracing::error!("API Error [{}]: {:?}", request_id, &self);

        let (status, message) = match &self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message.clone()),
            // Every ledger error surfaces as HTTP 400 with a fixed message;
            // the variant detail only reaches the log line above
            ApiError::Common(e) => match e {
                common::error::Error::DuplicateAccount(_) => {
                    (StatusCode::BAD_REQUEST, "cpf already exists".to_string())
                }
                common::error::Error::AccountNotFound(_) => (
                    StatusCode::BAD_REQUEST,
                    "account does not exist".to_string(),
                ),
                common::error::Error::InsufficientFunds { .. } => {
                    (StatusCode::BAD_REQUEST, "insufficient funds".to_string())
                }
                common::error::Error::InvalidAmount(_) => {
                    (StatusCode::BAD_REQUEST, "invalid amount".to_string())
                }
            },
        };

        // Return the flat error body with the appropriate status code
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
