//! Application error types
//!
//! One error enum shared by the translators, the Kubernetes clients, and the
//! API handlers. Cluster failures are passed through to the caller verbatim.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// The request is malformed and must be rejected before any cluster call
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("not found: {0}")]
    NotFound(String),

    /// Kubernetes API failure, surfaced unmodified
    #[error(transparent)]
    Kube(#[from] kube::Error),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn invalid_request(msg: &str) -> Self {
        AppError::InvalidRequest(msg.to_string())
    }

    pub fn not_found(msg: &str) -> Self {
        AppError::NotFound(msg.to_string())
    }

    pub fn internal(msg: &str) -> Self {
        AppError::Internal(msg.to_string())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Kube(kube::Error::Api(ae)) => {
                StatusCode::from_u16(ae.code).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AppError::Kube(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
