use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use reportinghub_core::merge::MergeError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Merge(#[from] MergeError),
    #[error("{0}")]
    InvalidContentType(String),
    #[error("{0}")]
    InvalidMultipart(String),
    // Surface the underlying error message to help debugging during development
    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

/// Envelope parts stashed in the response extensions so the correlation
/// middleware can re-render the body with the request's correlation id.
#[derive(Clone)]
pub struct ErrorParts {
    pub code: &'static str,
    pub message: String,
}

#[derive(Serialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::Merge(e) => {
                let status = match e {
                    MergeError::Save(_) => StatusCode::INTERNAL_SERVER_ERROR,
                    _ => StatusCode::BAD_REQUEST,
                };
                (status, e.code(), e.to_string())
            }
            ApiError::InvalidContentType(reason) => {
                (StatusCode::BAD_REQUEST, "InvalidContentType", reason.clone())
            }
            ApiError::InvalidMultipart(reason) => {
                (StatusCode::BAD_REQUEST, "InvalidMultipart", reason.clone())
            }
            ApiError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                self.to_string(),
            ),
        };
        let body = Json(ErrorEnvelope {
            error: ErrorBody {
                code,
                message: message.clone(),
            },
        });
        let mut response = (status, body).into_response();
        response.extensions_mut().insert(ErrorParts { code, message });
        response
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
