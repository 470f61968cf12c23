use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::upload::UploadReadError;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Error reading uploaded file: {0}")]
    MalformedUpload(String),

    #[error("Uploaded file too large: {0}")]
    UploadTooLarge(String),

    #[error("Missing required form field: {0}")]
    MissingField(String),
}

impl From<UploadReadError> for AppError {
    fn from(err: UploadReadError) -> Self {
        match err {
            UploadReadError::Failed(msg) => AppError::MalformedUpload(msg),
            UploadReadError::TooLarge(msg) => AppError::UploadTooLarge(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MalformedUpload(msg) => {
                tracing::warn!("Malformed upload: {}", msg);
                StatusCode::BAD_REQUEST
            }
            AppError::UploadTooLarge(msg) => {
                tracing::warn!("Upload too large: {}", msg);
                StatusCode::PAYLOAD_TOO_LARGE
            }
            AppError::MissingField(field) => {
                tracing::warn!("Missing form field: {}", field);
                StatusCode::UNPROCESSABLE_ENTITY
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
