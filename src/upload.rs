//! Uploaded file abstraction.
//!
//! The analyze routine takes an upload by value, so the underlying stream is
//! dropped when the routine returns, whichever way it returns.

use axum::body::Bytes;
use axum::extract::multipart::{Field, MultipartError};
use axum::http::StatusCode;
use std::future::Future;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UploadReadError {
    #[error("{0}")]
    Failed(String),

    /// The request body went over the configured size limit.
    #[error("{0}")]
    TooLarge(String),
}

impl From<MultipartError> for UploadReadError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            UploadReadError::TooLarge(err.body_text())
        } else {
            UploadReadError::Failed(err.body_text())
        }
    }
}

pub trait AudioUpload {
    fn file_name(&self) -> Option<&str>;

    fn content_type(&self) -> Option<&str>;

    /// Read the whole body into memory. Can only succeed once.
    fn read_all(&mut self) -> impl Future<Output = Result<Bytes, UploadReadError>> + Send;
}

/// A `multipart/form-data` file field.
pub struct MultipartUpload<'a> {
    field: Option<Field<'a>>,
    file_name: Option<String>,
    content_type: Option<String>,
}

impl<'a> MultipartUpload<'a> {
    pub fn new(field: Field<'a>) -> Self {
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        Self {
            field: Some(field),
            file_name,
            content_type,
        }
    }
}

impl AudioUpload for MultipartUpload<'_> {
    fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    fn read_all(&mut self) -> impl Future<Output = Result<Bytes, UploadReadError>> + Send {
        let field = self.field.take();
        async move {
            match field {
                Some(field) => Ok(field.bytes().await?),
                None => Err(UploadReadError::Failed(
                    "upload already consumed".to_string(),
                )),
            }
        }
    }
}
