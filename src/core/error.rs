// Centralized error handling for the directory service

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors raised by id-addressed directory operations
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("User not found")]
    NotFound(u32),
}

impl DirectoryError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DirectoryError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for DirectoryError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.to_string(),
        )
            .into_response()
    }
}
