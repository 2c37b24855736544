use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{
    repository::RepositoryError,
    response::{FieldErrors, MessageBody, ValidationErrorBody},
};

pub const NOT_FOUND_MESSAGE: &str = "Product not found";
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Product not found")]
    NotFound,

    #[error("One or more validation errors occurred")]
    Validation(FieldErrors),

    #[error("{0}")]
    BadRequest(String),

    #[error("ORM error")]
    OrmError(#[from] sea_orm::DbErr),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Single-field validation failure.
    pub fn invalid_field(field: &str, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field.to_string(), vec![message.into()]);
        AppError::Validation(errors)
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::OrmError(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => AppError::NotFound,
            RepositoryError::Database(err) => AppError::OrmError(err),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            AppError::Validation(errors) => {
                let body = ValidationErrorBody {
                    message: "One or more validation errors occurred".to_string(),
                    errors,
                };
                (status, Json(body)).into_response()
            }
            AppError::NotFound | AppError::BadRequest(_) => {
                (status, Json(MessageBody::new(self.to_string()))).into_response()
            }
            AppError::OrmError(ref err) => {
                tracing::error!(error = %err, "store failure");
                (status, Json(MessageBody::new(INTERNAL_ERROR_MESSAGE))).into_response()
            }
            AppError::Internal(ref err) => {
                tracing::error!(error = ?err, "internal failure");
                (status, Json(MessageBody::new(INTERNAL_ERROR_MESSAGE))).into_response()
            }
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
