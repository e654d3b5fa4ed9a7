//! Error types for the Biblioteca server

use std::collections::HashMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed")]
    Validation(#[from] ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body for not-found and unexpected errors
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub status: u16,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Error response body for validation failures, one message per violated field
#[derive(Serialize, utoipa::ToSchema)]
pub struct ValidationErrorResponse {
    pub status: u16,
    pub errors: HashMap<String, String>,
    pub timestamp: DateTime<Utc>,
}

/// Flatten validator output into a field -> message map (first message per field)
fn field_errors(errors: &ValidationErrors) -> HashMap<String, String> {
    errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let message = errs
                .first()
                .and_then(|e| e.message.as_ref())
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Valor inválido para o campo {}", field));
            (field.to_string(), message)
        })
        .collect()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let timestamp = Utc::now();

        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Validation(errors) => {
                let status = StatusCode::BAD_REQUEST;
                let body = Json(ValidationErrorResponse {
                    status: status.as_u16(),
                    errors: field_errors(errors),
                    timestamp,
                });
                return (status, body).into_response();
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Erro interno do servidor".to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Erro interno do servidor".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            status: status.as_u16(),
            message,
            timestamp,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
