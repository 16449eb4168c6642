use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::repositories::RepositoryError;
use crate::services::auth_service::AuthServiceError;
use crate::services::statement_service::StatementServiceError;
use crate::services::user_service::UserServiceError;

// Type alias for Result with our ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

/// Request-terminal failures of the HTTP surface. Each variant maps to one
/// status code and one fixed message; there is no retry or compensation.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("User not found")]
    UserNotFound,

    #[error("Statement not found")]
    StatementNotFound,

    #[error("User already exists")]
    EmailAlreadyExists,

    #[error("Incorrect email or password")]
    InvalidCredentials,

    #[error("Insufficient funds")]
    InsufficientFunds,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error")]
    InternalError,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::UserNotFound => (StatusCode::NOT_FOUND, "User not found".to_string()),
            ApiError::StatementNotFound => {
                (StatusCode::NOT_FOUND, "Statement not found".to_string())
            }
            ApiError::EmailAlreadyExists => {
                (StatusCode::BAD_REQUEST, "User already exists".to_string())
            }
            ApiError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Incorrect email or password".to_string(),
            ),
            ApiError::InsufficientFunds => {
                (StatusCode::BAD_REQUEST, "Insufficient funds".to_string())
            }
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Database(e) => {
                tracing::error!("database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::InternalError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

impl From<UserServiceError> for ApiError {
    fn from(err: UserServiceError) -> Self {
        match err {
            UserServiceError::EmailTaken => ApiError::EmailAlreadyExists,
            UserServiceError::UserNotFound => ApiError::UserNotFound,
            UserServiceError::HashingError(_) => ApiError::InternalError,
            UserServiceError::RepositoryError(e) => e.into(),
        }
    }
}

impl From<AuthServiceError> for ApiError {
    fn from(err: AuthServiceError) -> Self {
        match err {
            AuthServiceError::InvalidCredentials => ApiError::InvalidCredentials,
            AuthServiceError::TokenError(_) => ApiError::InternalError,
            AuthServiceError::RepositoryError(e) => e.into(),
        }
    }
}

impl From<StatementServiceError> for ApiError {
    fn from(err: StatementServiceError) -> Self {
        match err {
            StatementServiceError::UserNotFound => ApiError::UserNotFound,
            StatementServiceError::StatementNotFound => ApiError::StatementNotFound,
            StatementServiceError::InsufficientFunds => ApiError::InsufficientFunds,
            StatementServiceError::NegativeAmount => {
                ApiError::Validation("Amount must not be negative".to_string())
            }
            StatementServiceError::RepositoryError(e) => e.into(),
        }
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Database(e) => ApiError::Database(e),
            RepositoryError::NotFound => ApiError::UserNotFound,
            RepositoryError::AlreadyExists => ApiError::EmailAlreadyExists,
            RepositoryError::InsufficientFunds => ApiError::InsufficientFunds,
        }
    }
}

/// Bearer-token failures raised by the authentication middleware.
#[derive(Debug)]
pub enum AuthError {
    MissingAuthorizationHeader,
    InvalidAuthorizationFormat,
    InvalidToken,
    ExpiredToken,
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::MissingAuthorizationHeader => write!(f, "JWT token is missing!"),
            AuthError::InvalidAuthorizationFormat => {
                write!(f, "Authorization header must be 'Bearer <token>'")
            }
            AuthError::InvalidToken => write!(f, "JWT invalid token!"),
            AuthError::ExpiredToken => write!(f, "JWT token has expired!"),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": message })),
        )
            .into_response()
    }
}
