use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
///
/// Every handler returns `Result<HttpResponse, AppError>`; the
/// `ResponseError` impl below is the single place where error kinds are
/// mapped to HTTP status codes and response bodies.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Request violates a precondition (e.g. an id supplied on create).
    /// Carries a machine-readable error code and the offending field.
    #[error("Validation error: {message}")]
    Validation {
        code: String,
        field: String,
        message: String,
    },

    /// Requested resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Database operation errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration errors
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Validation {
                code,
                field,
                message,
            } => HttpResponse::BadRequest().json(serde_json::json!({
                "error": {
                    "code": code,
                    "field": field,
                    "message": message,
                }
            })),
            // Not-found responses carry an empty body
            AppError::NotFound(_) => HttpResponse::NotFound().finish(),
            _ => {
                let status_code = self.status_code();
                HttpResponse::build(status_code).json(serde_json::json!({
                    "error": {
                        "code": status_code.as_u16(),
                        "message": self.to_string(),
                    }
                }))
            }
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Migration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(
        code: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        AppError::Validation {
            code: code.into(),
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound(resource.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
