use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("{0}")]
    MissingContact(String),

    #[error("{0}")]
    InvalidContactFormat(String),

    #[error("System Error: {0}")]
    ConfigurationError(String),

    #[error("Database Error: {0}")]
    LeadSinkFailure(String),

    #[error("AI Error: {0}")]
    CompletionServiceFailure(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

/// How a front end should present a failed submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::MissingContact(_) => "MISSING_CONTACT",
            AppError::InvalidContactFormat(_) => "INVALID_CONTACT_FORMAT",
            AppError::ConfigurationError(_) => "CONFIGURATION_ERROR",
            AppError::LeadSinkFailure(_) => "LEAD_SINK_FAILURE",
            AppError::CompletionServiceFailure(_) => "COMPLETION_SERVICE_FAILURE",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            AppError::InvalidContactFormat(_) => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    pub kind: &'static str,
    pub severity: Severity,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingContact(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidContactFormat(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::ConfigurationError(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::LeadSinkFailure(_) => StatusCode::BAD_GATEWAY,
            AppError::CompletionServiceFailure(_) => StatusCode::BAD_GATEWAY,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
            kind: self.error_code(),
            severity: self.severity(),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InternalError(format!("JSON error: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;
