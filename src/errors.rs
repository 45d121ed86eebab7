use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// Client-caused failures. Each variant maps to a 400 response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title is required")]
    EmptyTitle,

    #[error("Question text is required")]
    MissingText,

    #[error("Question text must be at most {max} characters")]
    TextTooLong { max: usize },

    #[error("At least two options are required")]
    InsufficientOptions,

    #[error("Every option must have text")]
    MissingOptionText,

    #[error("Exactly one option must be correct")]
    InvalidCorrectCount,

    #[error("Question already exists in this quiz")]
    DuplicateQuestion,

    #[error("{0} must be an array")]
    NotAnArray(&'static str),

    #[error("Text or options are required")]
    NothingToUpdate,

    #[error("Malformed request body: {0}")]
    MalformedBody(String),
}

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Quiz not found: {0}")]
    QuizNotFound(String),

    #[error("Question not found: {0}")]
    QuestionNotFound(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::QuizNotFound(_) | AppError::QuestionNotFound(_) => "NOT_FOUND",
            AppError::StorageUnavailable(_) => "STORAGE_UNAVAILABLE",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Message safe to hand back to a client. Server-side failures never
    /// leak their underlying cause.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation(err) => err.to_string(),
            AppError::QuizNotFound(_) => "Quiz not found".to_string(),
            AppError::QuestionNotFound(_) => "Question not found".to_string(),
            AppError::StorageUnavailable(_) | AppError::InternalError(_) => {
                "Internal server error".to_string()
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::QuizNotFound(_) | AppError::QuestionNotFound(_) => StatusCode::NOT_FOUND,
            AppError::StorageUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("[{}] {}", self.error_code(), self);
        }

        HttpResponse::build(status).json(ErrorResponse {
            error: self.public_message(),
            code: status.as_u16(),
        })
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::StorageUnavailable(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for AppError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        AppError::StorageUnavailable(format!("BSON serialization error: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;
