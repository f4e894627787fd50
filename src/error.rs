use sea_orm::DbErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")] Database(DbErr),

    #[error("Database connection unavailable")]
    ConnectionUnavailable,

    #[error("Invalid input: {0}")] InvalidInput(String),

    #[error("{0} not found")] NotFound(String),

    #[error("{0} already exists")] Duplicate(String),

    #[error("External data unavailable: {0}")] ExternalDataUnavailable(String),

    #[error("Timed out: {0}")] Timeout(String),

    #[error("{0} is not implemented yet")] NotImplemented(String),

    #[error("Configuration error: {0}")] Config(String),

    #[error("Internal error: {0}")] Internal(String),
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => AppError::ConnectionUnavailable,
            other => AppError::Database(other),
        }
    }
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(serde::Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::ConnectionUnavailable => "SERVICE_UNAVAILABLE",
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Duplicate(_) => "DUPLICATE",
            AppError::ExternalDataUnavailable(_) => "EXTERNAL_DATA_UNAVAILABLE",
            AppError::Timeout(_) => "TIMEOUT",
            AppError::NotImplemented(_) => "NOT_IMPLEMENTED",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: ErrorDetail {
                code: self.code().to_string(),
                message: self.to_string(),
            },
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::NotFound(_) => axum::http::StatusCode::NOT_FOUND,
            AppError::InvalidInput(_) => axum::http::StatusCode::BAD_REQUEST,
            AppError::Duplicate(_) => axum::http::StatusCode::CONFLICT,
            AppError::NotImplemented(_) => axum::http::StatusCode::NOT_IMPLEMENTED,
            | AppError::ConnectionUnavailable
            | AppError::ExternalDataUnavailable(_)
            | AppError::Timeout(_) => {
                axum::http::StatusCode::SERVICE_UNAVAILABLE
            }
            _ => axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        };

        let response = self.to_error_response();
        (status, axum::Json(response)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
