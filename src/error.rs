use std::{error::Error, fmt::Debug};

use actix_web::{http::StatusCode, HttpResponse, ResponseError};

use crate::{response::ApiResponse, utils::{error_fmt_chain, QueryError}};

/// Every failure a handler can return. Client side failures carry the message
/// shown to the caller; unexpected failures are logged and hidden behind a
/// generic message.
#[derive(thiserror::Error)]
pub enum ApiError{
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("Something went wrong, please try again later")]
    UnexpectedError(#[from] anyhow::Error)
}

impl ApiError {
    /// Maps a unique index violation to a conflict with `message`,
    /// anything else is unexpected.
    pub fn conflict_or_unexpected(err: QueryError, message: &str) -> ApiError{
        if err.is_unique_violation() {
            ApiError::Conflict(message.to_string())
        } else {
            ApiError::UnexpectedError(err.into())
        }
    }
}

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        ApiError::UnexpectedError(err.into())
    }
}

impl Debug for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        match self {
            ApiError::UnexpectedError(e) => write!(f, "\n\tCaused By:\n\t{:?}", e),
            _ => error_fmt_chain(f, &self.source())
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        if let ApiError::UnexpectedError(_) = self {
            tracing::error!(error = ?self, "Request failed");
        }

        HttpResponse::build(self.status_code())
            .json(ApiResponse::<()>::failure(self.to_string()))
    }
}
