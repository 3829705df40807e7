use axum::http::StatusCode;
use serde::Serialize;

use crate::infer::ApiError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Bad Request: {0}")]
    BadRequest(Box<str>),
    #[error("Upstream API error")]
    UpstreamApi { details: Box<str> },
    #[error("Invalid upstream response")]
    InvalidUpstreamResponse,
    #[error("Upstream timed out")]
    UpstreamTimeout,
    #[error("Upstream unreachable")]
    UpstreamUnreachable,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::ErrorResponse { details, .. } => Error::UpstreamApi { details },
            ApiError::ParseFailed(_) | ApiError::NoChoices => Error::InvalidUpstreamResponse,
            ApiError::RequestFailed(err) if err.is_timeout() => Error::UpstreamTimeout,
            ApiError::RequestFailed(_) => Error::UpstreamUnreachable,
        }
    }
}

#[derive(Serialize)]
struct HttpErrorBody {
    error: Box<str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Box<str>>,
}

impl axum::response::IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let (status, error, details): (StatusCode, Box<str>, Option<Box<str>>) = match self {
            Error::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            Error::UpstreamApi { details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Groq API error".into(),
                Some(details),
            ),
            Error::InvalidUpstreamResponse => (
                StatusCode::BAD_GATEWAY,
                "Invalid response from completion API".into(),
                None,
            ),
            Error::UpstreamTimeout => (
                StatusCode::GATEWAY_TIMEOUT,
                "Completion API timed out".into(),
                None,
            ),
            Error::UpstreamUnreachable => (
                StatusCode::BAD_GATEWAY,
                "Completion API unreachable".into(),
                None,
            ),
            Error::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".into(),
                None,
            ),
        };

        (status, axum::Json(HttpErrorBody { error, details })).into_response()
    }
}
