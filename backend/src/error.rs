//! API error taxonomy and its translation to HTTP responses.
//!
//! Every handler returns `Result<HttpResponse, ApiError>`; the variants here
//! map one-to-one onto the wire shapes the front-end expects: a JSON body of
//! `{"error": "..."}` with the matching status code. Unexpected failures are
//! logged with their cause at the point of capture and surfaced to clients
//! as an opaque 500.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use std::fmt::Display;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body failed to parse as JSON.
    #[error("invalid JSON")]
    MalformedInput,

    /// A referenced identifier does not exist.
    #[error("{0}")]
    NotFound(String),

    /// No actor reference was supplied by the auth boundary.
    #[error("authentication required")]
    Unauthorized,

    /// The actor lacks the admin claim.
    #[error("Admin access only")]
    Forbidden,

    /// An external capability this endpoint depends on is not wired in.
    #[error("{0}")]
    Unavailable(String),

    /// Anything else; the cause was already logged.
    #[error("internal server error")]
    Internal,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Log the underlying cause and return the opaque variant.
    pub fn internal(cause: impl Display) -> Self {
        log::error!("internal error: {cause}");
        Self::Internal
    }
}

impl From<rusqlite::Error> for ApiError {
    fn from(err: rusqlite::Error) -> Self {
        Self::internal(err)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MalformedInput => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Unavailable(_) | Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "error": self.to_string() }))
    }
}
