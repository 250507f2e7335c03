//! Error taxonomy for the relay.
//!
//! Every failure surfaced to a caller maps to exactly one of these variants.
//! The variant is the terminal step of the pipeline: the `ResponseError` impl
//! serializes it as `{"code", "message"}` with the matching HTTP status.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RelayError {
    #[error("Invalid request")]
    InvalidRequest,

    #[error("AI service timeout")]
    AiTimeout,

    #[error("Invalid AI response")]
    AiResponseInvalid,

    #[error("AI service error")]
    AiServiceError,

    #[error("Internal server error")]
    InternalError,
}

pub type RelayResult<T> = Result<T, RelayError>;

impl RelayError {
    /// Stable code string used in the error body.
    pub fn code(&self) -> &'static str {
        match self {
            RelayError::InvalidRequest => "INVALID_REQUEST",
            RelayError::AiTimeout => "AI_TIMEOUT",
            RelayError::AiResponseInvalid => "AI_RESPONSE_INVALID",
            RelayError::AiServiceError => "AI_SERVICE_ERROR",
            RelayError::InternalError => "INTERNAL_ERROR",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::InvalidRequest => StatusCode::BAD_REQUEST,
            RelayError::AiTimeout => StatusCode::GATEWAY_TIMEOUT,
            RelayError::AiResponseInvalid => StatusCode::BAD_GATEWAY,
            RelayError::AiServiceError => StatusCode::BAD_GATEWAY,
            RelayError::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Transport failures collapse into the taxonomy: timeouts, body-decode
/// failures, and upstream error statuses keep their own codes; everything
/// else (connect refused, DNS, ...) maps to `InternalError`.
impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RelayError::AiTimeout
        } else if err.is_decode() {
            RelayError::AiResponseInvalid
        } else if err.is_status() {
            RelayError::AiServiceError
        } else {
            RelayError::InternalError
        }
    }
}

impl actix_web::ResponseError for RelayError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status()).json(json!({
            "code": self.code(),
            "message": self.to_string(),
        }))
    }
}
