//! Error taxonomy for API operations.
//!
//! Every non-2xx response becomes one of the structured variants
//! ([`Error::Authentication`], [`Error::NotFound`], [`Error::Validation`],
//! [`Error::Api`]). A call that never received a response surfaces as
//! [`Error::Transport`] carrying the underlying [`HttpError`] untouched.

use http::StatusCode;
use serde_json::Value;
use thiserror::Error;

use crate::transport::HttpError;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

/// Error type for FetcherPay operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The API key was rejected (401).
    #[error("{message}")]
    Authentication {
        /// Provider message
        message: String,
    },

    /// The addressed resource does not exist (404).
    #[error("{message}")]
    NotFound {
        /// Provider message
        message: String,
    },

    /// The request was rejected as invalid (422).
    #[error("{message}")]
    Validation {
        /// Provider message
        message: String,
        /// Offending request field, when the provider names one
        param: Option<String>,
    },

    /// Any other non-2xx response.
    #[error("{message} ({error_type}, HTTP {status})")]
    Api {
        /// Provider message
        message: String,
        /// Provider error type, `api_error` when absent
        error_type: String,
        /// HTTP status code
        status: u16,
        /// Offending request field, when the provider names one
        param: Option<String>,
        /// Provider error code
        code: Option<String>,
    },

    /// No response was received (DNS, connection, timeout).
    #[error("Transport failure: {0}")]
    Transport(#[from] HttpError),

    /// A 2xx body did not match the operation's result shape.
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// A request body or query could not be serialized.
    #[error("Failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    /// The signature on a webhook payload did not verify.
    #[error("Webhook signature verification failed")]
    InvalidSignature,

    /// The configured base URL cannot be used.
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// The rejected URL string
        url: String,
        /// Reason for rejection
        reason: String,
    },

    /// The API key contains characters not allowed in a header.
    #[error("API key is not a valid header value")]
    InvalidApiKey,

    /// The idempotency key contains characters not allowed in a header.
    #[error("Invalid idempotency key '{0}'")]
    InvalidIdempotencyKey(String),

    /// A resource id is empty or would be resolved away as `.` or `..`.
    #[error("Invalid resource id '{0}'")]
    InvalidId(String),
}

/// Well-known provider error types.
pub mod error_type {
    /// Type reported for 401 responses.
    pub const AUTHENTICATION: &str = "authentication_error";
    /// Type reported for 404 responses.
    pub const NOT_FOUND: &str = "not_found";
    /// Type reported for 422 responses.
    pub const VALIDATION: &str = "validation_error";
    /// Fallback type for other statuses.
    pub const API: &str = "api_error";
}

const DEFAULT_AUTHENTICATION_MESSAGE: &str = "Authentication failed";
const DEFAULT_NOT_FOUND_MESSAGE: &str = "Resource not found";
const DEFAULT_VALIDATION_MESSAGE: &str = "Validation failed";
const DEFAULT_API_MESSAGE: &str = "An error occurred";

impl Error {
    /// HTTP status of a structured API error; `None` for local and
    /// transport failures.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Authentication { .. } => Some(401),
            Self::NotFound { .. } => Some(404),
            Self::Validation { .. } => Some(422),
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Provider error type of a structured API error.
    #[must_use]
    pub fn error_type(&self) -> Option<&str> {
        match self {
            Self::Authentication { .. } => Some(error_type::AUTHENTICATION),
            Self::NotFound { .. } => Some(error_type::NOT_FOUND),
            Self::Validation { .. } => Some(error_type::VALIDATION),
            Self::Api { error_type, .. } => Some(error_type),
            _ => None,
        }
    }

    /// Provider message of a structured API error.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Authentication { message }
            | Self::NotFound { message }
            | Self::Validation { message, .. }
            | Self::Api { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Offending request field, for validation and generic API errors.
    #[must_use]
    pub fn param(&self) -> Option<&str> {
        match self {
            Self::Validation { param, .. } | Self::Api { param, .. } => param.as_deref(),
            _ => None,
        }
    }

    /// Provider error code, for generic API errors.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// Returns true if no response was received.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

/// Maps a non-2xx response to its structured error.
///
/// Total over every non-2xx status: 401, 404 and 422 get dedicated
/// variants and everything else becomes [`Error::Api`]. Fields come from
/// the body's `error` object and are read one at a time, so a field of an
/// unexpected shape only loses that field. A missing message falls back to
/// the default for the status.
#[must_use]
pub fn error_from_response(status: StatusCode, body: &[u8]) -> Error {
    let envelope = serde_json::from_slice::<Value>(body).ok();
    let error = envelope.as_ref().and_then(|v| v.get("error"));
    let field = |key: &str| error.and_then(|e| e.get(key)).and_then(text);
    let message = |default: &str| field("message").unwrap_or_else(|| default.to_string());

    match status {
        StatusCode::UNAUTHORIZED => Error::Authentication {
            message: message(DEFAULT_AUTHENTICATION_MESSAGE),
        },
        StatusCode::NOT_FOUND => Error::NotFound {
            message: message(DEFAULT_NOT_FOUND_MESSAGE),
        },
        StatusCode::UNPROCESSABLE_ENTITY => Error::Validation {
            message: message(DEFAULT_VALIDATION_MESSAGE),
            param: field("param"),
        },
        _ => Error::Api {
            message: message(DEFAULT_API_MESSAGE),
            error_type: field("type").unwrap_or_else(|| error_type::API.to_string()),
            status: status.as_u16(),
            param: field("param"),
            code: field("code"),
        },
    }
}

/// Strings are taken as-is and numbers are rendered as text.
fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
