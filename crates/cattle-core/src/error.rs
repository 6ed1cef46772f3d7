//! Error types for the cattle toolkit.
//!
//! A single error type is shared by every layer. The generic client never
//! wraps or remaps dispatcher errors, so whatever a dispatcher returns is
//! exactly what the caller sees.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The unified error type for cattle operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The server answered with a non-success status.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Input validation errors (bad URL, unknown filter, missing id).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// A payload could not be encoded or a response could not be decoded.
    #[error("serialization error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The server's schema document has no entry for this type.
    #[error("unknown resource type '{0}'")]
    UnknownType(String),

    /// The schema for this type does not allow the requested operation.
    #[error("resource type '{type_name}' is not {operation}")]
    Unsupported {
        type_name: String,
        operation: &'static str,
    },

    /// A resource or schema is missing a link needed to route the call.
    #[error("missing '{link}' link on {type_name}")]
    MissingLink { type_name: String, link: String },

    /// The named action is not offered on this resource or collection.
    #[error("action '{action}' is not available on {type_name}")]
    ActionUnavailable { type_name: String, action: String },

    /// A resource did not leave the transitioning state in time.
    #[error("timed out after {elapsed:?} waiting for {type_name} '{id}'")]
    Timeout {
        type_name: String,
        id: String,
        elapsed: Duration,
    },

    /// A resource finished transitioning in an error state.
    #[error("{type_name} '{id}' failed to settle: {message}")]
    Transitioning {
        type_name: String,
        id: String,
        message: String,
    },
}

impl Error {
    /// Check if this error is the server reporting a missing resource.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Api(api) if api.is_not_found())
    }

    /// Check if this error is an optimistic-concurrency conflict.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Error::Api(api) if api.status == 409)
    }

    /// Returns the API error body, if the server produced one.
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Error::Api(api) => Some(api),
            _ => None,
        }
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// TLS/SSL error.
    #[error("TLS error: {message}")]
    Tls { message: String },

    /// Request timed out.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Error body returned by the API for non-success responses.
///
/// The server answers failures with a JSON object of `type: "error"`. When
/// the body is missing or not JSON only `status` is filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// HTTP status code.
    #[serde(default)]
    pub status: u16,
    /// Machine-readable error code, e.g. `NotFound` or `InvalidBodyContent`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Human-readable message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Field the error refers to, for validation failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
}

impl ApiError {
    /// Create an error carrying only a status code.
    pub fn from_status(status: u16) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    /// Check if this error reports a missing resource.
    pub fn is_not_found(&self) -> bool {
        self.status == 404 || self.code.as_deref() == Some("NotFound")
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref code) = self.code {
            write!(f, " [{}]", code)?;
        }
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        if let Some(ref field) = self.field_name {
            write!(f, " (field: {})", field)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API URL format.
    #[error("invalid API URL '{value}': {reason}")]
    Url { value: String, reason: String },

    /// A list filter the type's schema does not declare.
    #[error("'{key}' is not a searchable field of {type_name}")]
    Filter { key: String, type_name: String },

    /// The resource has no id, so it cannot be addressed.
    #[error("{type_name} has no id")]
    MissingId { type_name: String },

    /// Generic invalid input.
    #[error("{message}")]
    Other { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_includes_all_parts() {
        let err = ApiError {
            status: 422,
            code: Some("MissingRequired".into()),
            message: Some("name is required".into()),
            field_name: Some("name".into()),
        };
        assert_eq!(
            err.to_string(),
            "HTTP 422 [MissingRequired]: name is required (field: name)"
        );
    }

    #[test]
    fn not_found_by_status_or_code() {
        assert!(Error::from(ApiError::from_status(404)).is_not_found());

        let by_code = ApiError {
            status: 400,
            code: Some("NotFound".into()),
            ..ApiError::default()
        };
        assert!(by_code.is_not_found());
        assert!(!Error::from(ApiError::from_status(500)).is_not_found());
    }

    #[test]
    fn conflict_detection() {
        assert!(Error::from(ApiError::from_status(409)).is_conflict());
        assert!(!Error::UnknownType("cluster".into()).is_conflict());
    }

    #[test]
    fn api_error_parses_wire_body() {
        let body = serde_json::json!({
            "type": "error",
            "status": 404,
            "code": "NotFound",
            "message": "clusters.management.cattle.io \"c-missing\" not found"
        });
        let err: ApiError = serde_json::from_value(body).unwrap();
        assert_eq!(err.status, 404);
        assert_eq!(err.code.as_deref(), Some("NotFound"));
        assert!(err.field_name.is_none());
    }
}
