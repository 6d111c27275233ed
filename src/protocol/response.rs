//! New Session response bodies.
//!
//! Defines the success and error bodies returned to the local end
//! after capability processing.

// ============================================================================
// Imports
// ============================================================================

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::capabilities::Capabilities;
use crate::error::{ErrorCode, Result};

// ============================================================================
// NewSessionResponse
// ============================================================================

/// A successful New Session response.
///
/// # Format
///
/// ```json
/// {
///   "value": {
///     "sessionId": "uuid",
///     "capabilities": { ... }
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewSessionResponse {
    /// Response payload.
    pub value: NewSessionBody,
}

/// Payload of a [`NewSessionResponse`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewSessionBody {
    /// Identifier assigned by session construction.
    #[serde(rename = "sessionId")]
    pub session_id: String,

    /// Negotiated capabilities.
    pub capabilities: Capabilities,
}

impl NewSessionResponse {
    /// Creates a response for a newly constructed session.
    #[inline]
    #[must_use]
    pub fn new(session_id: impl Into<String>, capabilities: Capabilities) -> Self {
        Self {
            value: NewSessionBody {
                session_id: session_id.into(),
                capabilities,
            },
        }
    }

    /// Serializes the response to a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::Error::Json) if serialization fails.
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

// ============================================================================
// ErrorResponse
// ============================================================================

/// A WebDriver error response.
///
/// # Format
///
/// ```json
/// {
///   "value": {
///     "error": "invalid argument",
///     "message": "Unrecognized capability: foo",
///     "stacktrace": ""
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload.
    pub value: ErrorBody,
}

/// Standard error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Error code.
    pub error: ErrorCode,

    /// Error message.
    pub message: String,

    /// Stack trace (always empty, capability processing has none to report).
    #[serde(default)]
    pub stacktrace: String,
}

impl ErrorBody {
    /// Creates an error body with an empty stack trace.
    #[inline]
    #[must_use]
    pub fn new(error: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            error,
            message: message.into(),
            stacktrace: String::new(),
        }
    }

    /// Returns the HTTP status paired with the error code.
    #[inline]
    #[must_use]
    pub fn http_status(&self) -> u16 {
        self.error.http_status()
    }

    /// Wraps the body in its top-level `value` member.
    #[inline]
    #[must_use]
    pub fn into_response(self) -> ErrorResponse {
        ErrorResponse { value: self }
    }
}

impl From<crate::Error> for ErrorResponse {
    fn from(err: crate::Error) -> Self {
        err.to_body().into_response()
    }
}

// ============================================================================
// Tests
// ============================================================================
