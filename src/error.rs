//! Error types for WebDriver capability processing.
//!
//! This module defines all error types used throughout the crate.
//! Error codes follow the W3C WebDriver error code table.
//!
//! # Usage
//!
//! All fallible operations return [`Result<T>`] which uses [`Error`]:
//!
//! ```
//! use serde_json::json;
//! use webdriver_capabilities::{ErrorCode, ImplementationCapabilities, process_capabilities};
//!
//! let implementation = ImplementationCapabilities::builder()
//!     .browser_name("ladybird")
//!     .browser_version("1.0")
//!     .build()
//!     .unwrap();
//!
//! let err = process_capabilities(&json!({ "capabilities": [] }), &implementation).unwrap_err();
//! assert_eq!(err.code(), ErrorCode::InvalidArgument);
//! ```
//!
//! # Error Categories
//!
//! | Category | Variants | Wire code |
//! |----------|----------|-----------|
//! | Request | [`Error::InvalidArgument`] | `invalid argument` |
//! | Negotiation | [`Error::SessionNotCreated`] | `session not created` |
//! | Configuration | [`Error::Config`] | `invalid argument` |
//! | External | [`Error::Json`] | `invalid argument` |

// ============================================================================
// Imports
// ============================================================================

use std::result::Result as StdResult;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::protocol::ErrorBody;

// ============================================================================
// Result Alias
// ============================================================================

/// Result type alias using crate [`enum@Error`].
///
/// All fallible operations in this crate return this type.
pub type Result<T> = StdResult<T, Error>;

// ============================================================================
// ErrorCode
// ============================================================================

/// WebDriver error code reported to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// The request was malformed or asked for something unsupported.
    #[serde(rename = "invalid argument")]
    InvalidArgument,

    /// The request was well formed but no session could be negotiated.
    #[serde(rename = "session not created")]
    SessionNotCreated,
}

impl ErrorCode {
    /// Returns the wire string for this code.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "invalid argument",
            Self::SessionNotCreated => "session not created",
        }
    }

    /// Returns the HTTP status paired with this code.
    #[inline]
    #[must_use]
    pub fn http_status(&self) -> u16 {
        match self {
            Self::InvalidArgument => 400,
            Self::SessionNotCreated => 500,
        }
    }
}

// ============================================================================
// Error Enum
// ============================================================================

/// Main error type for the crate.
///
/// Each variant includes a message naming the offending capability
/// where one applies.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Request Errors
    // ========================================================================
    /// Invalid argument in the session parameters.
    ///
    /// Returned for malformed requests, per-capability validation failures,
    /// merge collisions and unrecognized capability names.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument.
        message: String,
    },

    // ========================================================================
    // Negotiation Errors
    // ========================================================================
    /// No candidate capability set could be satisfied.
    #[error("Session not created: {message}")]
    SessionNotCreated {
        /// Description of the failure.
        message: String,
    },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Configuration error.
    ///
    /// Returned when implementation capabilities are incomplete.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    // ========================================================================
    // External Errors
    // ========================================================================
    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Error Constructors
// ============================================================================

impl Error {
    /// Creates an invalid argument error.
    #[inline]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Creates a session not created error.
    #[inline]
    pub fn session_not_created(message: impl Into<String>) -> Self {
        Self::SessionNotCreated {
            message: message.into(),
        }
    }

    /// Creates a configuration error.
    #[inline]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

// ============================================================================
// Error Accessors
// ============================================================================

impl Error {
    /// Returns the WebDriver error code for this error.
    #[inline]
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::SessionNotCreated { .. } => ErrorCode::SessionNotCreated,
            Self::InvalidArgument { .. } | Self::Config { .. } | Self::Json(_) => {
                ErrorCode::InvalidArgument
            }
        }
    }

    /// Returns the human-readable message without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::InvalidArgument { message }
            | Self::SessionNotCreated { message }
            | Self::Config { message } => message.clone(),
            Self::Json(e) => e.to_string(),
        }
    }

    /// Builds the standard error body for this error.
    #[must_use]
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody::new(self.code(), self.message())
    }
}

// ============================================================================
// Error Predicates
// ============================================================================

impl Error {
    /// Returns `true` if this is an invalid argument error.
    #[inline]
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        self.code() == ErrorCode::InvalidArgument
    }

    /// Returns `true` if this is a session not created error.
    #[inline]
    #[must_use]
    pub fn is_session_not_created(&self) -> bool {
        matches!(self, Self::SessionNotCreated { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_argument("Unrecognized capability: foo");
        assert_eq!(
            err.to_string(),
            "Invalid argument: Unrecognized capability: foo"
        );
    }

    #[test]
    fn test_session_not_created_display() {
        let err = Error::session_not_created("No matching capabilities");
        assert_eq!(
            err.to_string(),
            "Session not created: No matching capabilities"
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            Error::invalid_argument("x").code(),
            ErrorCode::InvalidArgument
        );
        assert_eq!(
            Error::session_not_created("x").code(),
            ErrorCode::SessionNotCreated
        );
        assert_eq!(Error::config("x").code(), ErrorCode::InvalidArgument);
    }

    #[test]
    fn test_error_code_as_str() {
        assert_eq!(ErrorCode::InvalidArgument.as_str(), "invalid argument");
        assert_eq!(ErrorCode::SessionNotCreated.as_str(), "session not created");
    }

    #[test]
    fn test_error_code_serialization() {
        assert_eq!(
            serde_json::to_string(&ErrorCode::InvalidArgument).unwrap(),
            r#""invalid argument""#
        );
        assert_eq!(
            serde_json::to_string(&ErrorCode::SessionNotCreated).unwrap(),
            r#""session not created""#
        );
    }

    #[test]
    fn test_http_status() {
        assert_eq!(ErrorCode::InvalidArgument.http_status(), 400);
        assert_eq!(ErrorCode::SessionNotCreated.http_status(), 500);
    }

    #[test]
    fn test_predicates() {
        let invalid = Error::invalid_argument("x");
        let not_created = Error::session_not_created("x");

        assert!(invalid.is_invalid_argument());
        assert!(!invalid.is_session_not_created());
        assert!(not_created.is_session_not_created());
        assert!(!not_created.is_invalid_argument());
    }

    #[test]
    fn test_message_strips_prefix() {
        let err = Error::invalid_argument("Unable to merge capability browserName");
        assert_eq!(err.message(), "Unable to merge capability browserName");
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<String>("invalid").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_to_body() {
        let body = Error::session_not_created("No matching capabilities").to_body();
        assert_eq!(body.error, ErrorCode::SessionNotCreated);
        assert_eq!(body.message, "No matching capabilities");
    }
}
