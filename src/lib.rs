//! WebDriver Capabilities - New Session capability processing.
//!
//! This library implements the remote end's half of the WebDriver
//! New Session handshake: it turns the client's requested capabilities
//! into one negotiated capability set, or rejects the request.
//!
//! # Architecture
//!
//! Processing runs in three fail-fast stages:
//!
//! - **Validate**: each `alwaysMatch` / `firstMatch` object is checked
//!   against the table of recognized capabilities
//! - **Merge**: every `firstMatch` alternative is combined with
//!   `alwaysMatch`; shared names are rejected
//! - **Match**: merged candidates are tried in order against the
//!   endpoint's [`ImplementationCapabilities`]
//!
//! Everything is synchronous and pure. A [`Negotiator`] can be shared
//! across threads and requests.
//!
//! # Quick Start
//!
//! ```
//! use serde_json::json;
//! use webdriver_capabilities::{ImplementationCapabilities, Negotiator, Result};
//!
//! fn main() -> Result<()> {
//!     let negotiator = Negotiator::new(
//!         ImplementationCapabilities::builder()
//!             .browser_name("ladybird")
//!             .browser_version("1.0")
//!             .platform_name("linux")
//!             .build()?,
//!     );
//!
//!     let capabilities = negotiator.process(&json!({
//!         "capabilities": {
//!             "alwaysMatch": {"acceptInsecureCerts": true},
//!             "firstMatch": [{"browserName": "chrome"}, {"browserName": "ladybird"}]
//!         }
//!     }))?;
//!
//!     assert_eq!(capabilities.browser_name(), Some("ladybird"));
//!     assert_eq!(capabilities.accept_insecure_certs(), Some(true));
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`capabilities`] | Validation, merging, matching and processing |
//! | [`endpoint`] | [`ImplementationCapabilities`] and [`Negotiator`] |
//! | [`error`] | Error types and [`Result`] alias |
//! | [`protocol`] | Wire response bodies |
//! | [`timeouts`] | Timeouts capability configuration |

// ============================================================================
// Modules
// ============================================================================

/// Capability validation, merging, matching and processing.
pub mod capabilities;

/// Endpoint configuration and the negotiation facade.
pub mod endpoint;

/// Error types and result aliases.
///
/// All fallible operations return [`Result<T>`] which uses [`Error`].
pub mod error;

/// WebDriver wire response bodies.
pub mod protocol;

/// Session timeouts configuration.
pub mod timeouts;

// ============================================================================
// Re-exports
// ============================================================================

// Capability types
pub use capabilities::{
    Capabilities, PageLoadStrategy, UnhandledPromptBehavior, match_capabilities,
    merge_capabilities, process_capabilities, validate_capabilities,
};

// Endpoint types
pub use endpoint::{ImplementationCapabilities, ImplementationCapabilitiesBuilder, Negotiator};

// Error types
pub use error::{Error, ErrorCode, Result};

// Protocol types
pub use protocol::{ErrorBody, ErrorResponse, NewSessionResponse};

// Timeouts types
pub use timeouts::TimeoutsConfiguration;
