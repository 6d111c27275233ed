//! Capability processing for the New Session command.
//!
//! This module turns a client's requested session parameters into a single
//! negotiated capability set, or rejects the request.
//!
//! # Pipeline
//!
//! | Stage | Function | Failure |
//! |-------|----------|---------|
//! | Validate | [`validate_capabilities`] | `invalid argument` |
//! | Merge | [`merge_capabilities`] | `invalid argument` |
//! | Match | [`match_capabilities`] | `session not created` |
//! | Orchestrate | [`process_capabilities`] | either |
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use webdriver_capabilities::{ImplementationCapabilities, process_capabilities};
//!
//! let implementation = ImplementationCapabilities::builder()
//!     .browser_name("ladybird")
//!     .browser_version("1.0")
//!     .build()
//!     .unwrap();
//!
//! let parameters = json!({
//!     "capabilities": {
//!         "alwaysMatch": {"pageLoadStrategy": "eager"},
//!         "firstMatch": [{"browserName": "chrome"}, {"browserName": "ladybird"}]
//!     }
//! });
//!
//! let capabilities = process_capabilities(&parameters, &implementation).unwrap();
//! assert_eq!(capabilities.browser_name(), Some("ladybird"));
//! ```

// ============================================================================
// Submodules
// ============================================================================

/// Page load strategy and prompt handler keywords.
pub mod keywords;

/// Matching candidates against the endpoint.
pub mod matching;

/// Merging required and first-match sets.
pub mod merge;

/// Recognized capability and request member names.
pub mod names;

/// Session parameter processing.
pub mod process;

/// Validated capability set type.
pub mod set;

/// Per-capability validation.
pub mod validate;

// ============================================================================
// Re-exports
// ============================================================================

pub use keywords::{PageLoadStrategy, UnhandledPromptBehavior};
pub use matching::match_capabilities;
pub use merge::merge_capabilities;
pub use process::process_capabilities;
pub use set::Capabilities;
pub use validate::validate_capabilities;
