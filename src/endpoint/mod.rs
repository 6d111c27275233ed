//! Remote end configuration and negotiation entry point.
//!
//! # Components
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ImplementationCapabilities`] | What the endpoint can offer |
//! | [`ImplementationCapabilitiesBuilder`] | Fluent configuration builder |
//! | [`Negotiator`] | Processes New Session requests against the endpoint |
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use webdriver_capabilities::{ImplementationCapabilities, Negotiator};
//!
//! let negotiator = Negotiator::new(
//!     ImplementationCapabilities::builder()
//!         .browser_name("ladybird")
//!         .browser_version("1.0")
//!         .build()
//!         .unwrap(),
//! );
//!
//! let capabilities = negotiator.process(&json!({"capabilities": {}})).unwrap();
//! assert!(capabilities.is_empty());
//! ```

// ============================================================================
// Submodules
// ============================================================================

/// Fluent builder for implementation capabilities.
pub mod builder;

/// Endpoint identity and feature support.
pub mod implementation;

/// New Session negotiation facade.
pub mod negotiator;

// ============================================================================
// Re-exports
// ============================================================================

pub use builder::ImplementationCapabilitiesBuilder;
pub use implementation::ImplementationCapabilities;
pub use negotiator::Negotiator;
