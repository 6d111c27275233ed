//! New Session negotiation facade.
//!
//! The [`Negotiator`] holds the endpoint's [`ImplementationCapabilities`]
//! and runs capability processing for each New Session request.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use webdriver_capabilities::{ImplementationCapabilities, Negotiator};
//!
//! # fn example() -> webdriver_capabilities::Result<()> {
//! let negotiator = Negotiator::new(
//!     ImplementationCapabilities::builder()
//!         .browser_name("ladybird")
//!         .browser_version("1.0")
//!         .build()?,
//! );
//!
//! let capabilities = negotiator.process(&json!({
//!     "capabilities": {"firstMatch": [{"browserName": "chrome"}, {"browserName": "ladybird"}]}
//! }))?;
//! assert_eq!(capabilities.browser_name(), Some("ladybird"));
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::result::Result as StdResult;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info};

use crate::capabilities::{Capabilities, process_capabilities};
use crate::error::Result;
use crate::protocol::{ErrorResponse, NewSessionResponse};

use super::implementation::ImplementationCapabilities;

// ============================================================================
// Negotiator
// ============================================================================

/// Capability negotiator for one endpoint.
///
/// Cloning is cheap; clones share the same implementation capabilities.
#[derive(Clone)]
pub struct Negotiator {
    /// Shared endpoint configuration.
    implementation: Arc<ImplementationCapabilities>,
}

// ============================================================================
// Negotiator - Display
// ============================================================================

impl fmt::Debug for Negotiator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Negotiator")
            .field("browser_name", &self.implementation.browser_name())
            .field("browser_version", &self.implementation.browser_version())
            .field("platform_name", &self.implementation.platform_name())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Negotiator - Public API
// ============================================================================

impl Negotiator {
    /// Creates a negotiator for the given endpoint.
    #[inline]
    #[must_use]
    pub fn new(implementation: ImplementationCapabilities) -> Self {
        Self {
            implementation: Arc::new(implementation),
        }
    }

    /// Returns the endpoint's implementation capabilities.
    #[inline]
    #[must_use]
    pub fn implementation(&self) -> &ImplementationCapabilities {
        &self.implementation
    }

    /// Processes decoded New Session parameters.
    ///
    /// # Errors
    ///
    /// See [`process_capabilities`].
    pub fn process(&self, parameters: &Value) -> Result<Capabilities> {
        let result = process_capabilities(parameters, &self.implementation);

        match &result {
            Ok(capabilities) => info!(
                count = capabilities.len(),
                browser_name = %self.implementation.browser_name(),
                "Negotiated session capabilities"
            ),
            Err(e) => debug!(error = %e, "Capability negotiation failed"),
        }

        result
    }

    /// Processes New Session parameters from raw JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::Error::Json) if the text is not JSON,
    /// otherwise see [`process_capabilities`].
    pub fn process_str(&self, text: &str) -> Result<Capabilities> {
        let parameters: Value = serde_json::from_str(text)?;
        self.process(&parameters)
    }

    /// Processes parameters and builds the wire response.
    ///
    /// `session_id` is assigned by the caller's session construction.
    ///
    /// # Errors
    ///
    /// Returns the standard error response when negotiation fails.
    pub fn respond(
        &self,
        parameters: &Value,
        session_id: impl Into<String>,
    ) -> StdResult<NewSessionResponse, ErrorResponse> {
        let capabilities = self.process(parameters)?;
        Ok(NewSessionResponse::new(session_id, capabilities))
    }
}

// ============================================================================
// Tests
// ============================================================================
