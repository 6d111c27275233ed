//! Endpoint identity and feature support.
//!
//! [`ImplementationCapabilities`] describes the browser the remote end
//! drives. The matching phase reads it to decide which requested
//! capability sets are satisfiable.
//!
//! # Example
//!
//! ```
//! use webdriver_capabilities::ImplementationCapabilities;
//!
//! let implementation = ImplementationCapabilities::from_json(
//!     r#"{"browserName": "ladybird", "browserVersion": "1.0", "platformName": "linux"}"#,
//! )
//! .unwrap();
//!
//! assert_eq!(implementation.browser_name(), "ladybird");
//! assert!(!implementation.supports_proxy());
//! ```

// ============================================================================
// Imports
// ============================================================================

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::capabilities::Capabilities;
use crate::capabilities::matching::is_satisfiable;
use crate::error::{Error, Result};

use super::builder::ImplementationCapabilitiesBuilder;

// ============================================================================
// ImplementationCapabilities
// ============================================================================

/// Capabilities the endpoint can actually offer.
///
/// Read-only once built; share it across requests freely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImplementationCapabilities {
    /// Browser name, compared case-sensitively.
    browser_name: String,

    /// Browser version, compared case-sensitively.
    browser_version: String,

    /// Platform name, compared ignoring ASCII case.
    #[serde(default = "host_platform")]
    platform_name: String,

    /// Whether a requested proxy can be applied.
    #[serde(default)]
    proxy: bool,
}

// ============================================================================
// ImplementationCapabilities - Constructors
// ============================================================================

impl ImplementationCapabilities {
    /// Creates a configuration builder.
    #[inline]
    #[must_use]
    pub fn builder() -> ImplementationCapabilitiesBuilder {
        ImplementationCapabilitiesBuilder::new()
    }

    /// Creates capabilities from already validated parts.
    pub(crate) fn from_parts(
        browser_name: String,
        browser_version: String,
        platform_name: String,
        proxy: bool,
    ) -> Self {
        Self {
            browser_name,
            browser_version,
            platform_name,
            proxy,
        }
    }

    /// Loads capabilities from JSON configuration text.
    ///
    /// `platformName` defaults to the host platform and `proxy` to `false`.
    ///
    /// # Errors
    ///
    /// - [`Error::Json`] if the text is not a valid configuration object
    /// - [`Error::Config`] if a required field is empty
    pub fn from_json(text: &str) -> Result<Self> {
        let implementation: Self = serde_json::from_str(text)?;
        implementation.validate()?;

        debug!(
            browser_name = %implementation.browser_name,
            browser_version = %implementation.browser_version,
            platform_name = %implementation.platform_name,
            "Loaded implementation capabilities"
        );
        Ok(implementation)
    }
}

// ============================================================================
// ImplementationCapabilities - Accessors
// ============================================================================

impl ImplementationCapabilities {
    /// Returns the browser name.
    #[inline]
    #[must_use]
    pub fn browser_name(&self) -> &str {
        &self.browser_name
    }

    /// Returns the browser version.
    #[inline]
    #[must_use]
    pub fn browser_version(&self) -> &str {
        &self.browser_version
    }

    /// Returns the platform name.
    #[inline]
    #[must_use]
    pub fn platform_name(&self) -> &str {
        &self.platform_name
    }

    /// Returns `true` if requested proxies can be applied.
    #[inline]
    #[must_use]
    pub fn supports_proxy(&self) -> bool {
        self.proxy
    }

    /// Returns `true` if every entry of `capabilities` is satisfiable.
    #[inline]
    #[must_use]
    pub fn satisfies(&self, capabilities: &Capabilities) -> bool {
        is_satisfiable(capabilities, self)
    }
}

// ============================================================================
// Validation
// ============================================================================

impl ImplementationCapabilities {
    /// Checks that identity fields are non-empty.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.browser_name.is_empty() {
            return Err(Error::config("Browser name must not be empty"));
        }
        if self.browser_version.is_empty() {
            return Err(Error::config("Browser version must not be empty"));
        }
        if self.platform_name.is_empty() {
            return Err(Error::config("Platform name must not be empty"));
        }
        Ok(())
    }
}

// ============================================================================
// Host Platform
// ============================================================================

/// Returns the host platform under its WebDriver name.
#[must_use]
pub fn host_platform() -> String {
    match std::env::consts::OS {
        "macos" => "mac",
        other => other,
    }
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================
