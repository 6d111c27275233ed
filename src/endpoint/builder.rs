//! Builder pattern for implementation capabilities.
//!
//! Provides a fluent API for describing the endpoint.
//!
//! # Example
//!
//! ```
//! use webdriver_capabilities::ImplementationCapabilities;
//!
//! # fn example() -> webdriver_capabilities::Result<()> {
//! let implementation = ImplementationCapabilities::builder()
//!     .browser_name("ladybird")
//!     .browser_version("1.0")
//!     .platform_name("linux")
//!     .build()?;
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Imports
// ============================================================================

use crate::error::{Error, Result};

use super::implementation::{ImplementationCapabilities, host_platform};

// ============================================================================
// ImplementationCapabilitiesBuilder
// ============================================================================

/// Builder for [`ImplementationCapabilities`].
///
/// Use [`ImplementationCapabilities::builder()`] to create a new builder.
#[derive(Debug, Default, Clone)]
pub struct ImplementationCapabilitiesBuilder {
    /// Browser name.
    browser_name: Option<String>,
    /// Browser version.
    browser_version: Option<String>,
    /// Platform name, host platform when unset.
    platform_name: Option<String>,
    /// Proxy support.
    proxy: bool,
}

// ============================================================================
// ImplementationCapabilitiesBuilder Implementation
// ============================================================================

impl ImplementationCapabilitiesBuilder {
    /// Creates a new builder with no configuration.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the browser name.
    #[inline]
    #[must_use]
    pub fn browser_name(mut self, name: impl Into<String>) -> Self {
        self.browser_name = Some(name.into());
        self
    }

    /// Sets the browser version.
    #[inline]
    #[must_use]
    pub fn browser_version(mut self, version: impl Into<String>) -> Self {
        self.browser_version = Some(version.into());
        self
    }

    /// Sets the platform name (e.g. "linux", "mac", "windows").
    #[inline]
    #[must_use]
    pub fn platform_name(mut self, name: impl Into<String>) -> Self {
        self.platform_name = Some(name.into());
        self
    }

    /// Sets whether requested proxies can be applied.
    #[inline]
    #[must_use]
    pub fn proxy(mut self, supported: bool) -> Self {
        self.proxy = supported;
        self
    }

    /// Builds the capabilities with validation.
    ///
    /// # Errors
    ///
    /// - [`Error::Config`] if browser name or version is not set
    /// - [`Error::Config`] if any identity field is empty
    pub fn build(self) -> Result<ImplementationCapabilities> {
        let browser_name = self.browser_name.ok_or_else(|| {
            Error::config(
                "Browser name is required. Use .browser_name() to set it.\n\
                 Example: ImplementationCapabilities::builder().browser_name(\"ladybird\")",
            )
        })?;

        let browser_version = self.browser_version.ok_or_else(|| {
            Error::config(
                "Browser version is required. Use .browser_version() to set it.\n\
                 Example: ImplementationCapabilities::builder().browser_version(\"1.0\")",
            )
        })?;

        let platform_name = self.platform_name.unwrap_or_else(host_platform);

        let implementation = ImplementationCapabilities::from_parts(
            browser_name,
            browser_version,
            platform_name,
            self.proxy,
        );
        implementation.validate()?;

        Ok(implementation)
    }
}

// ============================================================================
// Tests
// ============================================================================
