//! Capability and request member names.

// ============================================================================
// Capability Names
// ============================================================================

/// Whether untrusted TLS certificates are accepted.
pub const ACCEPT_INSECURE_CERTS: &str = "acceptInsecureCerts";

/// Browser identity.
pub const BROWSER_NAME: &str = "browserName";

/// Browser version.
pub const BROWSER_VERSION: &str = "browserVersion";

/// Host platform.
pub const PLATFORM_NAME: &str = "platformName";

/// Navigation readiness strategy.
pub const PAGE_LOAD_STRATEGY: &str = "pageLoadStrategy";

/// Proxy configuration.
pub const PROXY: &str = "proxy";

/// Strict interactability checks for file inputs.
pub const STRICT_FILE_INTERACTABILITY: &str = "strictFileInteractability";

/// Session timeouts.
pub const TIMEOUTS: &str = "timeouts";

/// User prompt handler.
pub const UNHANDLED_PROMPT_BEHAVIOR: &str = "unhandledPromptBehavior";

/// Every capability name this endpoint recognizes.
pub const RECOGNIZED: &[&str] = &[
    ACCEPT_INSECURE_CERTS,
    BROWSER_NAME,
    BROWSER_VERSION,
    PLATFORM_NAME,
    PAGE_LOAD_STRATEGY,
    PROXY,
    STRICT_FILE_INTERACTABILITY,
    TIMEOUTS,
    UNHANDLED_PROMPT_BEHAVIOR,
];

// ============================================================================
// Request Members
// ============================================================================

/// Capabilities request member of the session parameters.
pub const CAPABILITIES: &str = "capabilities";

/// Required capabilities member.
pub const ALWAYS_MATCH: &str = "alwaysMatch";

/// Alternative capabilities member.
pub const FIRST_MATCH: &str = "firstMatch";

/// Returns `true` if `name` is a recognized capability name.
#[inline]
#[must_use]
pub fn is_recognized(name: &str) -> bool {
    RECOGNIZED.contains(&name)
}

// ============================================================================
// Tests
// ============================================================================
