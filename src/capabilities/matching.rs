//! Capability matching.
//!
//! Picks the first merged candidate the endpoint can actually satisfy.
//! Identity capabilities must agree with the endpoint; behavioral ones
//! always match once validated.

// ============================================================================
// Imports
// ============================================================================

use serde_json::Value;
use tracing::{debug, trace};

use crate::endpoint::ImplementationCapabilities;
use crate::error::{Error, Result};

use super::names;
use super::set::Capabilities;

// ============================================================================
// Matching
// ============================================================================

/// Returns the first candidate satisfiable by `implementation`.
///
/// Candidates are tried in order with no backtracking, so callers list
/// them from most to least preferred.
///
/// # Errors
///
/// Returns [`Error::SessionNotCreated`] if no candidate matches, including
/// when there are no candidates.
pub fn match_capabilities<I>(
    candidates: I,
    implementation: &ImplementationCapabilities,
) -> Result<Capabilities>
where
    I: IntoIterator<Item = Capabilities>,
{
    for (index, candidate) in candidates.into_iter().enumerate() {
        if is_satisfiable(&candidate, implementation) {
            debug!(index, "Matched capabilities");
            return Ok(candidate);
        }
        trace!(index, "Candidate does not match endpoint");
    }

    Err(Error::session_not_created("No matching capabilities"))
}

/// Returns `true` if every entry of `candidate` is satisfiable.
pub(crate) fn is_satisfiable(
    candidate: &Capabilities,
    implementation: &ImplementationCapabilities,
) -> bool {
    candidate
        .iter()
        .all(|(name, value)| entry_satisfiable(name, value, implementation))
}

fn entry_satisfiable(name: &str, value: &Value, implementation: &ImplementationCapabilities) -> bool {
    let satisfied = match name {
        names::BROWSER_NAME => value.as_str() == Some(implementation.browser_name()),
        names::BROWSER_VERSION => value.as_str() == Some(implementation.browser_version()),
        names::PLATFORM_NAME => value
            .as_str()
            .is_some_and(|platform| platform.eq_ignore_ascii_case(implementation.platform_name())),
        names::PROXY => implementation.supports_proxy(),
        _ => true,
    };

    if !satisfied {
        trace!(capability = name, %value, "Capability not satisfiable");
    }
    satisfied
}

// ============================================================================
// Tests
// ============================================================================
