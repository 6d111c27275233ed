//! Capability merging.
//!
//! Combines the required (`alwaysMatch`) set with one first-match
//! alternative. The two sets must not share a name.

// ============================================================================
// Imports
// ============================================================================

use tracing::trace;

use crate::error::{Error, Result};

use super::set::Capabilities;

// ============================================================================
// Merging
// ============================================================================

/// Merges `secondary` into a copy of `primary`.
///
/// With no `secondary` the result is a copy of `primary`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] naming the first entry of `secondary`
/// that is also present in `primary`, whatever the two values are.
pub fn merge_capabilities(
    primary: &Capabilities,
    secondary: Option<&Capabilities>,
) -> Result<Capabilities> {
    let mut result = primary.clone();

    let Some(secondary) = secondary else {
        return Ok(result);
    };

    for (name, value) in secondary {
        if primary.contains(name) {
            return Err(Error::invalid_argument(format!(
                "Unable to merge capability {name}"
            )));
        }
        result.insert(name.clone(), value.clone());
    }

    trace!(
        primary = primary.len(),
        secondary = secondary.len(),
        "Merged capabilities"
    );
    Ok(result)
}

// ============================================================================
// Tests
// ============================================================================
