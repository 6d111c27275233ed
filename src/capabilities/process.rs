//! Session parameter processing.
//!
//! Runs the full New Session capability pipeline: read `alwaysMatch` and
//! `firstMatch`, validate each set, merge every alternative with the
//! required set, then match the merged candidates in order.

// ============================================================================
// Imports
// ============================================================================

use std::slice;

use serde_json::{Map, Value};
use tracing::debug;

use crate::endpoint::ImplementationCapabilities;
use crate::error::{Error, Result};

use super::matching::match_capabilities;
use super::merge::merge_capabilities;
use super::names;
use super::set::Capabilities;
use super::validate::validate_capabilities;

// ============================================================================
// Processing
// ============================================================================

/// Processes New Session parameters into a negotiated capability set.
///
/// Every stage stops at the first error it finds.
///
/// # Errors
///
/// - [`Error::InvalidArgument`] if the parameters are malformed, a
///   capability fails validation, or an alternative shares a name with
///   `alwaysMatch`
/// - [`Error::SessionNotCreated`] if no merged candidate matches
///   `implementation`
pub fn process_capabilities(
    parameters: &Value,
    implementation: &ImplementationCapabilities,
) -> Result<Capabilities> {
    let parameters = parameters
        .as_object()
        .ok_or_else(|| Error::invalid_argument("Session parameters is not an object"))?;

    let request = parameters
        .get(names::CAPABILITIES)
        .and_then(Value::as_object)
        .ok_or_else(|| Error::invalid_argument("Capabilities is not an object"))?;

    let required = match request.get(names::ALWAYS_MATCH) {
        Some(always_match) => validate_capabilities(always_match)?,
        None => Capabilities::new(),
    };

    let default_first_match = Value::Object(Map::new());
    let all_first_match = match request.get(names::FIRST_MATCH) {
        Some(first_match) => first_match
            .as_array()
            .filter(|entries| !entries.is_empty())
            .map(Vec::as_slice)
            .ok_or_else(|| {
                Error::invalid_argument(
                    "Capability firstMatch must be an array with at least one entry",
                )
            })?,
        None => slice::from_ref(&default_first_match),
    };

    let validated = all_first_match
        .iter()
        .map(validate_capabilities)
        .collect::<Result<Vec<_>>>()?;

    let merged = validated
        .iter()
        .map(|first_match| merge_capabilities(&required, Some(first_match)))
        .collect::<Result<Vec<_>>>()?;

    debug!(
        required = required.len(),
        candidates = merged.len(),
        "Merged capability candidates"
    );

    match_capabilities(merged, implementation)
}

// ============================================================================
// Tests
// ============================================================================
