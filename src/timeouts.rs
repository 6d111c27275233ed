//! Session timeouts configuration.
//!
//! Deserializes and serializes the `timeouts` capability.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use webdriver_capabilities::timeouts;
//!
//! let config = timeouts::deserialize(&json!({"script": null, "implicit": 250})).unwrap();
//! assert_eq!(config.script, None);
//! assert_eq!(config.implicit, 250);
//!
//! let object = timeouts::serialize(&config);
//! assert_eq!(object["pageLoad"], json!(300_000));
//! ```

// ============================================================================
// Imports
// ============================================================================

use serde_json::{Map, Value};
use tracing::trace;

use crate::error::{Error, Result};

// ============================================================================
// Constants
// ============================================================================

/// Largest integer a JSON number can carry without precision loss.
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Default script timeout in milliseconds.
pub const DEFAULT_SCRIPT_TIMEOUT_MS: u64 = 30_000;

/// Default page load timeout in milliseconds.
pub const DEFAULT_PAGE_LOAD_TIMEOUT_MS: u64 = 300_000;

/// Default implicit wait timeout in milliseconds.
pub const DEFAULT_IMPLICIT_TIMEOUT_MS: u64 = 0;

const SCRIPT_KEY: &str = "script";
const PAGE_LOAD_KEY: &str = "pageLoad";
const IMPLICIT_KEY: &str = "implicit";

// ============================================================================
// TimeoutsConfiguration
// ============================================================================

/// Session timeouts, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutsConfiguration {
    /// Script evaluation timeout. `None` means scripts never time out.
    pub script: Option<u64>,

    /// Navigation timeout.
    pub page_load: u64,

    /// Element location retry duration.
    pub implicit: u64,
}

impl Default for TimeoutsConfiguration {
    fn default() -> Self {
        Self {
            script: Some(DEFAULT_SCRIPT_TIMEOUT_MS),
            page_load: DEFAULT_PAGE_LOAD_TIMEOUT_MS,
            implicit: DEFAULT_IMPLICIT_TIMEOUT_MS,
        }
    }
}

// ============================================================================
// Deserialization
// ============================================================================

/// Deserializes a JSON value as a timeouts configuration.
///
/// Keys other than `script`, `pageLoad` and `implicit` are ignored.
/// Missing keys keep their defaults.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `value` is not an object, or if a
/// timeout is not an integer in `0..=MAX_SAFE_INTEGER` (`script` may also be
/// null).
pub fn deserialize(value: &Value) -> Result<TimeoutsConfiguration> {
    let object = value
        .as_object()
        .ok_or_else(|| Error::invalid_argument("Timeouts is not an Object"))?;

    let mut config = TimeoutsConfiguration::default();

    if let Some(script) = object.get(SCRIPT_KEY) {
        config.script = match script {
            Value::Null => None,
            other => Some(duration(SCRIPT_KEY, other)?),
        };
    }

    if let Some(page_load) = object.get(PAGE_LOAD_KEY) {
        config.page_load = duration(PAGE_LOAD_KEY, page_load)?;
    }

    if let Some(implicit) = object.get(IMPLICIT_KEY) {
        config.implicit = duration(IMPLICIT_KEY, implicit)?;
    }

    trace!(?config, "Deserialized timeouts configuration");
    Ok(config)
}

/// Reads a timeout duration, accepting integral floats such as `1000.0`.
fn duration(key: &str, value: &Value) -> Result<u64> {
    let invalid = || Error::invalid_argument(format!("Invalid {key} timeout value"));

    let ms = match value.as_u64() {
        Some(ms) => ms,
        None => {
            let float = value.as_f64().ok_or_else(invalid)?;
            if float.fract() != 0.0 || float < 0.0 || float > MAX_SAFE_INTEGER as f64 {
                return Err(invalid());
            }
            float as u64
        }
    };

    if ms > MAX_SAFE_INTEGER {
        return Err(invalid());
    }

    Ok(ms)
}

// ============================================================================
// Serialization
// ============================================================================

/// Serializes a timeouts configuration to its canonical object form.
///
/// An unlimited script timeout is written as `null`.
#[must_use]
pub fn serialize(config: &TimeoutsConfiguration) -> Map<String, Value> {
    let mut object = Map::with_capacity(3);
    object.insert(
        SCRIPT_KEY.to_string(),
        config.script.map_or(Value::Null, Value::from),
    );
    object.insert(PAGE_LOAD_KEY.to_string(), Value::from(config.page_load));
    object.insert(IMPLICIT_KEY.to_string(), Value::from(config.implicit));
    object
}

// ============================================================================
// Tests
// ============================================================================
