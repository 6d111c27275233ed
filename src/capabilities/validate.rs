//! Capability validation.
//!
//! Checks one capability object against the table of recognized names and
//! returns the normalized [`Capabilities`] with `null` entries dropped.
//!
//! This endpoint is a terminal node: unknown names, including vendor
//! extension capabilities, are rejected rather than passed through.

// ============================================================================
// Imports
// ============================================================================

use std::sync::LazyLock;

use rustc_hash::FxHashMap;
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::timeouts;

use super::keywords::{PageLoadStrategy, UnhandledPromptBehavior};
use super::names;
use super::set::Capabilities;

// ============================================================================
// Deserializer Table
// ============================================================================

/// Deserializes one capability value. Receives the capability name.
type Deserializer = fn(&str, &Value) -> Result<Value>;

static DESERIALIZERS: LazyLock<FxHashMap<&'static str, Deserializer>> = LazyLock::new(|| {
    let table: [(&'static str, Deserializer); 9] = [
        (names::ACCEPT_INSECURE_CERTS, deserialize_bool),
        (names::BROWSER_NAME, deserialize_string),
        (names::BROWSER_VERSION, deserialize_string),
        (names::PLATFORM_NAME, deserialize_string),
        (names::PAGE_LOAD_STRATEGY, deserialize_page_load_strategy),
        (names::PROXY, deserialize_proxy),
        (names::STRICT_FILE_INTERACTABILITY, deserialize_bool),
        (names::TIMEOUTS, deserialize_timeouts),
        (
            names::UNHANDLED_PROMPT_BEHAVIOR,
            deserialize_unhandled_prompt_behavior,
        ),
    ];
    table.into_iter().collect()
});

// ============================================================================
// Validation
// ============================================================================

/// Validates a capability object.
///
/// `null` entries are dropped, whatever their name. Every other entry must
/// be a recognized capability with a value of the right type.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `candidate` is not an object, if a
/// name is unrecognized, or if a value fails its capability's check.
pub fn validate_capabilities(candidate: &Value) -> Result<Capabilities> {
    let object = candidate
        .as_object()
        .ok_or_else(|| Error::invalid_argument("Capability is not an Object"))?;

    let mut result = Map::with_capacity(object.len());

    for (name, value) in object {
        if value.is_null() {
            trace!(capability = %name, "Dropping null capability");
            continue;
        }

        let deserialize = DESERIALIZERS
            .get(name.as_str())
            .ok_or_else(|| Error::invalid_argument(format!("Unrecognized capability: {name}")))?;

        let deserialized = deserialize(name, value)?;
        trace!(capability = %name, "Validated capability");
        result.insert(name.clone(), deserialized);
    }

    debug!(count = result.len(), "Validated capability set");
    Ok(Capabilities::from_map(result))
}

// ============================================================================
// Deserializers
// ============================================================================

fn deserialize_bool(name: &str, value: &Value) -> Result<Value> {
    if !value.is_boolean() {
        return Err(Error::invalid_argument(format!(
            "Capability {name} must be a boolean"
        )));
    }
    Ok(value.clone())
}

fn deserialize_string(name: &str, value: &Value) -> Result<Value> {
    if !value.is_string() {
        return Err(Error::invalid_argument(format!(
            "Capability {name} must be a string"
        )));
    }
    Ok(value.clone())
}

fn deserialize_page_load_strategy(name: &str, value: &Value) -> Result<Value> {
    let keyword = value
        .as_str()
        .ok_or_else(|| Error::invalid_argument(format!("Capability {name} must be a string")))?;
    keyword.parse::<PageLoadStrategy>()?;
    Ok(value.clone())
}

fn deserialize_unhandled_prompt_behavior(name: &str, value: &Value) -> Result<Value> {
    let keyword = value
        .as_str()
        .ok_or_else(|| Error::invalid_argument(format!("Capability {name} must be a string")))?;
    keyword.parse::<UnhandledPromptBehavior>()?;
    Ok(value.clone())
}

fn deserialize_timeouts(_name: &str, value: &Value) -> Result<Value> {
    let config = timeouts::deserialize(value)?;
    Ok(Value::Object(timeouts::serialize(&config)))
}

// TODO: deserialize as a proxy configuration (proxyType, proxyAutoconfigUrl,
// httpProxy, sslProxy, socksProxy, socksVersion, noProxy) once the endpoint
// can apply one. Until then only the shape is checked and matching decides.
fn deserialize_proxy(name: &str, value: &Value) -> Result<Value> {
    if !value.is_object() {
        return Err(Error::invalid_argument(format!(
            "Capability {name} must be an Object"
        )));
    }
    Ok(value.clone())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;
    use serde_json::json;

    fn message(candidate: Value) -> String {
        validate_capabilities(&candidate).unwrap_err().message()
    }

    #[test]
    fn test_table_covers_recognized_names() {
        assert_eq!(DESERIALIZERS.len(), names::RECOGNIZED.len());
        for name in names::RECOGNIZED {
            assert!(DESERIALIZERS.contains_key(name), "missing {name}");
        }
    }

    #[test]
    fn test_empty_object() {
        let capabilities = validate_capabilities(&json!({})).expect("valid");
        assert!(capabilities.is_empty());
    }

    #[test]
    fn test_not_an_object() {
        assert_eq!(message(json!([])), "Capability is not an Object");
        assert_eq!(message(json!(null)), "Capability is not an Object");
    }

    #[test]
    fn test_null_values_dropped() {
        let capabilities = validate_capabilities(&json!({
            "browserName": null,
            "acceptInsecureCerts": true
        }))
        .expect("valid");

        assert_eq!(Value::from(capabilities), json!({"acceptInsecureCerts": true}));
    }

    #[test]
    fn test_null_unrecognized_name_dropped() {
        let capabilities = validate_capabilities(&json!({"moz:firefoxOptions": null})).expect("valid");
        assert!(capabilities.is_empty());
    }

    #[test]
    fn test_boolean_capabilities() {
        assert!(validate_capabilities(&json!({"acceptInsecureCerts": false})).is_ok());
        assert!(validate_capabilities(&json!({"strictFileInteractability": true})).is_ok());
        assert_eq!(
            message(json!({"acceptInsecureCerts": "true"})),
            "Capability acceptInsecureCerts must be a boolean"
        );
        assert_eq!(
            message(json!({"strictFileInteractability": 1})),
            "Capability strictFileInteractability must be a boolean"
        );
    }

    #[test]
    fn test_string_capabilities() {
        for name in ["browserName", "browserVersion", "platformName"] {
            assert!(validate_capabilities(&json!({ name: "x" })).is_ok());
            assert_eq!(
                message(json!({ name: 1 })),
                format!("Capability {name} must be a string")
            );
        }
    }

    #[test]
    fn test_page_load_strategy() {
        for keyword in ["none", "eager", "normal"] {
            assert!(validate_capabilities(&json!({"pageLoadStrategy": keyword})).is_ok());
        }
        assert_eq!(
            message(json!({"pageLoadStrategy": "lazy"})),
            "Invalid pageLoadStrategy capability"
        );
        assert_eq!(
            message(json!({"pageLoadStrategy": false})),
            "Capability pageLoadStrategy must be a string"
        );
    }

    #[test]
    fn test_unhandled_prompt_behavior() {
        for keyword in [
            "dismiss",
            "accept",
            "dismiss and notify",
            "accept and notify",
            "ignore",
        ] {
            assert!(validate_capabilities(&json!({"unhandledPromptBehavior": keyword})).is_ok());
        }
        assert_eq!(
            message(json!({"unhandledPromptBehavior": "Accept"})),
            "Invalid unhandledPromptBehavior capability"
        );
        assert_eq!(
            message(json!({"unhandledPromptBehavior": {}})),
            "Capability unhandledPromptBehavior must be a string"
        );
    }

    #[test]
    fn test_timeouts_normalized() {
        let capabilities = validate_capabilities(&json!({"timeouts": {"implicit": 5}})).expect("valid");
        assert_eq!(
            capabilities.get("timeouts"),
            Some(&json!({"script": 30000, "pageLoad": 300000, "implicit": 5}))
        );
    }

    #[test]
    fn test_timeouts_error_propagates() {
        assert_eq!(
            message(json!({"timeouts": {"script": -5}})),
            "Invalid script timeout value"
        );
        assert_eq!(message(json!({"timeouts": 5})), "Timeouts is not an Object");
    }

    #[test]
    fn test_proxy_requires_object() {
        assert!(validate_capabilities(&json!({"proxy": {"proxyType": "manual"}})).is_ok());
        assert_eq!(
            message(json!({"proxy": "http://proxy:8080"})),
            "Capability proxy must be an Object"
        );
    }

    #[test]
    fn test_unrecognized_capability() {
        assert_eq!(
            message(json!({"goog:chromeOptions": {}})),
            "Unrecognized capability: goog:chromeOptions"
        );
        assert_eq!(
            message(json!({"browser_version": "1.0"})),
            "Unrecognized capability: browser_version"
        );
    }

    #[test]
    fn test_preserves_order_and_spelling() {
        let capabilities = validate_capabilities(&json!({
            "platformName": "linux",
            "browserName": "ladybird",
            "acceptInsecureCerts": true
        }))
        .expect("valid");

        let keys: Vec<&str> = capabilities.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["platformName", "browserName", "acceptInsecureCerts"]);
    }

    // ------------------------------------------------------------------------
    // Properties
    // ------------------------------------------------------------------------

    fn non_object() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::from),
            any::<i64>().prop_map(Value::from),
            ".*".prop_map(Value::from),
            prop::collection::vec(any::<i64>().prop_map(Value::from), 0..4).prop_map(Value::from),
        ]
    }

    fn valid_entry() -> impl Strategy<Value = (&'static str, Value)> {
        prop_oneof![
            any::<bool>().prop_map(|b| ("acceptInsecureCerts", Value::from(b))),
            any::<bool>().prop_map(|b| ("strictFileInteractability", Value::from(b))),
            "[a-z]{0,8}".prop_map(|s| ("browserName", Value::from(s))),
            "[0-9.]{0,8}".prop_map(|s| ("browserVersion", Value::from(s))),
            "[a-z]{0,8}".prop_map(|s| ("platformName", Value::from(s))),
            prop::sample::select(vec!["none", "eager", "normal"])
                .prop_map(|s| ("pageLoadStrategy", Value::from(s))),
            prop::sample::select(vec![
                "dismiss",
                "accept",
                "dismiss and notify",
                "accept and notify",
                "ignore"
            ])
            .prop_map(|s| ("unhandledPromptBehavior", Value::from(s))),
            prop::sample::select(names::RECOGNIZED.to_vec()).prop_map(|name| (name, Value::Null)),
        ]
    }

    proptest! {
        #[test]
        fn prop_non_object_rejected(candidate in non_object()) {
            let err = validate_capabilities(&candidate).unwrap_err();
            prop_assert!(err.is_invalid_argument());
        }

        #[test]
        fn prop_valid_entries_round_trip_without_nulls(
            entries in prop::collection::vec(valid_entry(), 0..10)
        ) {
            let input: Map<String, Value> = entries
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect();

            let expected: Map<String, Value> = input
                .iter()
                .filter(|(_, value)| !value.is_null())
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect();

            let capabilities = validate_capabilities(&Value::Object(input)).unwrap();
            prop_assert_eq!(capabilities.into_map(), expected);
        }

        #[test]
        fn prop_page_load_strategy_exact(keyword in ".{0,12}") {
            let accepted = validate_capabilities(&json!({"pageLoadStrategy": keyword.clone()})).is_ok();
            prop_assert_eq!(accepted, ["none", "eager", "normal"].contains(&keyword.as_str()));
        }
    }
}
