//! Validated capability sets.
//!
//! A [`Capabilities`] value is only produced by validation and merging,
//! so every entry it holds has passed its per-name check and no entry is
//! `null`.

// ============================================================================
// Imports
// ============================================================================

use serde::Serialize;
use serde_json::{Map, Value, map};

use crate::timeouts::{self, TimeoutsConfiguration};

use super::keywords::{PageLoadStrategy, UnhandledPromptBehavior};
use super::names;

// ============================================================================
// Capabilities
// ============================================================================

/// A validated capability set.
///
/// Entries keep the order they were inserted in. Serializes as a plain
/// JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Capabilities(Map<String, Value>);

// ============================================================================
// Capabilities - Constructors
// ============================================================================

impl Capabilities {
    /// Creates an empty capability set.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Wraps an object without validating it.
    #[inline]
    pub(crate) fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Sets an entry, replacing any previous value.
    #[inline]
    pub(crate) fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.0.insert(name.into(), value);
    }
}

// ============================================================================
// Capabilities - Accessors
// ============================================================================

impl Capabilities {
    /// Returns the value for `name`, if present.
    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Returns `true` if `name` is present.
    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the set has no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates entries in insertion order.
    #[inline]
    pub fn iter(&self) -> map::Iter<'_> {
        self.0.iter()
    }

    /// Returns the underlying object.
    #[inline]
    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consumes the set, returning the underlying object.
    #[inline]
    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    /// Gets a string entry.
    fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// Gets a boolean entry.
    fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Value::as_bool)
    }
}

// ============================================================================
// Capabilities - Typed Accessors
// ============================================================================

impl Capabilities {
    /// Returns the requested browser name.
    #[inline]
    #[must_use]
    pub fn browser_name(&self) -> Option<&str> {
        self.get_str(names::BROWSER_NAME)
    }

    /// Returns the requested browser version.
    #[inline]
    #[must_use]
    pub fn browser_version(&self) -> Option<&str> {
        self.get_str(names::BROWSER_VERSION)
    }

    /// Returns the requested platform name.
    #[inline]
    #[must_use]
    pub fn platform_name(&self) -> Option<&str> {
        self.get_str(names::PLATFORM_NAME)
    }

    /// Returns the `acceptInsecureCerts` flag.
    #[inline]
    #[must_use]
    pub fn accept_insecure_certs(&self) -> Option<bool> {
        self.get_bool(names::ACCEPT_INSECURE_CERTS)
    }

    /// Returns the `strictFileInteractability` flag.
    #[inline]
    #[must_use]
    pub fn strict_file_interactability(&self) -> Option<bool> {
        self.get_bool(names::STRICT_FILE_INTERACTABILITY)
    }

    /// Returns the requested page load strategy.
    #[must_use]
    pub fn page_load_strategy(&self) -> Option<PageLoadStrategy> {
        self.get_str(names::PAGE_LOAD_STRATEGY)
            .and_then(|s| s.parse().ok())
    }

    /// Returns the requested prompt handler.
    #[must_use]
    pub fn unhandled_prompt_behavior(&self) -> Option<UnhandledPromptBehavior> {
        self.get_str(names::UNHANDLED_PROMPT_BEHAVIOR)
            .and_then(|s| s.parse().ok())
    }

    /// Returns the requested timeouts.
    #[must_use]
    pub fn timeouts(&self) -> Option<TimeoutsConfiguration> {
        self.get(names::TIMEOUTS)
            .and_then(|value| timeouts::deserialize(value).ok())
    }

    /// Returns the requested proxy object, as supplied by the client.
    #[inline]
    #[must_use]
    pub fn proxy(&self) -> Option<&Map<String, Value>> {
        self.get(names::PROXY).and_then(Value::as_object)
    }
}

// ============================================================================
// Capabilities - Conversions
// ============================================================================

impl From<Capabilities> for Value {
    fn from(capabilities: Capabilities) -> Self {
        Value::Object(capabilities.0)
    }
}

impl<'a> IntoIterator for &'a Capabilities {
    type Item = (&'a String, &'a Value);
    type IntoIter = map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    fn caps(value: Value) -> Capabilities {
        match value {
            Value::Object(map) => Capabilities::from_map(map),
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_new_is_empty() {
        let capabilities = Capabilities::new();
        assert!(capabilities.is_empty());
        assert_eq!(capabilities.len(), 0);
        assert_eq!(Value::from(capabilities), json!({}));
    }

    #[test]
    fn test_typed_accessors() {
        let capabilities = caps(json!({
            "browserName": "ladybird",
            "browserVersion": "1.0",
            "platformName": "linux",
            "acceptInsecureCerts": true,
            "strictFileInteractability": false,
            "pageLoadStrategy": "none",
            "unhandledPromptBehavior": "ignore",
            "timeouts": {"script": null, "pageLoad": 1, "implicit": 2},
            "proxy": {"proxyType": "direct"}
        }));

        assert_eq!(capabilities.browser_name(), Some("ladybird"));
        assert_eq!(capabilities.browser_version(), Some("1.0"));
        assert_eq!(capabilities.platform_name(), Some("linux"));
        assert_eq!(capabilities.accept_insecure_certs(), Some(true));
        assert_eq!(capabilities.strict_file_interactability(), Some(false));
        assert_eq!(capabilities.page_load_strategy(), Some(PageLoadStrategy::None));
        assert_eq!(
            capabilities.unhandled_prompt_behavior(),
            Some(UnhandledPromptBehavior::Ignore)
        );
        assert_eq!(
            capabilities.timeouts(),
            Some(TimeoutsConfiguration {
                script: None,
                page_load: 1,
                implicit: 2
            })
        );
        assert!(capabilities.proxy().is_some());
    }

    #[test]
    fn test_missing_accessors() {
        let capabilities = Capabilities::new();
        assert_eq!(capabilities.browser_name(), None);
        assert_eq!(capabilities.page_load_strategy(), None);
        assert_eq!(capabilities.timeouts(), None);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut capabilities = Capabilities::new();
        capabilities.insert("platformName", json!("linux"));
        capabilities.insert("acceptInsecureCerts", json!(true));
        capabilities.insert("browserName", json!("ladybird"));

        let keys: Vec<&str> = capabilities.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["platformName", "acceptInsecureCerts", "browserName"]);
    }

    #[test]
    fn test_serializes_as_object() {
        let capabilities = caps(json!({"browserName": "ladybird"}));
        assert_eq!(
            serde_json::to_string(&capabilities).unwrap(),
            r#"{"browserName":"ladybird"}"#
        );
    }
}
