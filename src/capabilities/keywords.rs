//! Keyword-valued capabilities.
//!
//! Types for the `pageLoadStrategy` and `unhandledPromptBehavior`
//! capabilities, whose values are drawn from fixed keyword tables.
//!
//! # Example
//!
//! ```
//! use webdriver_capabilities::{PageLoadStrategy, UnhandledPromptBehavior};
//!
//! let strategy: PageLoadStrategy = "eager".parse().unwrap();
//! assert_eq!(strategy, PageLoadStrategy::Eager);
//!
//! let behavior: UnhandledPromptBehavior = "accept and notify".parse().unwrap();
//! assert!(behavior.notifies());
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

// ============================================================================
// PageLoadStrategy
// ============================================================================

/// When navigation commands return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageLoadStrategy {
    /// Return as soon as navigation starts.
    None,

    /// Return once the document is interactive.
    Eager,

    /// Return once the document has fully loaded.
    #[default]
    Normal,
}

impl PageLoadStrategy {
    /// All keywords, in table order.
    pub const ALL: [Self; 3] = [Self::None, Self::Eager, Self::Normal];

    /// Returns the keyword for this strategy.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Eager => "eager",
            Self::Normal => "normal",
        }
    }
}

impl FromStr for PageLoadStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| Error::invalid_argument("Invalid pageLoadStrategy capability"))
    }
}

impl fmt::Display for PageLoadStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// UnhandledPromptBehavior
// ============================================================================

/// How user prompts left open by a command are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UnhandledPromptBehavior {
    /// Dismiss the prompt.
    #[serde(rename = "dismiss")]
    Dismiss,

    /// Accept the prompt.
    #[serde(rename = "accept")]
    Accept,

    /// Dismiss the prompt and report it to the client.
    #[default]
    #[serde(rename = "dismiss and notify")]
    DismissAndNotify,

    /// Accept the prompt and report it to the client.
    #[serde(rename = "accept and notify")]
    AcceptAndNotify,

    /// Leave the prompt open.
    #[serde(rename = "ignore")]
    Ignore,
}

impl UnhandledPromptBehavior {
    /// All keywords, in table order.
    pub const ALL: [Self; 5] = [
        Self::Dismiss,
        Self::Accept,
        Self::DismissAndNotify,
        Self::AcceptAndNotify,
        Self::Ignore,
    ];

    /// Returns the keyword for this behavior.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dismiss => "dismiss",
            Self::Accept => "accept",
            Self::DismissAndNotify => "dismiss and notify",
            Self::AcceptAndNotify => "accept and notify",
            Self::Ignore => "ignore",
        }
    }

    /// Returns `true` if the client is told about handled prompts.
    #[inline]
    #[must_use]
    pub fn notifies(&self) -> bool {
        matches!(self, Self::DismissAndNotify | Self::AcceptAndNotify)
    }
}

impl FromStr for UnhandledPromptBehavior {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|behavior| behavior.as_str() == s)
            .ok_or_else(|| Error::invalid_argument("Invalid unhandledPromptBehavior capability"))
    }
}

impl fmt::Display for UnhandledPromptBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::{PageLoadStrategy, UnhandledPromptBehavior};

    // ------------------------------------------------------------------------
    // PageLoadStrategy Tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_page_load_strategy_as_str() {
        assert_eq!(PageLoadStrategy::None.as_str(), "none");
        assert_eq!(PageLoadStrategy::Eager.as_str(), "eager");
        assert_eq!(PageLoadStrategy::Normal.as_str(), "normal");
    }

    #[test]
    fn test_page_load_strategy_parse() {
        for strategy in PageLoadStrategy::ALL {
            assert_eq!(strategy.as_str().parse::<PageLoadStrategy>().unwrap(), strategy);
        }
        assert!("Normal".parse::<PageLoadStrategy>().is_err());
        assert!("".parse::<PageLoadStrategy>().is_err());
    }

    #[test]
    fn test_page_load_strategy_serde_matches_as_str() {
        for strategy in PageLoadStrategy::ALL {
            assert_eq!(
                serde_json::to_value(strategy).unwrap(),
                serde_json::json!(strategy.as_str())
            );
        }
    }

    #[test]
    fn test_page_load_strategy_default() {
        assert_eq!(PageLoadStrategy::default(), PageLoadStrategy::Normal);
    }

    // ------------------------------------------------------------------------
    // UnhandledPromptBehavior Tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_prompt_behavior_parse() {
        for behavior in UnhandledPromptBehavior::ALL {
            assert_eq!(
                behavior.as_str().parse::<UnhandledPromptBehavior>().unwrap(),
                behavior
            );
        }
        assert!("dismiss-and-notify".parse::<UnhandledPromptBehavior>().is_err());
    }

    #[test]
    fn test_prompt_behavior_serde_matches_as_str() {
        for behavior in UnhandledPromptBehavior::ALL {
            assert_eq!(
                serde_json::to_value(behavior).unwrap(),
                serde_json::json!(behavior.as_str())
            );
        }
    }

    #[test]
    fn test_prompt_behavior_notifies() {
        assert!(UnhandledPromptBehavior::AcceptAndNotify.notifies());
        assert!(UnhandledPromptBehavior::DismissAndNotify.notifies());
        assert!(!UnhandledPromptBehavior::Ignore.notifies());
    }

    #[test]
    fn test_prompt_behavior_default() {
        assert_eq!(
            UnhandledPromptBehavior::default(),
            UnhandledPromptBehavior::DismissAndNotify
        );
    }
}
