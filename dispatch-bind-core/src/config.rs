//! Binding options
//!
//! Options are plain serde types, so they can live in an application's own
//! config file and be handed over as a JSON body.
//!
//! ```
//! use dispatch_bind_core::config::{BindOptions, NonCallablePolicy};
//!
//! let options = BindOptions::from_json(r#"{ "non_callable": "reject" }"#).unwrap();
//! assert_eq!(options.non_callable, NonCallablePolicy::Reject);
//!
//! // Missing fields fall back to defaults
//! let options = BindOptions::from_json("{}").unwrap();
//! assert_eq!(options, BindOptions::default());
//! ```

use crate::error::{BindError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What to do with mapping entries that are not action creators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NonCallablePolicy {
    /// Leave the key out of the bound mapping
    #[default]
    Drop,
    /// Fail the whole bind with [`BindError::NonCallableEntry`]
    Reject,
}

impl NonCallablePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Drop => "drop",
            Self::Reject => "reject",
        }
    }
}

impl fmt::Display for NonCallablePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NonCallablePolicy {
    type Err = BindError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "drop" => Ok(Self::Drop),
            "reject" => Ok(Self::Reject),
            _ => Err(BindError::UnknownPolicy(s.to_string())),
        }
    }
}

/// Options for [`bind_action_creators_with`](crate::bind::bind_action_creators_with)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BindOptions {
    /// Handling of non-callable mapping entries
    pub non_callable: NonCallablePolicy,
}

impl BindOptions {
    /// Default options: non-callable entries are dropped silently
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that reject non-callable entries
    pub fn strict() -> Self {
        Self {
            non_callable: NonCallablePolicy::Reject,
        }
    }

    /// Set the non-callable policy
    pub fn with_non_callable(mut self, policy: NonCallablePolicy) -> Self {
        self.non_callable = policy;
        self
    }

    /// Parse options from a JSON document
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_drops() {
        assert_eq!(BindOptions::new().non_callable, NonCallablePolicy::Drop);
        assert_eq!(BindOptions::strict().non_callable, NonCallablePolicy::Reject);
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("drop".parse::<NonCallablePolicy>().unwrap(), NonCallablePolicy::Drop);
        assert_eq!(
            " Reject ".parse::<NonCallablePolicy>().unwrap(),
            NonCallablePolicy::Reject
        );

        let err = "loud".parse::<NonCallablePolicy>().unwrap_err();
        assert!(matches!(err, BindError::UnknownPolicy(ref s) if s == "loud"));
    }

    #[test]
    fn test_from_json() {
        let options = BindOptions::from_json(r#"{"non_callable":"reject"}"#).unwrap();
        assert_eq!(options, BindOptions::strict());

        let options = BindOptions::from_json("{}").unwrap();
        assert_eq!(options, BindOptions::default());
    }

    #[test]
    fn test_from_json_invalid() {
        let err = BindOptions::from_json(r#"{"non_callable":"sometimes"}"#).unwrap_err();
        assert!(matches!(err, BindError::Config(_)));
        assert!(err.to_string().starts_with("Invalid bind options"));
    }

    #[test]
    fn test_serialize_roundtrip_name() {
        let json = serde_json::to_string(&BindOptions::strict()).unwrap();
        assert_eq!(json, r#"{"non_callable":"reject"}"#);
        assert_eq!(NonCallablePolicy::Drop.to_string(), "drop");
    }
}
