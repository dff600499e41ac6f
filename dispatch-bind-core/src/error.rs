//! Error types for binding action creators

use crate::input::ValueKind;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BindError>;

/// Errors raised while binding action creators
///
/// Only binding itself can fail. Anything a bound creator or the dispatch
/// function does at call time is passed through to the caller untouched.
#[derive(Error, Debug)]
pub enum BindError {
    /// The input was neither an action creator nor an object-like mapping
    #[error(
        "bindActionCreators expected an object or a function, instead received {kind}. \
         Did you write \"import ActionCreators from\" instead of \"import * as ActionCreators from\"?"
    )]
    InvalidArgument { kind: ValueKind },

    /// A mapping entry was not callable and the policy is `Reject`
    #[error("bindActionCreators expected a function for key \"{key}\", instead received {kind}")]
    NonCallableEntry { key: String, kind: ValueKind },

    #[error("Invalid bind options: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Unknown non-callable policy: {0:?} (expected \"drop\" or \"reject\")")]
    UnknownPolicy(String),
}

impl BindError {
    /// The observed kind that caused the failure, if any
    pub fn kind(&self) -> Option<ValueKind> {
        match self {
            Self::InvalidArgument { kind } | Self::NonCallableEntry { kind, .. } => Some(*kind),
            Self::Config(_) | Self::UnknownPolicy(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message_null() {
        let err = BindError::InvalidArgument {
            kind: ValueKind::Null,
        };
        let msg = err.to_string();
        assert!(msg.contains("instead received null."));
        assert!(msg.contains("import * as ActionCreators from"));
    }

    #[test]
    fn test_invalid_argument_message_number() {
        let err = BindError::InvalidArgument {
            kind: ValueKind::Number,
        };
        let msg = err.to_string();
        assert!(msg.contains("instead received number."));
        assert!(!msg.contains("null"));
    }

    #[test]
    fn test_kind_accessor() {
        let err = BindError::NonCallableEntry {
            key: "b".into(),
            kind: ValueKind::String,
        };
        assert_eq!(err.kind(), Some(ValueKind::String));
        assert_eq!(BindError::UnknownPolicy("loud".into()).kind(), None);
    }
}
