//! The general binding entry point
//!
//! [`bind_action_creators`] takes a [`Bindable`] and mirrors its shape:
//!
//! - a creator becomes a single [`BoundActionCreator`]
//! - an object-like value becomes a [`BoundCreatorMap`] holding a wrapper for
//!   every callable entry; other entries are dropped
//! - anything else fails with [`BindError::InvalidArgument`]
//!
//! ```
//! use dispatch_bind_core::bind::bind_action_creators;
//! use dispatch_bind_core::creator::ActionCreator;
//! use dispatch_bind_core::input::{Bindable, Entry};
//! use serde_json::json;
//!
//! let input: Bindable<i32, i32> = Bindable::from_entries([
//!     ("double", Entry::Creator(ActionCreator::new(|n: i32| n * 2))),
//!     ("version", Entry::Value(json!(3))),
//! ]);
//!
//! let bound = bind_action_creators(input, |n: i32| n + 1).unwrap();
//! let map = bound.into_map().unwrap();
//! assert_eq!(map.keys().collect::<Vec<_>>(), vec!["double"]);
//! assert_eq!(map.call("double", 5), Some(11));
//!
//! let err = bind_action_creators(Bindable::<i32, i32>::Value(json!(null)), |n: i32| n)
//!     .unwrap_err();
//! assert!(err.to_string().contains("instead received null"));
//! ```

use crate::config::{BindOptions, NonCallablePolicy};
use crate::creator::{BoundActionCreator, SharedDispatch};
use crate::error::{BindError, Result};
use crate::input::{data_entries, Bindable, Entry, ValueKind};
use crate::map::BoundCreatorMap;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use tracing::{debug, trace};

/// Result of [`bind_action_creators`], shaped like its input
pub enum Bound<Args, R, Cx = ()> {
    Single(BoundActionCreator<Args, R, Cx>),
    Map(BoundCreatorMap<Args, R, Cx>),
}

impl<Args, R, Cx> Bound<Args, R, Cx> {
    pub fn is_single(&self) -> bool {
        matches!(self, Self::Single(_))
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    pub fn as_single(&self) -> Option<&BoundActionCreator<Args, R, Cx>> {
        match self {
            Self::Single(bound) => Some(bound),
            Self::Map(_) => None,
        }
    }

    pub fn as_map(&self) -> Option<&BoundCreatorMap<Args, R, Cx>> {
        match self {
            Self::Map(bound) => Some(bound),
            Self::Single(_) => None,
        }
    }

    pub fn into_single(self) -> Option<BoundActionCreator<Args, R, Cx>> {
        match self {
            Self::Single(bound) => Some(bound),
            Self::Map(_) => None,
        }
    }

    pub fn into_map(self) -> Option<BoundCreatorMap<Args, R, Cx>> {
        match self {
            Self::Map(bound) => Some(bound),
            Self::Single(_) => None,
        }
    }
}

impl<Args, R, Cx> fmt::Debug for Bound<Args, R, Cx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(bound) => f.debug_tuple("Single").field(bound).finish(),
            Self::Map(bound) => f.debug_tuple("Map").field(bound).finish(),
        }
    }
}

/// Bind a creator or a mapping of creators to `dispatch`
///
/// Non-callable mapping entries are dropped silently. See
/// [`bind_action_creators_with`] to reject them instead.
pub fn bind_action_creators<Args, A, R, Cx, D>(
    input: Bindable<Args, A, Cx>,
    dispatch: D,
) -> Result<Bound<Args, R, Cx>>
where
    Args: 'static,
    A: 'static,
    R: 'static,
    Cx: 'static,
    D: Fn(A) -> R + 'static,
{
    bind_action_creators_with(input, dispatch, &BindOptions::default())
}

/// Bind a creator or a mapping of creators to `dispatch` under `options`
///
/// Validation happens here, once. On error nothing is bound and `dispatch`
/// is dropped without having been called.
pub fn bind_action_creators_with<Args, A, R, Cx, D>(
    input: Bindable<Args, A, Cx>,
    dispatch: D,
    options: &BindOptions,
) -> Result<Bound<Args, R, Cx>>
where
    Args: 'static,
    A: 'static,
    R: 'static,
    Cx: 'static,
    D: Fn(A) -> R + 'static,
{
    let dispatch: SharedDispatch<A, R> = Rc::new(dispatch);

    let entries = match input {
        Bindable::Creator(creator) => {
            debug!(shape = "single", "Binding action creator");
            let bound = BoundActionCreator::from_shared(&creator, &dispatch);
            return Ok(Bound::Single(bound));
        }
        Bindable::Map(entries) => entries,
        Bindable::Value(value @ (Value::Object(_) | Value::Array(_))) => data_entries(value),
        other => {
            let kind = other.kind();
            debug!(kind = %kind, "Rejecting non-bindable input");
            return Err(BindError::InvalidArgument { kind });
        }
    };

    let total = entries.len();
    let mut bound = BTreeMap::new();
    for (key, entry) in entries {
        match entry {
            Entry::Creator(creator) => {
                bound.insert(key, BoundActionCreator::from_shared(&creator, &dispatch));
            }
            Entry::Value(value) => {
                let kind = ValueKind::of(&value);
                match options.non_callable {
                    NonCallablePolicy::Drop => {
                        trace!(key = %key, kind = %kind, "Dropping non-callable entry");
                    }
                    NonCallablePolicy::Reject => {
                        debug!(key = %key, kind = %kind, "Rejecting non-callable entry");
                        return Err(BindError::NonCallableEntry { key, kind });
                    }
                }
            }
        }
    }

    debug!(
        shape = "map",
        bound = bound.len(),
        dropped = total - bound.len(),
        "Bound action creators"
    );
    Ok(Bound::Map(BoundCreatorMap::from_bound(bound)))
}
