//! Runtime-tagged input for the general binding entry point
//!
//! [`bind_action_creators`](crate::bind::bind_action_creators) accepts either
//! a single creator or a mapping, and decides which at run time. The input is
//! modelled as a [`Bindable`] so data that is neither (a `null`, a number, a
//! mapping entry holding plain data) can still be handed over and reported.

use crate::creator::ActionCreator;
use crate::map::CreatorMap;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// The observed kind of a runtime value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Undefined,
    Boolean,
    Number,
    String,
    Object,
    Function,
}

impl ValueKind {
    /// Kind of a JSON value; arrays count as objects
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) | Value::Object(_) => Self::Object,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Undefined => "undefined",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Object => "object",
            Self::Function => "function",
        }
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, Self::Function)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One value in a mapping input
pub enum Entry<Args, A, Cx = ()> {
    Creator(ActionCreator<Args, A, Cx>),
    /// Plain data; never bound
    Value(Value),
}

impl<Args, A, Cx> Entry<Args, A, Cx> {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Creator(_) => ValueKind::Function,
            Self::Value(value) => ValueKind::of(value),
        }
    }
}

impl<Args, A, Cx> Clone for Entry<Args, A, Cx> {
    fn clone(&self) -> Self {
        match self {
            Self::Creator(creator) => Self::Creator(creator.clone()),
            Self::Value(value) => Self::Value(value.clone()),
        }
    }
}

impl<Args, A, Cx> fmt::Debug for Entry<Args, A, Cx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Creator(creator) => f.debug_tuple("Creator").field(creator).finish(),
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
        }
    }
}

impl<Args, A, Cx> From<ActionCreator<Args, A, Cx>> for Entry<Args, A, Cx> {
    fn from(creator: ActionCreator<Args, A, Cx>) -> Self {
        Self::Creator(creator)
    }
}

impl<Args, A, Cx> From<Value> for Entry<Args, A, Cx> {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

/// Input to [`bind_action_creators`](crate::bind::bind_action_creators)
///
/// # Example
/// ```
/// use dispatch_bind_core::creator::ActionCreator;
/// use dispatch_bind_core::input::{Bindable, Entry, ValueKind};
/// use serde_json::json;
///
/// let single: Bindable<i32, i32> = ActionCreator::new(|n: i32| n * 2).into();
/// assert_eq!(single.kind(), ValueKind::Function);
///
/// let mixed: Bindable<i32, i32> = Bindable::from_entries([
///     ("double", Entry::Creator(ActionCreator::new(|n: i32| n * 2))),
///     ("label", Entry::Value(json!("not a creator"))),
/// ]);
/// assert_eq!(mixed.kind(), ValueKind::Object);
///
/// let missing: Bindable<i32, i32> = None::<ActionCreator<i32, i32>>.into();
/// assert_eq!(missing.kind(), ValueKind::Undefined);
/// ```
pub enum Bindable<Args, A, Cx = ()> {
    /// A single action creator
    Creator(ActionCreator<Args, A, Cx>),
    /// An object-like mapping of entries
    Map(BTreeMap<String, Entry<Args, A, Cx>>),
    /// Any other runtime value. JSON objects and arrays are object-like and
    /// take the mapping path; everything else is rejected.
    Value(Value),
    /// A missing value
    Undefined,
}

impl<Args, A, Cx> Bindable<Args, A, Cx> {
    /// Build a mapping input from key/entry pairs
    pub fn from_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Entry<Args, A, Cx>)>,
        K: Into<String>,
    {
        Self::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Creator(_) => ValueKind::Function,
            Self::Map(_) => ValueKind::Object,
            Self::Value(value) => ValueKind::of(value),
            Self::Undefined => ValueKind::Undefined,
        }
    }

    /// Whether the value takes the mapping path when bound
    pub fn is_object_like(&self) -> bool {
        matches!(
            self,
            Self::Map(_) | Self::Value(Value::Object(_) | Value::Array(_))
        )
    }
}

impl<Args, A, Cx> fmt::Debug for Bindable<Args, A, Cx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Creator(creator) => f.debug_tuple("Creator").field(creator).finish(),
            Self::Map(entries) => f.debug_tuple("Map").field(entries).finish(),
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Undefined => f.write_str("Undefined"),
        }
    }
}

impl<Args, A, Cx> From<ActionCreator<Args, A, Cx>> for Bindable<Args, A, Cx> {
    fn from(creator: ActionCreator<Args, A, Cx>) -> Self {
        Self::Creator(creator)
    }
}

impl<Args, A, Cx> From<CreatorMap<Args, A, Cx>> for Bindable<Args, A, Cx> {
    fn from(creators: CreatorMap<Args, A, Cx>) -> Self {
        Self::from_entries(
            creators
                .into_iter()
                .map(|(key, creator)| (key, Entry::Creator(creator))),
        )
    }
}

impl<Args, A, Cx> From<BTreeMap<String, Entry<Args, A, Cx>>> for Bindable<Args, A, Cx> {
    fn from(entries: BTreeMap<String, Entry<Args, A, Cx>>) -> Self {
        Self::Map(entries)
    }
}

impl<Args, A, Cx> From<Value> for Bindable<Args, A, Cx> {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl<T, Args, A, Cx> From<Option<T>> for Bindable<Args, A, Cx>
where
    T: Into<Bindable<Args, A, Cx>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Undefined, Into::into)
    }
}

/// Entries of an object-like JSON value: object members by key, array
/// elements by decimal index
pub(crate) fn data_entries<Args, A, Cx>(value: Value) -> BTreeMap<String, Entry<Args, A, Cx>> {
    match value {
        Value::Object(members) => members
            .into_iter()
            .map(|(key, value)| (key, Entry::Value(value)))
            .collect(),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, value)| (index.to_string(), Entry::Value(value)))
            .collect(),
        _ => BTreeMap::new(),
    }
}
