//! Keyed collections of action creators

use crate::creator::{ActionCreator, BoundActionCreator, SharedDispatch};
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// A mapping from names to action creators
///
/// Every creator in one map shares the same argument, action, and context
/// types. Keys are unique; iteration is in key order.
///
/// # Example
/// ```
/// use dispatch_bind_core::map::CreatorMap;
///
/// #[derive(Debug, PartialEq)]
/// enum Action {
///     Increment(i32),
///     Decrement(i32),
/// }
///
/// let creators = CreatorMap::new()
///     .with("increment", Action::Increment)
///     .with("decrement", Action::Decrement);
///
/// assert_eq!(creators.len(), 2);
/// assert_eq!(creators.get("increment").unwrap().create(3), Action::Increment(3));
/// ```
pub struct CreatorMap<Args, A, Cx = ()> {
    creators: BTreeMap<String, ActionCreator<Args, A, Cx>>,
}

impl<Args: 'static, A: 'static> CreatorMap<Args, A, ()> {
    /// Create an empty map
    pub fn new() -> Self {
        Self::empty()
    }

    /// Add a creator built from a plain function, builder style
    pub fn with<F>(mut self, key: impl Into<String>, create: F) -> Self
    where
        F: Fn(Args) -> A + 'static,
    {
        self.insert(key, ActionCreator::new(create));
        self
    }
}

impl<Args, A, Cx> CreatorMap<Args, A, Cx> {
    /// Create an empty map for any context type
    pub fn empty() -> Self {
        Self {
            creators: BTreeMap::new(),
        }
    }

    /// Insert a creator, returning the one previously stored under `key`
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        creator: ActionCreator<Args, A, Cx>,
    ) -> Option<ActionCreator<Args, A, Cx>> {
        self.creators.insert(key.into(), creator)
    }

    /// Remove a creator
    pub fn remove(&mut self, key: &str) -> Option<ActionCreator<Args, A, Cx>> {
        self.creators.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&ActionCreator<Args, A, Cx>> {
        self.creators.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.creators.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.creators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creators.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.creators.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ActionCreator<Args, A, Cx>)> {
        self.creators.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<Args, A, Cx> Default for CreatorMap<Args, A, Cx> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<Args, A, Cx> Clone for CreatorMap<Args, A, Cx> {
    fn clone(&self) -> Self {
        Self {
            creators: self.creators.clone(),
        }
    }
}

impl<Args, A, Cx> fmt::Debug for CreatorMap<Args, A, Cx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreatorMap")
            .field("keys", &self.creators.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<K, Args, A, Cx> FromIterator<(K, ActionCreator<Args, A, Cx>)> for CreatorMap<Args, A, Cx>
where
    K: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, ActionCreator<Args, A, Cx>)>>(iter: I) -> Self {
        Self {
            creators: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<Args, A, Cx> IntoIterator for CreatorMap<Args, A, Cx> {
    type Item = (String, ActionCreator<Args, A, Cx>);
    type IntoIter = btree_map::IntoIter<String, ActionCreator<Args, A, Cx>>;

    fn into_iter(self) -> Self::IntoIter {
        self.creators.into_iter()
    }
}

/// A mapping from names to dispatch-bound action creators
///
/// Produced by [`bind_action_creator_map`] or the mapping path of
/// [`bind_action_creators`](crate::bind::bind_action_creators). Every
/// wrapper in one map shares a single dispatch function.
pub struct BoundCreatorMap<Args, R, Cx = ()> {
    bound: BTreeMap<String, BoundActionCreator<Args, R, Cx>>,
}

impl<Args, R, Cx> BoundCreatorMap<Args, R, Cx> {
    pub(crate) fn from_bound(bound: BTreeMap<String, BoundActionCreator<Args, R, Cx>>) -> Self {
        Self { bound }
    }

    pub fn get(&self, key: &str) -> Option<&BoundActionCreator<Args, R, Cx>> {
        self.bound.get(key)
    }

    /// Invoke the wrapper under `key` with an explicit context
    ///
    /// Returns `None` if no wrapper is bound under `key`.
    pub fn call_with(&self, key: &str, cx: &Cx, args: Args) -> Option<R> {
        self.bound.get(key).map(|bound| bound.call_with(cx, args))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.bound.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.bound.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bound.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.bound.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BoundActionCreator<Args, R, Cx>)> {
        self.bound.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<Args, R> BoundCreatorMap<Args, R, ()> {
    /// Invoke the wrapper under `key`
    ///
    /// Returns `None` if no wrapper is bound under `key`; dispatch is not
    /// called in that case.
    pub fn call(&self, key: &str, args: Args) -> Option<R> {
        self.bound.get(key).map(|bound| bound.call(args))
    }
}

impl<Args, R, Cx> Clone for BoundCreatorMap<Args, R, Cx> {
    fn clone(&self) -> Self {
        Self {
            bound: self.bound.clone(),
        }
    }
}

impl<Args, R, Cx> fmt::Debug for BoundCreatorMap<Args, R, Cx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundCreatorMap")
            .field("keys", &self.bound.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<Args, R, Cx> IntoIterator for BoundCreatorMap<Args, R, Cx> {
    type Item = (String, BoundActionCreator<Args, R, Cx>);
    type IntoIter = btree_map::IntoIter<String, BoundActionCreator<Args, R, Cx>>;

    fn into_iter(self) -> Self::IntoIter {
        self.bound.into_iter()
    }
}

impl<'a, Args, R, Cx> IntoIterator for &'a BoundCreatorMap<Args, R, Cx> {
    type Item = (&'a String, &'a BoundActionCreator<Args, R, Cx>);
    type IntoIter = btree_map::Iter<'a, String, BoundActionCreator<Args, R, Cx>>;

    fn into_iter(self) -> Self::IntoIter {
        self.bound.iter()
    }
}

/// Bind every creator in `creators` to one dispatch function
///
/// The result has exactly the keys of `creators`. The input map is only
/// read; binding it again produces a new, independent map.
pub fn bind_action_creator_map<Args, A, R, Cx, D>(
    creators: &CreatorMap<Args, A, Cx>,
    dispatch: D,
) -> BoundCreatorMap<Args, R, Cx>
where
    Args: 'static,
    A: 'static,
    R: 'static,
    Cx: 'static,
    D: Fn(A) -> R + 'static,
{
    let dispatch: SharedDispatch<A, R> = Rc::new(dispatch);
    let bound = creators
        .creators
        .iter()
        .map(|(key, creator)| {
            (
                key.clone(),
                BoundActionCreator::from_shared(creator, &dispatch),
            )
        })
        .collect();
    BoundCreatorMap::from_bound(bound)
}
