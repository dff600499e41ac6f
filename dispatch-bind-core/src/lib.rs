//! Core types for dispatch-bind
//!
//! This crate turns action creators (functions that build an action) into
//! bound action creators that submit the action to a dispatch function and
//! return whatever dispatch returns.
//!
//! # Core Concepts
//!
//! - **ActionCreator**: computes an action from its arguments
//! - **Dispatch**: any `Fn(A) -> R`, usually a thin wrapper over a store
//! - **BoundActionCreator**: `dispatch(creator(args))` behind one call
//! - **Bindable**: a single creator or a keyed mapping, decided at run time
//!
//! # Basic Example
//!
//! ```
//! use dispatch_bind_core::prelude::*;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! enum Action {
//!     Increment(i32),
//!     Decrement(i32),
//! }
//!
//! // Any store works; here it is just a counter behind a RefCell
//! let counter = Rc::new(RefCell::new(0));
//! let store = Rc::clone(&counter);
//! let dispatch = move |action: Action| {
//!     let mut count = store.borrow_mut();
//!     match action {
//!         Action::Increment(n) => *count += n,
//!         Action::Decrement(n) => *count -= n,
//!     }
//!     *count
//! };
//!
//! let creators = CreatorMap::new()
//!     .with("increment", Action::Increment)
//!     .with("decrement", Action::Decrement);
//! let actions = bind_action_creator_map(&creators, dispatch);
//!
//! assert_eq!(actions.call("increment", 5), Some(5));
//! assert_eq!(actions.call("decrement", 2), Some(3));
//! assert_eq!(*counter.borrow(), 3);
//! ```
//!
//! # Runtime-shaped input
//!
//! When the shape of the input is only known at run time, wrap it in a
//! [`Bindable`] and call [`bind_action_creators`]. The result mirrors the
//! input; anything that is neither a creator nor object-like is rejected
//! with [`BindError::InvalidArgument`].
//!
//! ```
//! use dispatch_bind_core::prelude::*;
//! use serde_json::json;
//!
//! let input: Bindable<(), &'static str> = json!(42).into();
//! let err = bind_action_creators(input, |action: &'static str| action).unwrap_err();
//! assert!(err.to_string().contains("instead received number"));
//! ```

pub mod bind;
pub mod channel;
pub mod config;
pub mod creator;
pub mod error;
pub mod input;
pub mod map;
pub mod testing;

// Binding exports
pub use bind::{bind_action_creators, bind_action_creators_with, Bound};
pub use creator::{bind_action_creator, ActionCreator, BoundActionCreator};
pub use map::{bind_action_creator_map, BoundCreatorMap, CreatorMap};

// Input exports
pub use input::{Bindable, Entry, ValueKind};

// Config and error exports
pub use config::{BindOptions, NonCallablePolicy};
pub use error::{BindError, Result};

// Channel exports
pub use channel::channel_dispatch;

// Testing exports
pub use testing::DispatchRecorder;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::bind::{bind_action_creators, bind_action_creators_with, Bound};
    pub use crate::channel::channel_dispatch;
    pub use crate::config::{BindOptions, NonCallablePolicy};
    pub use crate::creator::{bind_action_creator, ActionCreator, BoundActionCreator};
    pub use crate::error::BindError;
    pub use crate::input::{Bindable, Entry, ValueKind};
    pub use crate::map::{bind_action_creator_map, BoundCreatorMap, CreatorMap};
}
