//! dispatch-bind: bind action creators to a dispatch function
//!
//! Turns functions that build actions into functions that dispatch them.
//! Hand it a single creator or a keyed mapping of creators plus a dispatch
//! function, and get back the same shape with every creator wrapped.
//!
//! # Example
//! ```
//! use dispatch_bind::prelude::*;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! enum Action {
//!     Add { a: i64, b: i64 },
//! }
//!
//! let add = ActionCreator::new(|(a, b): (i64, i64)| Action::Add { a, b });
//! let bound = bind_action_creator(&add, |action: Action| vec![action]);
//!
//! assert_eq!(bound.call((1, 2)), vec![Action::Add { a: 1, b: 2 }]);
//! ```

// Re-export everything from core
pub use dispatch_bind_core::*;

/// Prelude for convenient imports
pub mod prelude {
    // Binding
    pub use dispatch_bind_core::{
        bind_action_creator, bind_action_creator_map, bind_action_creators,
        bind_action_creators_with, ActionCreator, Bound, BoundActionCreator, BoundCreatorMap,
        CreatorMap,
    };

    // Runtime input
    pub use dispatch_bind_core::{Bindable, Entry, ValueKind};

    // Options and errors
    pub use dispatch_bind_core::{BindError, BindOptions, NonCallablePolicy};

    // Channel dispatch
    pub use dispatch_bind_core::channel_dispatch;
}
