//! Test utilities for code that binds action creators
//!
//! - [`DispatchRecorder`]: a dispatch function that records every action
//! - [`assert_dispatched!`](crate::assert_dispatched): assert an action
//!   matching a pattern was dispatched
//!
//! # Example
//!
//! ```
//! use dispatch_bind_core::assert_dispatched;
//! use dispatch_bind_core::map::{bind_action_creator_map, CreatorMap};
//! use dispatch_bind_core::testing::DispatchRecorder;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! enum Action {
//!     Increment,
//!     SetValue(i32),
//! }
//!
//! let mut recorder = DispatchRecorder::<Action>::new();
//! let creators = CreatorMap::new()
//!     .with("increment", |()| Action::Increment)
//!     .with("set", |()| Action::SetValue(42));
//! let bound = bind_action_creator_map(&creators, recorder.dispatcher());
//!
//! bound.call("increment", ());
//! bound.call("set", ());
//!
//! let actions = recorder.drain_dispatched();
//! assert_dispatched!(actions, Action::Increment);
//! assert_dispatched!(actions, Action::SetValue(n) if *n > 40);
//! ```

use tokio::sync::mpsc;

/// Records actions handed to its dispatch functions
///
/// Actions are captured through an unbounded channel, so any number of
/// dispatchers (and the wrappers holding them) may outlive a drain.
pub struct DispatchRecorder<A> {
    tx: mpsc::UnboundedSender<A>,
    rx: mpsc::UnboundedReceiver<A>,
}

impl<A: 'static> DispatchRecorder<A> {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { tx, rx }
    }

    /// A dispatch function that records the action and returns `()`
    pub fn dispatcher(&self) -> impl Fn(A) + 'static {
        let tx = self.tx.clone();
        move |action| {
            let _ = tx.send(action);
        }
    }

    /// A dispatch function that records the action and returns `respond(&action)`
    pub fn dispatcher_with<R, F>(&self, respond: F) -> impl Fn(A) -> R + 'static
    where
        F: Fn(&A) -> R + 'static,
    {
        let tx = self.tx.clone();
        move |action| {
            let result = respond(&action);
            let _ = tx.send(action);
            result
        }
    }

    /// Drain all recorded actions, oldest first
    pub fn drain_dispatched(&mut self) -> Vec<A> {
        let mut actions = Vec::new();
        while let Ok(action) = self.rx.try_recv() {
            actions.push(action);
        }
        actions
    }

    /// Check if anything was dispatched since the last drain
    pub fn has_dispatched(&mut self) -> bool {
        !self.drain_dispatched().is_empty()
    }
}

impl<A: 'static> Default for DispatchRecorder<A> {
    fn default() -> Self {
        Self::new()
    }
}

/// Assert that an action matching a pattern was dispatched.
///
/// # Example
///
/// ```ignore
/// let actions = recorder.drain_dispatched();
/// assert_dispatched!(actions, Action::Increment);
/// assert_dispatched!(actions, Action::SetValue(n) if *n == 42);
/// ```
#[macro_export]
macro_rules! assert_dispatched {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            $actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` to be dispatched, but got: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Assert that no action matching a pattern was dispatched.
#[macro_export]
macro_rules! assert_not_dispatched {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            !$actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected no action matching `{}` to be dispatched, but got: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}
