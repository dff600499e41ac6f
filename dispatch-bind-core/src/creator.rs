//! Action creators and dispatch-bound wrappers
//!
//! An [`ActionCreator`] computes an action from its arguments. Binding it to a
//! dispatch function yields a [`BoundActionCreator`] with the same arguments
//! that hands the action straight to dispatch and returns dispatch's result.
//!
//! ```
//! use dispatch_bind_core::creator::{bind_action_creator, ActionCreator};
//!
//! #[derive(Debug, PartialEq)]
//! enum Action {
//!     Add(i64, i64),
//! }
//!
//! let add = ActionCreator::new(|(a, b): (i64, i64)| Action::Add(a, b));
//! let bound = bind_action_creator(&add, |action: Action| format!("{action:?}"));
//!
//! assert_eq!(bound.call((1, 2)), "Add(1, 2)");
//! ```
//!
//! # Invocation context
//!
//! Creators may read a context value supplied by the caller at call time.
//! The context type defaults to `()`; creators built with
//! [`ActionCreator::with_context`] receive whatever the caller passes to
//! [`BoundActionCreator::call_with`], unchanged.

use std::fmt;
use std::rc::Rc;

/// Dispatch function shared by every wrapper produced in one bind call
pub(crate) type SharedDispatch<A, R> = Rc<dyn Fn(A) -> R>;

/// A function that computes an action from its arguments
///
/// `Args` is the argument list (use a tuple for several arguments), `A` the
/// action type, and `Cx` the invocation context. Cloning is cheap and clones
/// share the same underlying function.
pub struct ActionCreator<Args, A, Cx = ()> {
    create: Rc<dyn Fn(&Cx, Args) -> A>,
}

impl<Args, A, Cx> ActionCreator<Args, A, Cx>
where
    Args: 'static,
    A: 'static,
    Cx: 'static,
{
    /// Create an action creator that ignores whatever context it is given
    ///
    /// Use this to mix context-free creators into a map whose context type
    /// is not `()`.
    pub fn without_context<F>(create: F) -> Self
    where
        F: Fn(Args) -> A + 'static,
    {
        Self {
            create: Rc::new(move |_cx: &Cx, args: Args| create(args)),
        }
    }

    /// Create an action creator that reads the invocation context
    pub fn with_context<F>(create: F) -> Self
    where
        F: Fn(&Cx, Args) -> A + 'static,
    {
        Self {
            create: Rc::new(create),
        }
    }
}

impl<Args, A, Cx> ActionCreator<Args, A, Cx> {
    /// Compute the action for `args` under an explicit context
    pub fn create_with(&self, cx: &Cx, args: Args) -> A {
        (self.create)(cx, args)
    }

    /// Whether both handles share the same underlying function
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.create, &other.create)
    }
}

impl<Args: 'static, A: 'static> ActionCreator<Args, A, ()> {
    /// Create an action creator
    pub fn new<F>(create: F) -> Self
    where
        F: Fn(Args) -> A + 'static,
    {
        Self::without_context(create)
    }

    /// Compute the action for `args`
    pub fn create(&self, args: Args) -> A {
        (self.create)(&(), args)
    }
}

impl<Args, A, Cx> Clone for ActionCreator<Args, A, Cx> {
    fn clone(&self) -> Self {
        Self {
            create: Rc::clone(&self.create),
        }
    }
}

impl<Args, A, Cx> fmt::Debug for ActionCreator<Args, A, Cx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionCreator").finish_non_exhaustive()
    }
}

/// An action creator whose result is submitted to a dispatch function
///
/// Calling it is exactly `dispatch(creator(args))`: the arguments and the
/// context go to the creator unchanged, and dispatch's return value comes
/// back unchanged. Panics from either side are not caught.
pub struct BoundActionCreator<Args, R, Cx = ()> {
    call: Rc<dyn Fn(&Cx, Args) -> R>,
}

impl<Args, R, Cx> BoundActionCreator<Args, R, Cx>
where
    Args: 'static,
    R: 'static,
    Cx: 'static,
{
    pub(crate) fn from_shared<A: 'static>(
        creator: &ActionCreator<Args, A, Cx>,
        dispatch: &SharedDispatch<A, R>,
    ) -> Self {
        let creator = creator.clone();
        let dispatch = Rc::clone(dispatch);
        Self {
            call: Rc::new(move |cx: &Cx, args: Args| dispatch(creator.create_with(cx, args))),
        }
    }
}

impl<Args, R, Cx> BoundActionCreator<Args, R, Cx> {
    /// Create the action under an explicit context and dispatch it
    pub fn call_with(&self, cx: &Cx, args: Args) -> R {
        (self.call)(cx, args)
    }

    /// Whether both handles share the same underlying wrapper
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.call, &other.call)
    }
}

impl<Args, R> BoundActionCreator<Args, R, ()> {
    /// Create the action and dispatch it
    pub fn call(&self, args: Args) -> R {
        (self.call)(&(), args)
    }
}

impl<Args, R, Cx> Clone for BoundActionCreator<Args, R, Cx> {
    fn clone(&self) -> Self {
        Self {
            call: Rc::clone(&self.call),
        }
    }
}

impl<Args, R, Cx> fmt::Debug for BoundActionCreator<Args, R, Cx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundActionCreator").finish_non_exhaustive()
    }
}

/// Bind a single action creator to a dispatch function
///
/// The creator is shared, not copied: the wrapper holds a handle to the same
/// function. Dispatch is not called until the wrapper is.
pub fn bind_action_creator<Args, A, R, Cx, D>(
    creator: &ActionCreator<Args, A, Cx>,
    dispatch: D,
) -> BoundActionCreator<Args, R, Cx>
where
    Args: 'static,
    A: 'static,
    R: 'static,
    Cx: 'static,
    D: Fn(A) -> R + 'static,
{
    let dispatch: SharedDispatch<A, R> = Rc::new(dispatch);
    BoundActionCreator::from_shared(creator, &dispatch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::panic::{self, AssertUnwindSafe};

    #[derive(Clone, Debug, PartialEq)]
    enum TestAction {
        Add(i64, i64),
        Greet(String),
    }

    #[test]
    fn test_bound_dispatches_created_action() {
        let add = ActionCreator::new(|(a, b): (i64, i64)| TestAction::Add(a, b));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let bound = bind_action_creator(&add, move |action: TestAction| {
            sink.borrow_mut().push(action);
            42
        });

        assert_eq!(bound.call((1, 2)), 42);
        assert_eq!(bound.call((3, 4)), 42);
        assert_eq!(
            *seen.borrow(),
            vec![TestAction::Add(1, 2), TestAction::Add(3, 4)]
        );
    }

    #[test]
    fn test_dispatch_not_called_until_invoked() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let add = ActionCreator::new(|(a, b): (i64, i64)| TestAction::Add(a, b));

        let bound = bind_action_creator(&add, move |_action: TestAction| {
            counter.set(counter.get() + 1);
        });
        assert_eq!(calls.get(), 0);

        bound.call((0, 0));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_context_forwarded() {
        struct Receiver {
            greeting: &'static str,
        }

        let greet = ActionCreator::with_context(|cx: &Receiver, name: &'static str| {
            TestAction::Greet(format!("{}, {}", cx.greeting, name))
        });
        let bound = bind_action_creator(&greet, |action: TestAction| action);

        let hello = Receiver { greeting: "hello" };
        let hi = Receiver { greeting: "hi" };
        assert_eq!(
            bound.call_with(&hello, "ada"),
            TestAction::Greet("hello, ada".into())
        );
        assert_eq!(
            bound.call_with(&hi, "ada"),
            TestAction::Greet("hi, ada".into())
        );
    }

    #[test]
    fn test_creator_panic_skips_dispatch() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let boom = ActionCreator::new(|_: ()| -> TestAction { panic!("creator failed") });

        let bound = bind_action_creator(&boom, move |_action: TestAction| {
            counter.set(counter.get() + 1);
        });

        let result = panic::catch_unwind(AssertUnwindSafe(|| bound.call(())));
        let payload = result.unwrap_err();
        assert_eq!(payload.downcast_ref::<&str>(), Some(&"creator failed"));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_errors_pass_through_unchanged() {
        #[derive(Debug, PartialEq)]
        struct Rejected(&'static str);

        let parse = ActionCreator::new(|raw: &'static str| {
            raw.parse::<i64>()
                .map(|n| TestAction::Add(n, 0))
                .map_err(|_| Rejected(raw))
        });
        let bound = bind_action_creator(&parse, |result: Result<TestAction, Rejected>| result);

        assert_eq!(bound.call("7"), Ok(TestAction::Add(7, 0)));
        assert_eq!(bound.call("seven"), Err(Rejected("seven")));
    }

    #[test]
    fn test_rebinding_yields_distinct_wrappers() {
        let add = ActionCreator::new(|(a, b): (i64, i64)| TestAction::Add(a, b));
        let first = bind_action_creator(&add, |action: TestAction| action);
        let second = bind_action_creator(&add, |action: TestAction| action);

        assert!(!first.ptr_eq(&second));
        assert!(first.ptr_eq(&first.clone()));
        assert_eq!(first.call((1, 1)), second.call((1, 1)));
        // Source creator is untouched
        assert_eq!(add.create((5, 6)), TestAction::Add(5, 6));
    }
}
