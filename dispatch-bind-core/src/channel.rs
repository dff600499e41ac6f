//! Dispatching into an async action channel
//!
//! Bound creators are synchronous, but the store they feed often lives behind
//! a channel drained by an async main loop. [`channel_dispatch`] turns the
//! channel's sender into a dispatch function.
//!
//! ```
//! use dispatch_bind_core::channel::channel_dispatch;
//! use dispatch_bind_core::creator::{bind_action_creator, ActionCreator};
//! use tokio::sync::mpsc;
//!
//! #[derive(Debug, PartialEq)]
//! enum Action {
//!     Search(String),
//! }
//!
//! let (tx, mut rx) = mpsc::unbounded_channel();
//! let search = ActionCreator::new(|query: &'static str| Action::Search(query.to_string()));
//! let bound = bind_action_creator(&search, channel_dispatch(tx));
//!
//! bound.call("rust").unwrap();
//! assert_eq!(rx.try_recv().unwrap(), Action::Search("rust".into()));
//! ```

use tokio::sync::mpsc;

/// A dispatch function that sends every action through `tx`
///
/// Returns the send result unchanged, so a closed receiver surfaces as
/// `Err(SendError(action))` from the bound creator.
pub fn channel_dispatch<A: 'static>(
    tx: mpsc::UnboundedSender<A>,
) -> impl Fn(A) -> Result<(), mpsc::error::SendError<A>> + 'static {
    move |action| tx.send(action)
}
