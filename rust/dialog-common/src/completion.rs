//! A single-settlement completion handle with any number of listeners.
//!
//! [`pending`] produces a pair: a [`Settler`] that is consumed by settling,
//! and a [`Completion`] that observers hold on to. Settlement is the one-time
//! transition from pending to resolved (`Ok`) or rejected (`Err`).
//!
//! Observers can either register listeners or `.await` the handle:
//!
//! ```rust
//! use dialog_common::completion::pending;
//! use std::sync::{Arc, Mutex};
//!
//! let (settler, completion) = pending::<usize, ()>();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//!
//! let early = seen.clone();
//! completion.on_success(move |index| early.lock().unwrap().push(("early", index)));
//!
//! settler.resolve(2);
//!
//! let late = seen.clone();
//! completion.on_success(move |index| late.lock().unwrap().push(("late", index)));
//!
//! assert_eq!(*seen.lock().unwrap(), vec![("early", 2), ("late", 2)]);
//! assert_eq!(completion.outcome(), Some(Ok(2)));
//! ```

use crate::{BoxedOnce, ConditionalSend, ConditionalSync, boxed_once};
use parking_lot::Mutex;
use std::{
    fmt::{Debug, Formatter},
    future::IntoFuture,
    sync::Arc,
};
use tokio::sync::watch;

#[cfg(not(target_arch = "wasm32"))]
type Settled<T, E> = futures_util::future::BoxFuture<'static, Result<T, E>>;

#[cfg(target_arch = "wasm32")]
type Settled<T, E> = futures_util::future::LocalBoxFuture<'static, Result<T, E>>;

type Outcome<T, E> = Option<Result<T, E>>;

struct State<T, E> {
    outcome: watch::Sender<Outcome<T, E>>,
    on_success: Vec<BoxedOnce<T>>,
    on_error: Vec<BoxedOnce<E>>,
}

type SharedState<T, E> = Arc<Mutex<State<T, E>>>;

/// Create a pending completion along with the [`Settler`] that settles it.
pub fn pending<T, E>() -> (Settler<T, E>, Completion<T, E>) {
    let (outcome, settled) = watch::channel(None);
    let state = Arc::new(Mutex::new(State {
        outcome,
        on_success: Vec::new(),
        on_error: Vec::new(),
    }));

    (
        Settler {
            state: Some(state.clone()),
        },
        Completion { state, settled },
    )
}

/// The observing half of a completion.
///
/// Clones share the same underlying state, so every clone sees the same
/// settlement.
pub struct Completion<T, E> {
    state: SharedState<T, E>,
    settled: watch::Receiver<Outcome<T, E>>,
}

impl<T, E> Clone for Completion<T, E> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            settled: self.settled.clone(),
        }
    }
}

impl<T, E> Completion<T, E>
where
    T: Clone,
    E: Clone,
{
    /// Register a listener for a successful settlement.
    ///
    /// If the completion already resolved, the listener is invoked right away
    /// with the resolved value. If it already rejected, the listener is
    /// discarded.
    pub fn on_success<F>(&self, listener: F) -> &Self
    where
        F: FnOnce(T) + ConditionalSend + 'static,
    {
        let mut state = self.state.lock();
        let value = match &*self.settled.borrow() {
            None => {
                state.on_success.push(boxed_once(listener));
                return self;
            }
            Some(Ok(value)) => Some(value.clone()),
            Some(Err(_)) => None,
        };
        drop(state);

        if let Some(value) = value {
            listener(value);
        }
        self
    }

    /// Register a listener for a rejected settlement.
    ///
    /// If the completion already rejected, the listener is invoked right away
    /// with the rejection. If it already resolved, the listener is discarded.
    pub fn on_error<F>(&self, listener: F) -> &Self
    where
        F: FnOnce(E) + ConditionalSend + 'static,
    {
        let mut state = self.state.lock();
        let error = match &*self.settled.borrow() {
            None => {
                state.on_error.push(boxed_once(listener));
                return self;
            }
            Some(Err(error)) => Some(error.clone()),
            Some(Ok(_)) => None,
        };
        drop(state);

        if let Some(error) = error {
            listener(error);
        }
        self
    }

    /// The settled value, or `None` while still pending.
    pub fn outcome(&self) -> Option<Result<T, E>> {
        self.settled.borrow().clone()
    }

    /// Wait for the settlement.
    ///
    /// Never returns if the [`Settler`] is dropped without settling.
    pub async fn settled(&self) -> Result<T, E> {
        let mut settled = self.settled.clone();
        let outcome = settled
            .wait_for(Option::is_some)
            .await
            .ok()
            .and_then(|outcome| (*outcome).clone());

        match outcome {
            Some(outcome) => outcome,
            None => std::future::pending().await,
        }
    }
}

impl<T, E> Completion<T, E> {
    /// Whether the completion has been settled.
    pub fn is_settled(&self) -> bool {
        self.settled.borrow().is_some()
    }
}

impl<T, E> IntoFuture for Completion<T, E>
where
    T: Clone + ConditionalSync + 'static,
    E: Clone + ConditionalSync + 'static,
{
    type Output = Result<T, E>;
    type IntoFuture = Settled<T, E>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(async move { self.settled().await })
    }
}

impl<T: Debug, E: Debug> Debug for Completion<T, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("Completion")
            .field("outcome", &*self.settled.borrow())
            .field("on_success", &state.on_success.len())
            .field("on_error", &state.on_error.len())
            .finish()
    }
}

/// The settling half of a completion.
///
/// Every settling method consumes the settler, so a completion can only ever
/// be settled once.
pub struct Settler<T, E> {
    state: Option<SharedState<T, E>>,
}

impl<T, E> Settler<T, E>
where
    T: Clone,
    E: Clone,
{
    /// Resolve the completion with `value`.
    pub fn resolve(self, value: T) {
        self.settle(Ok(value))
    }

    /// Reject the completion with `error`.
    pub fn reject(self, error: E) {
        self.settle(Err(error))
    }

    /// Settle the completion with the given outcome.
    ///
    /// The outcome is published to awaiting tasks first. Listeners then run
    /// in registration order after the internal lock has been released, so
    /// they are free to register further listeners on the same completion.
    pub fn settle(mut self, outcome: Result<T, E>) {
        let Some(state) = self.state.take() else {
            return;
        };

        let (on_success, on_error) = {
            let mut state = state.lock();
            state.outcome.send_replace(Some(outcome.clone()));
            (
                std::mem::take(&mut state.on_success),
                std::mem::take(&mut state.on_error),
            )
        };

        match outcome {
            Ok(value) => {
                for listener in on_success {
                    listener(value.clone());
                }
            }
            Err(error) => {
                for listener in on_error {
                    listener(error.clone());
                }
            }
        }
    }
}

impl<T, E> Drop for Settler<T, E> {
    fn drop(&mut self) {
        if self.state.is_some() {
            tracing::warn!("Completion settler dropped without settling; observers stay pending");
        }
    }
}

impl<T, E> Debug for Settler<T, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settler")
            .field("settled", &self.state.is_none())
            .finish()
    }
}
