//! Cross-target bound compatibility traits and callback aliases
//!
//! Dialog callbacks are invoked from whatever context the host environment
//! delivers them on. On native targets that may be another thread, so the
//! callbacks must be `Send` (and `Sync` when shared). On
//! `wasm32-unknown-unknown` everything runs on the single browser thread and
//! callbacks routinely capture `!Send` JS handles, so no bound applies.

use std::sync::Arc;

#[allow(missing_docs)]
#[cfg(not(target_arch = "wasm32"))]
pub trait ConditionalSend: Send {}

#[cfg(not(target_arch = "wasm32"))]
impl<S> ConditionalSend for S where S: Send {}

#[allow(missing_docs)]
#[cfg(not(target_arch = "wasm32"))]
pub trait ConditionalSync: Send + Sync {}

#[cfg(not(target_arch = "wasm32"))]
impl<S> ConditionalSync for S where S: Send + Sync {}

#[allow(missing_docs)]
#[cfg(target_arch = "wasm32")]
pub trait ConditionalSend {}

#[cfg(target_arch = "wasm32")]
impl<S> ConditionalSend for S {}

#[allow(missing_docs)]
#[cfg(target_arch = "wasm32")]
pub trait ConditionalSync {}

#[cfg(target_arch = "wasm32")]
impl<S> ConditionalSync for S {}

/// A boxed callback that is invoked at most once.
#[cfg(not(target_arch = "wasm32"))]
pub type BoxedOnce<A> = Box<dyn FnOnce(A) + Send + 'static>;

/// A boxed callback that is invoked at most once.
#[cfg(target_arch = "wasm32")]
pub type BoxedOnce<A> = Box<dyn FnOnce(A) + 'static>;

/// A reference counted callback that may be invoked any number of times and
/// shared between clones of its owner.
#[cfg(not(target_arch = "wasm32"))]
pub type SharedFn<A> = Arc<dyn Fn(A) + Send + Sync + 'static>;

/// A reference counted callback that may be invoked any number of times and
/// shared between clones of its owner.
#[cfg(target_arch = "wasm32")]
pub type SharedFn<A> = Arc<dyn Fn(A) + 'static>;

/// Box a one-shot callback, applying the platform's `Send` requirement.
pub fn boxed_once<A, F>(callback: F) -> BoxedOnce<A>
where
    F: FnOnce(A) + ConditionalSend + 'static,
{
    Box::new(callback)
}

/// Wrap a reusable callback, applying the platform's `Send + Sync`
/// requirement.
pub fn shared_fn<A, F>(callback: F) -> SharedFn<A>
where
    F: Fn(A) + ConditionalSync + 'static,
{
    Arc::new(callback)
}
