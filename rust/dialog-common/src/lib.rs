#![warn(missing_docs)]

//! This crate constitutes a library of light weight helpers that are shared
//! across the dialog crates. Their chief quality is that they depend on little
//! beyond tokio's synchronization primitives.

mod sync;
pub use sync::*;

mod impossible;
pub use impossible::*;

pub mod completion;
pub use completion::{Completion, Settler, pending};
