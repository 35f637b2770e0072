//! Alert and confirm dialogs behind one asynchronous API.
//!
//! A [`DialogService`] shows dialogs through a native multi-button dialog
//! host when the environment has one, falls back on the browser's blocking
//! `alert`/`confirm`, and rejects with [`DialogRejection::Unsupported`] when
//! neither exists. Every call returns a [`DialogCompletion`] that settles
//! once with the chosen button.
//!
//! # Example
//!
//! ```
//! use dialog_notification::{
//!     Button, DialogRejection, DialogService, NativeCallback, NativeDialogHost,
//! };
//!
//! // A native host whose user always presses the second slot.
//! struct SecondSlot;
//!
//! impl NativeDialogHost for SecondSlot {
//!     fn alert(&self, _: &str, callback: NativeCallback, _: &str, _: &str) {
//!         callback(Some(2))
//!     }
//!
//!     fn confirm(&self, _: &str, callback: NativeCallback, _: &str, labels: &str) {
//!         // The cancel button is displayed last.
//!         assert_eq!(labels, "Leave,Stay");
//!         callback(Some(2))
//!     }
//! }
//!
//! let service = DialogService::from_native(SecondSlot);
//!
//! // The first button is the cancel action of a confirm.
//! let completion = service.confirm(
//!     "Unsaved changes",
//!     Some("Leave this page?"),
//!     vec![Button::new("Stay"), Button::new("Leave")],
//! );
//!
//! assert_eq!(
//!     completion.outcome(),
//!     Some(Err(DialogRejection::Cancelled { index: 1 }))
//! );
//! ```
//!
//! # Index conventions
//!
//! | Path | Outcome | Settles with |
//! |------|---------|--------------|
//! | native alert | any slot, or dismissed | `Ok(slot - 1)`, `Ok(0)` with no callback when dismissed |
//! | native confirm | last displayed slot, or dismissed | `Err(Cancelled { index: slots - 1 })` |
//! | native confirm | any other slot | `Ok(slot - 1)` |
//! | browser alert | acknowledged | `Ok(0)` |
//! | browser confirm | accepted / declined | `Ok(1)` / `Err(Cancelled { index: 0 })` |
//! | none | | `Err(Unsupported)` |
//!
//! See [`layout`] for how caller order maps onto native slots.

#![warn(missing_docs)]

mod button;
pub use button::*;

mod request;
pub use request::*;

mod error;
pub use error::*;

mod settings;
pub use settings::*;

pub mod layout;
pub use layout::{NativeLayout, Settlement, join_labels, to_native_display_order};

mod dispatch;
pub(crate) use dispatch::ButtonDispatch;

pub mod host;
pub use host::*;

mod service;
pub use service::*;

#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
pub mod web;

#[cfg(any(test, feature = "helpers"))]
pub mod helpers;

pub use dialog_common::{Completion, Impossible};
