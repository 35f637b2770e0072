//! The dialog facilities a [`DialogService`](crate::DialogService) can be
//! backed by.
//!
//! - [`NativeDialogHost`]: a platform plugin that shows multi-button dialogs
//!   and reports the chosen 1-based slot through a callback.
//! - [`HostDialogs`]: the blocking two-outcome `alert`/`confirm` pair that
//!   every browser offers.
//!
//! Either can be statically absent by naming [`Impossible`] in its place.

use dialog_common::{BoxedOnce, Impossible};
use std::sync::Arc;

/// The completion callback handed to a [`NativeDialogHost`].
///
/// It receives the 1-based slot of the chosen button, or `None` when the
/// dialog was dismissed without a choice. Hosts that report dismissal as `0`
/// may pass `Some(0)`; both are treated alike.
pub type NativeCallback = BoxedOnce<Option<u32>>;

/// A platform facility for multi-button dialogs.
///
/// Implementations show the dialog and return immediately; `callback` is
/// invoked once the user responds or the dialog is dismissed. `button_labels`
/// is a single string of labels joined in display order, empty when the host
/// should show its default buttons.
pub trait NativeDialogHost {
    /// Show an acknowledgement dialog.
    fn alert(&self, message: &str, callback: NativeCallback, title: &str, button_labels: &str);

    /// Show a dialog whose last displayed button is the cancel action.
    fn confirm(&self, message: &str, callback: NativeCallback, title: &str, button_labels: &str);
}

/// The blocking dialogs of a plain browser.
pub trait HostDialogs {
    /// Show `message` and wait for the user to acknowledge it.
    fn alert(&self, message: &str);

    /// Show `message` with OK/Cancel and report whether it was accepted.
    fn confirm(&self, message: &str) -> bool;
}

impl<T: NativeDialogHost + ?Sized> NativeDialogHost for &T {
    fn alert(&self, message: &str, callback: NativeCallback, title: &str, button_labels: &str) {
        (**self).alert(message, callback, title, button_labels)
    }

    fn confirm(&self, message: &str, callback: NativeCallback, title: &str, button_labels: &str) {
        (**self).confirm(message, callback, title, button_labels)
    }
}

impl<T: NativeDialogHost + ?Sized> NativeDialogHost for Arc<T> {
    fn alert(&self, message: &str, callback: NativeCallback, title: &str, button_labels: &str) {
        (**self).alert(message, callback, title, button_labels)
    }

    fn confirm(&self, message: &str, callback: NativeCallback, title: &str, button_labels: &str) {
        (**self).confirm(message, callback, title, button_labels)
    }
}

impl<T: HostDialogs + ?Sized> HostDialogs for &T {
    fn alert(&self, message: &str) {
        (**self).alert(message)
    }

    fn confirm(&self, message: &str) -> bool {
        (**self).confirm(message)
    }
}

impl<T: HostDialogs + ?Sized> HostDialogs for Arc<T> {
    fn alert(&self, message: &str) {
        (**self).alert(message)
    }

    fn confirm(&self, message: &str) -> bool {
        (**self).confirm(message)
    }
}

impl<T> NativeDialogHost for Impossible<T> {
    fn alert(&self, _: &str, _: NativeCallback, _: &str, _: &str) {
        match self.0 {}
    }

    fn confirm(&self, _: &str, _: NativeCallback, _: &str, _: &str) {
        match self.0 {}
    }
}

impl<T> HostDialogs for Impossible<T> {
    fn alert(&self, _: &str) {
        match self.0 {}
    }

    fn confirm(&self, _: &str) -> bool {
        match self.0 {}
    }
}
