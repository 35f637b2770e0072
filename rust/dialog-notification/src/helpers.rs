//! Scripted dialog hosts for tests.
//!
//! [`ScriptedNative`] records every dialog it is asked to show and holds on
//! to the completion callbacks, so a test can answer them later the way a
//! native plugin would. [`ScriptedHost`] answers browser confirms with a fixed
//! choice.

use crate::{DialogKind, HostDialogs, NativeCallback, NativeDialogHost};
use parking_lot::Mutex;
use std::fmt::{Debug, Formatter};

/// A dialog shown through [`ScriptedNative`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeInvocation {
    /// Which native entry point was called.
    pub kind: DialogKind,
    /// The message argument.
    pub message: String,
    /// The title argument.
    pub title: String,
    /// The joined button labels argument.
    pub button_labels: String,
}

/// A native dialog host driven by the test.
#[derive(Default)]
pub struct ScriptedNative {
    invocations: Mutex<Vec<NativeInvocation>>,
    pending: Mutex<Vec<NativeCallback>>,
}

impl ScriptedNative {
    /// A host with nothing shown yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every dialog shown so far, oldest first.
    pub fn invocations(&self) -> Vec<NativeInvocation> {
        self.invocations.lock().clone()
    }

    /// The most recently shown dialog.
    pub fn last_invocation(&self) -> Option<NativeInvocation> {
        self.invocations.lock().last().cloned()
    }

    /// Number of shown dialogs that have not been answered.
    pub fn unanswered(&self) -> usize {
        self.pending.lock().len()
    }

    /// Answer the oldest unanswered dialog with `raw`, as the native plugin
    /// would. Returns `false` when nothing is waiting for an answer.
    pub fn answer(&self, raw: Option<u32>) -> bool {
        let callback = {
            let mut pending = self.pending.lock();
            if pending.is_empty() {
                return false;
            }
            pending.remove(0)
        };

        callback(raw);
        true
    }

    fn show(&self, kind: DialogKind, message: &str, callback: NativeCallback, title: &str, labels: &str) {
        self.invocations.lock().push(NativeInvocation {
            kind,
            message: message.into(),
            title: title.into(),
            button_labels: labels.into(),
        });
        self.pending.lock().push(callback);
    }
}

impl NativeDialogHost for ScriptedNative {
    fn alert(&self, message: &str, callback: NativeCallback, title: &str, button_labels: &str) {
        self.show(DialogKind::Alert, message, callback, title, button_labels)
    }

    fn confirm(&self, message: &str, callback: NativeCallback, title: &str, button_labels: &str) {
        self.show(DialogKind::Confirm, message, callback, title, button_labels)
    }
}

impl Debug for ScriptedNative {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScriptedNative")
            .field("invocations", &*self.invocations.lock())
            .field("unanswered", &self.unanswered())
            .finish()
    }
}

/// Browser dialogs that accept or decline every confirm.
#[derive(Debug)]
pub struct ScriptedHost {
    accept: bool,
    shown: Mutex<Vec<(DialogKind, String)>>,
}

impl ScriptedHost {
    /// Browser dialogs whose confirms are accepted.
    pub fn accepting() -> Self {
        Self {
            accept: true,
            shown: Mutex::default(),
        }
    }

    /// Browser dialogs whose confirms are declined.
    pub fn declining() -> Self {
        Self {
            accept: false,
            shown: Mutex::default(),
        }
    }

    /// Every dialog shown so far with its message.
    pub fn shown(&self) -> Vec<(DialogKind, String)> {
        self.shown.lock().clone()
    }
}

impl HostDialogs for ScriptedHost {
    fn alert(&self, message: &str) {
        self.shown.lock().push((DialogKind::Alert, message.into()));
    }

    fn confirm(&self, message: &str) -> bool {
        self.shown.lock().push((DialogKind::Confirm, message.into()));
        self.accept
    }
}
