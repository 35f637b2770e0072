//! Buttons supplied by callers.

use dialog_common::{ConditionalSync, SharedFn, shared_fn};
use std::fmt::{Debug, Formatter};

/// A button shown in a dialog: a label and an optional callback that fires
/// when the dialog settles on this button.
///
/// The callback receives the index the dialog settled with. A button with an
/// empty label and no callback is tolerated; it is shown blank and nothing
/// fires for it.
#[derive(Clone, Default)]
pub struct Button {
    label: String,
    on_select: Option<SharedFn<usize>>,
}

impl Button {
    /// Create a button with the given label and no callback.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            on_select: None,
        }
    }

    /// Attach the callback fired when the dialog settles on this button.
    pub fn on_select<F>(mut self, callback: F) -> Self
    where
        F: Fn(usize) + ConditionalSync + 'static,
    {
        self.on_select = Some(shared_fn(callback));
        self
    }

    /// The label displayed for this button.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether a callback is attached.
    pub fn has_callback(&self) -> bool {
        self.on_select.is_some()
    }

    pub(crate) fn callback(&self) -> Option<&SharedFn<usize>> {
        self.on_select.as_ref()
    }
}

impl Debug for Button {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Button")
            .field("label", &self.label)
            .field("on_select", &self.on_select.is_some())
            .finish()
    }
}

impl From<&str> for Button {
    fn from(label: &str) -> Self {
        Button::new(label)
    }
}

impl From<String> for Button {
    fn from(label: String) -> Self {
        Button::new(label)
    }
}

/// The ordered button list of a dialog request.
///
/// Callers may omit buttons entirely, pass a single button or pass an
/// ordered list; all of those convert into `Buttons`.
#[derive(Clone, Debug, Default)]
pub struct Buttons(Vec<Button>);

impl Buttons {
    /// No buttons: the host shows its default set.
    pub fn none() -> Self {
        Self::default()
    }

    /// Number of caller supplied buttons.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no buttons were supplied.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The button at caller-facing `index`.
    pub fn get(&self, index: usize) -> Option<&Button> {
        self.0.get(index)
    }

    /// Iterate the buttons in caller order.
    pub fn iter(&self) -> std::slice::Iter<'_, Button> {
        self.0.iter()
    }

    pub(crate) fn into_vec(self) -> Vec<Button> {
        self.0
    }
}

impl From<()> for Buttons {
    fn from(_: ()) -> Self {
        Buttons::none()
    }
}

impl From<Button> for Buttons {
    fn from(button: Button) -> Self {
        Buttons(vec![button])
    }
}

impl From<Vec<Button>> for Buttons {
    fn from(buttons: Vec<Button>) -> Self {
        Buttons(buttons)
    }
}

impl<const N: usize> From<[Button; N]> for Buttons {
    fn from(buttons: [Button; N]) -> Self {
        Buttons(buttons.into())
    }
}

impl<B: Into<Buttons>> From<Option<B>> for Buttons {
    fn from(buttons: Option<B>) -> Self {
        buttons.map(Into::into).unwrap_or_default()
    }
}

impl FromIterator<Button> for Buttons {
    fn from_iter<I: IntoIterator<Item = Button>>(iter: I) -> Self {
        Buttons(iter.into_iter().collect())
    }
}
