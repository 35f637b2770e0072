use crate::Buttons;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// The two dialog flavours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogKind {
    /// A simple acknowledgement. No button represents a negative outcome.
    Alert,
    /// A question where the first supplied button is the negative/cancel
    /// outcome.
    Confirm,
}

impl Display for DialogKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DialogKind::Alert => write!(f, "alert"),
            DialogKind::Confirm => write!(f, "confirm"),
        }
    }
}

/// A single dialog invocation. Built and consumed within one call.
#[derive(Debug, Clone)]
pub struct DialogRequest {
    kind: DialogKind,
    title: String,
    message: String,
    buttons: Buttons,
}

impl DialogRequest {
    /// Build a request.
    ///
    /// When `message` is absent the title is shown as the message and the
    /// title is left empty.
    pub fn new(
        kind: DialogKind,
        title: impl Into<String>,
        message: Option<impl Into<String>>,
        buttons: impl Into<Buttons>,
    ) -> Self {
        let (title, message) = match message {
            Some(message) => (title.into(), message.into()),
            None => (String::new(), title.into()),
        };

        Self {
            kind,
            title,
            message,
            buttons: buttons.into(),
        }
    }

    /// Which flavour of dialog this is.
    pub fn kind(&self) -> DialogKind {
        self.kind
    }

    /// The dialog title; empty when the caller only supplied a message.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The dialog message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The caller supplied buttons, in caller order.
    pub fn buttons(&self) -> &Buttons {
        &self.buttons
    }

    pub(crate) fn into_parts(self) -> (DialogKind, String, String, Buttons) {
        (self.kind, self.title, self.message, self.buttons)
    }
}
