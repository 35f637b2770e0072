use thiserror::Error;

/// Why a dialog completion was rejected.
///
/// A user cancel is an ordinary outcome carrying the index of the cancel
/// button; an environment without any dialog facility rejects without an
/// index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum DialogRejection {
    /// The cancel button was chosen or the dialog was dismissed.
    #[error("dialog cancelled with button {index}")]
    Cancelled {
        /// Index of the designated cancel button.
        index: usize,
    },

    /// Neither a native nor a host dialog is available.
    #[error("no dialog facility is available in this environment")]
    Unsupported,
}

impl DialogRejection {
    /// The cancel button index, or `None` for an unsupported environment.
    pub fn index(&self) -> Option<usize> {
        match self {
            DialogRejection::Cancelled { index } => Some(*index),
            DialogRejection::Unsupported => None,
        }
    }
}
