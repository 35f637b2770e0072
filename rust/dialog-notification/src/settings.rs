use serde::{Deserialize, Serialize};

/// Conventions of the native dialog host.
///
/// The defaults match the common mobile notification plugin: labels are
/// passed as one comma-joined string, an alert without custom buttons shows a
/// single "OK" button and a confirm without custom buttons shows "OK" and
/// "Cancel", with "Cancel" in the last slot.
///
/// Every field is optional when deserializing:
///
/// ```rust
/// use dialog_notification::DialogSettings;
///
/// let settings: DialogSettings =
///     serde_json::from_str(r#"{ "default_confirm_buttons": 3 }"#).unwrap();
///
/// assert_eq!(settings.default_confirm_buttons, 3);
/// assert_eq!(settings.label_separator, ",");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogSettings {
    /// Separator used to join button labels for the native host.
    pub label_separator: String,
    /// Buttons the native host shows for an alert without custom buttons.
    pub default_alert_buttons: usize,
    /// Buttons the native host shows for a confirm without custom buttons.
    /// The last of them is the cancel button.
    pub default_confirm_buttons: usize,
}

impl Default for DialogSettings {
    fn default() -> Self {
        Self {
            label_separator: ",".into(),
            default_alert_buttons: 1,
            default_confirm_buttons: 2,
        }
    }
}
