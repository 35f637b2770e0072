//! Dialog facilities of a browser or a Cordova-style mobile shell.
//!
//! - [`CordovaNotification`] drives the `navigator.notification` plugin.
//! - [`BrowserDialogs`] falls back on `window.alert` and `window.confirm`.
//! - [`detect`] assembles a [`DialogService`] from whichever of the two the
//!   current page offers.

use crate::{DialogService, HostDialogs, NativeCallback, NativeDialogHost};
use js_sys::{Array, Function, Reflect};
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

/// Errors from the JavaScript dialog bindings.
#[derive(Debug, Clone, thiserror::Error)]
pub enum WebDialogError {
    /// The dialog API is not available in this environment.
    #[error("dialog API not available: {0}")]
    NotAvailable(String),

    /// A JavaScript interop error occurred.
    #[error("JS error: {0}")]
    JsError(String),
}

/// Build a [`DialogService`] for the current page.
pub fn detect() -> DialogService<CordovaNotification, BrowserDialogs> {
    let service = DialogService::new(CordovaNotification::detect(), BrowserDialogs::detect());
    tracing::debug!(capability = ?service.capability(), "Detected dialog facility");
    service
}

/// The `navigator.notification` dialog plugin of a mobile shell.
#[derive(Debug, Clone)]
pub struct CordovaNotification {
    notification: JsValue,
}

impl CordovaNotification {
    /// Wrap `navigator.notification` if the page has it.
    pub fn detect() -> Option<Self> {
        match Self::from_global() {
            Ok(notification) => Some(notification),
            Err(error) => {
                tracing::debug!(%error, "Native dialog plugin not detected");
                None
            }
        }
    }

    /// Wrap `navigator.notification`, reporting why it is unavailable.
    pub fn from_global() -> Result<Self, WebDialogError> {
        let navigator = js_get(&js_sys::global(), "navigator")?;
        if navigator.is_undefined() || navigator.is_null() {
            return Err(WebDialogError::NotAvailable(
                "navigator is undefined".into(),
            ));
        }

        let notification = js_get(&navigator, "notification")?;
        Self::from_object(notification)
    }

    /// Wrap any object exposing the plugin's `alert` and `confirm`
    /// functions.
    pub fn from_object(notification: JsValue) -> Result<Self, WebDialogError> {
        if notification.is_undefined() || notification.is_null() {
            return Err(WebDialogError::NotAvailable(
                "navigator.notification is undefined".into(),
            ));
        }
        Ok(Self { notification })
    }

    fn invoke(
        &self,
        method: &str,
        message: &str,
        callback: NativeCallback,
        title: &str,
        button_labels: &str,
    ) {
        // Shared with the JS handler so a failed call can still settle.
        let slot = Rc::new(RefCell::new(Some(callback)));

        let answer = slot.clone();
        let handler = Closure::once_into_js(move |value: JsValue| {
            let callback = answer.borrow_mut().take();
            if let Some(callback) = callback {
                callback(native_index(&value));
            }
        });

        if let Err(error) = self.call(method, message, &handler, title, button_labels) {
            tracing::warn!(method, %error, "Native dialog call failed; settling as dismissed");
            let callback = slot.borrow_mut().take();
            if let Some(callback) = callback {
                callback(None);
            }
        }
    }

    fn call(
        &self,
        method: &str,
        message: &str,
        handler: &JsValue,
        title: &str,
        button_labels: &str,
    ) -> Result<(), WebDialogError> {
        let function: Function = js_get(&self.notification, method)?
            .dyn_into()
            .map_err(|_| {
                WebDialogError::NotAvailable(format!("notification.{method} is not a function"))
            })?;

        let args = Array::of4(
            &JsValue::from_str(message),
            handler,
            &JsValue::from_str(title),
            &JsValue::from_str(button_labels),
        );
        function
            .apply(&self.notification, &args)
            .map_err(|e| WebDialogError::JsError(format!("{e:?}")))?;
        Ok(())
    }
}

impl NativeDialogHost for CordovaNotification {
    fn alert(&self, message: &str, callback: NativeCallback, title: &str, button_labels: &str) {
        self.invoke("alert", message, callback, title, button_labels)
    }

    fn confirm(&self, message: &str, callback: NativeCallback, title: &str, button_labels: &str) {
        self.invoke("confirm", message, callback, title, button_labels)
    }
}

/// The blocking dialogs of `window`.
#[derive(Debug, Clone)]
pub struct BrowserDialogs {
    window: web_sys::Window,
}

impl BrowserDialogs {
    /// Wrap `window` if the code runs on a page (not in a worker).
    pub fn detect() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }
}

impl HostDialogs for BrowserDialogs {
    fn alert(&self, message: &str) {
        if let Err(error) = self.window.alert_with_message(message) {
            tracing::warn!(?error, "window.alert failed");
        }
    }

    fn confirm(&self, message: &str) -> bool {
        self.window
            .confirm_with_message(message)
            .unwrap_or_else(|error| {
                tracing::warn!(?error, "window.confirm failed; treating it as declined");
                false
            })
    }
}

/// Read the 1-based slot the plugin reported. Anything that is not a
/// non-negative number counts as dismissal.
fn native_index(value: &JsValue) -> Option<u32> {
    value
        .as_f64()
        .filter(|index| {
            index.is_finite()
                && index.fract() == 0.0
                && *index >= 0.0
                && *index <= f64::from(u32::MAX)
        })
        .map(|index| index as u32)
}

/// Shorthand for `Reflect::get` with a string key.
fn js_get(obj: &JsValue, key: &str) -> Result<JsValue, WebDialogError> {
    Reflect::get(obj, &JsValue::from_str(key))
        .map_err(|e| WebDialogError::JsError(format!("failed to get '{key}': {e:?}")))
}
