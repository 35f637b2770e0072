use crate::{
    ButtonDispatch, Buttons, DialogKind, DialogRejection, DialogRequest, DialogSettings,
    HostDialogs, NativeCallback, NativeDialogHost, NativeLayout, Settlement, join_labels,
    to_native_display_order,
};
use dialog_common::{Completion, Impossible, Settler, boxed_once, pending};
use std::fmt::{Debug, Formatter};

/// The handle returned for every dialog. It resolves with the index of a
/// positive choice or rejects with a [`DialogRejection`].
pub type DialogCompletion = Completion<usize, DialogRejection>;

/// Which facility a [`DialogService`] shows its dialogs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogCapability {
    /// A native multi-button dialog host.
    Native,
    /// The browser's blocking `alert`/`confirm`.
    Host,
    /// Nothing; every dialog rejects without an index.
    Unsupported,
}

/// Shows alert and confirm dialogs through whichever facility the
/// environment offers, preferring a native host over browser dialogs.
///
/// Each call builds its own callbacks and completion, so the service holds no
/// per-dialog state.
pub struct DialogService<N = Impossible, H = Impossible> {
    native: Option<N>,
    host: Option<H>,
    settings: DialogSettings,
}

impl DialogService {
    /// A service for an environment without any dialog facility.
    pub fn unsupported() -> Self {
        Self::new(None, None)
    }
}

impl<N: NativeDialogHost> DialogService<N, Impossible> {
    /// A service backed only by a native dialog host.
    pub fn from_native(native: N) -> Self {
        Self::new(Some(native), None)
    }
}

impl<H: HostDialogs> DialogService<Impossible, H> {
    /// A service backed only by browser dialogs.
    pub fn from_host(host: H) -> Self {
        Self::new(None, Some(host))
    }
}

impl<N, H> DialogService<N, H>
where
    N: NativeDialogHost,
    H: HostDialogs,
{
    /// A service over the given facilities. Either may be absent.
    pub fn new(native: Option<N>, host: Option<H>) -> Self {
        Self {
            native,
            host,
            settings: DialogSettings::default(),
        }
    }

    /// Replace the native host conventions.
    pub fn with_settings(mut self, settings: DialogSettings) -> Self {
        self.settings = settings;
        self
    }

    /// The native host conventions in use.
    pub fn settings(&self) -> &DialogSettings {
        &self.settings
    }

    /// The native dialog host, if any.
    pub fn native(&self) -> Option<&N> {
        self.native.as_ref()
    }

    /// The browser dialogs, if any.
    pub fn host(&self) -> Option<&H> {
        self.host.as_ref()
    }

    /// The facility dialogs will be shown with.
    pub fn capability(&self) -> DialogCapability {
        match (&self.native, &self.host) {
            (Some(_), _) => DialogCapability::Native,
            (None, Some(_)) => DialogCapability::Host,
            (None, None) => DialogCapability::Unsupported,
        }
    }

    /// Show an acknowledgement dialog.
    ///
    /// When `message` is `None` the title is shown as the message. The
    /// completion resolves with the index of the button pressed and never
    /// rejects, except with [`DialogRejection::Unsupported`].
    pub fn alert(
        &self,
        title: &str,
        message: Option<&str>,
        buttons: impl Into<Buttons>,
    ) -> DialogCompletion {
        self.present(DialogRequest::new(DialogKind::Alert, title, message, buttons))
    }

    /// Show a confirm dialog.
    ///
    /// The first button is the negative outcome: choosing it, or dismissing
    /// the dialog, rejects with [`DialogRejection::Cancelled`]. Any other
    /// button resolves with its position in the displayed order.
    pub fn confirm(
        &self,
        title: &str,
        message: Option<&str>,
        buttons: impl Into<Buttons>,
    ) -> DialogCompletion {
        self.present(DialogRequest::new(
            DialogKind::Confirm,
            title,
            message,
            buttons,
        ))
    }

    /// Show the dialog described by `request`.
    pub fn present(&self, request: DialogRequest) -> DialogCompletion {
        let (settler, completion) = pending();

        match (&self.native, &self.host) {
            (Some(native), _) => self.present_native(native, request, settler),
            (None, Some(host)) => present_host(host, request, settler),
            (None, None) => {
                tracing::warn!(kind = %request.kind(), "No dialog facility available");
                settler.reject(DialogRejection::Unsupported);
            }
        }

        completion
    }

    fn present_native(
        &self,
        native: &N,
        request: DialogRequest,
        settler: Settler<usize, DialogRejection>,
    ) {
        let (kind, title, message, buttons) = request.into_parts();
        let layout = NativeLayout::new(kind, buttons.len(), &self.settings);
        let display = to_native_display_order(kind, buttons.into_vec());
        let labels = join_labels(&display, &self.settings.label_separator);
        let dispatch = ButtonDispatch::native(&layout, &display);

        tracing::debug!(
            %kind,
            buttons = layout.button_count(),
            slots = layout.visible_slots(),
            "Presenting native dialog"
        );

        let callback: NativeCallback = boxed_once(move |raw: Option<u32>| {
            let settlement = layout.from_native_index(raw);
            tracing::trace!(%kind, ?raw, ?settlement, "Native dialog answered");

            // A dismissed confirm notifies its cancel button; a dismissed
            // alert has nobody to notify.
            if kind == DialogKind::Confirm || layout.chosen_position(raw).is_some() {
                dispatch.fire(&settlement);
            }
            settler.settle(settlement.into());
        });

        match kind {
            DialogKind::Alert => native.alert(&message, callback, &title, &labels),
            DialogKind::Confirm => native.confirm(&message, callback, &title, &labels),
        }
    }
}

fn present_host<H: HostDialogs>(
    host: &H,
    request: DialogRequest,
    settler: Settler<usize, DialogRejection>,
) {
    let (kind, title, message, buttons) = request.into_parts();
    let buttons = buttons.into_vec();
    let text = if message.is_empty() { &title } else { &message };

    tracing::debug!(%kind, buttons = buttons.len(), "Presenting browser dialog");

    let (dispatch, settlement) = match kind {
        DialogKind::Alert => {
            let dispatch = ButtonDispatch::host_alert(&buttons);
            host.alert(text);
            (dispatch, Settlement::Resolved(0))
        }
        DialogKind::Confirm => {
            let dispatch = ButtonDispatch::host_confirm(&buttons);
            let settlement = if host.confirm(text) {
                Settlement::Resolved(1)
            } else {
                Settlement::Rejected(0)
            };
            (dispatch, settlement)
        }
    };

    tracing::trace!(%kind, ?settlement, "Browser dialog answered");
    dispatch.fire(&settlement);
    settler.settle(settlement.into());
}

impl<N, H> Debug for DialogService<N, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogService")
            .field("native", &self.native.is_some())
            .field("host", &self.host.is_some())
            .field("settings", &self.settings)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Button;
    use crate::helpers::{NativeInvocation, ScriptedHost, ScriptedNative};
    use parking_lot::Mutex;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    #[cfg(target_arch = "wasm32")]
    use wasm_bindgen_test::wasm_bindgen_test;

    type Log = Arc<Mutex<Vec<(String, usize)>>>;

    fn buttons(log: &Log, labels: &[&str]) -> Vec<Button> {
        labels
            .iter()
            .map(|label| {
                let log = log.clone();
                let name = label.to_string();
                Button::new(*label).on_select(move |index| log.lock().push((name.clone(), index)))
            })
            .collect()
    }

    fn fired(log: &Log) -> Vec<(String, usize)> {
        log.lock().clone()
    }

    fn entry(label: &str, index: usize) -> (String, usize) {
        (label.to_string(), index)
    }

    #[test]
    fn it_rejects_when_the_rotated_first_button_is_chosen() {
        let native = Arc::new(ScriptedNative::new());
        let service = DialogService::from_native(native.clone());
        let log = Log::default();

        let completion = service.confirm("T", Some("M"), buttons(&log, &["Yes", "No", "Cancel"]));

        assert_eq!(
            native.last_invocation(),
            Some(NativeInvocation {
                kind: DialogKind::Confirm,
                message: "M".into(),
                title: "T".into(),
                button_labels: "No,Cancel,Yes".into(),
            })
        );
        assert!(!completion.is_settled());

        assert!(native.answer(Some(3)));

        assert_eq!(completion.outcome(), Some(Err(DialogRejection::Cancelled { index: 2 })));
        assert_eq!(fired(&log), vec![entry("Yes", 2)]);
    }

    #[test]
    fn it_resolves_with_the_display_position_of_the_chosen_button() {
        let native = Arc::new(ScriptedNative::new());
        let service = DialogService::from_native(native.clone());
        let log = Log::default();

        let completion = service.confirm("T", Some("M"), buttons(&log, &["Yes", "No", "Cancel"]));
        native.answer(Some(1));

        assert_eq!(completion.outcome(), Some(Ok(0)));
        assert_eq!(fired(&log), vec![entry("No", 0)]);
    }

    #[test]
    fn it_rejects_a_default_confirm_on_the_native_cancel_slot() {
        let native = Arc::new(ScriptedNative::new());
        let service = DialogService::from_native(native.clone());

        let completion = service.confirm("T", Some("M"), ());
        native.answer(Some(2));

        assert_eq!(completion.outcome(), Some(Err(DialogRejection::Cancelled { index: 1 })));
        assert_eq!(native.last_invocation().map(|shown| shown.button_labels), Some(String::new()));
    }

    #[test]
    fn it_settles_a_dismissed_confirm_like_its_cancel_button() {
        let native = Arc::new(ScriptedNative::new());
        let service = DialogService::from_native(native.clone());
        let log = Log::default();

        let dismissed = service.confirm("T", Some("M"), buttons(&log, &["Stop", "Go"]));
        native.answer(None);
        let cancelled = service.confirm("T", Some("M"), buttons(&log, &["Stop", "Go"]));
        native.answer(Some(2));

        assert_eq!(dismissed.outcome(), cancelled.outcome());
        assert_eq!(dismissed.outcome(), Some(Err(DialogRejection::Cancelled { index: 1 })));
        assert_eq!(fired(&log), vec![entry("Stop", 1), entry("Stop", 1)]);
    }

    #[test]
    fn it_never_rejects_a_native_alert() {
        let native = Arc::new(ScriptedNative::new());
        let service = DialogService::from_native(native.clone());
        let log = Log::default();

        let chosen = service.alert("T", Some("M"), buttons(&log, &["A", "B"]));
        native.answer(Some(2));
        let dismissed = service.alert("T", Some("M"), buttons(&log, &["A", "B"]));
        native.answer(None);

        assert_eq!(native.invocations()[0].button_labels, "A,B");
        assert_eq!(chosen.outcome(), Some(Ok(1)));
        assert_eq!(dismissed.outcome(), Some(Ok(0)));
        assert_eq!(fired(&log), vec![entry("B", 1)]);
    }

    #[test]
    fn it_fires_no_button_when_an_alert_is_dismissed() {
        for raw in [None, Some(0), Some(7)] {
            let native = Arc::new(ScriptedNative::new());
            let service = DialogService::from_native(native.clone());
            let log = Log::default();

            let completion = service.alert(
                "T",
                Some("M"),
                buttons(&log, &["Delete everything", "Keep"]),
            );
            native.answer(raw);

            assert_eq!(completion.outcome(), Some(Ok(0)), "{raw:?}");
            assert!(fired(&log).is_empty(), "{raw:?}");
        }
    }

    #[test]
    fn it_shows_a_lone_title_as_the_message() {
        let native = Arc::new(ScriptedNative::new());
        let service = DialogService::from_native(native.clone());

        let _completion = service.alert("Hi", None, ());

        let shown = native.last_invocation();
        assert_eq!(shown.as_ref().map(|shown| shown.message.as_str()), Some("Hi"));
        assert_eq!(shown.as_ref().map(|shown| shown.title.as_str()), Some(""));
    }

    #[test]
    fn it_rejects_without_an_index_when_unsupported() {
        let service = DialogService::unsupported();

        let completion = service.alert("Hi", None, ());

        assert_eq!(service.capability(), DialogCapability::Unsupported);
        assert_eq!(completion.outcome(), Some(Err(DialogRejection::Unsupported)));
        assert_eq!(
            completion.outcome().and_then(|outcome| outcome.err()).and_then(|e| e.index()),
            None
        );
    }

    #[test]
    fn it_fires_button_callbacks_before_caller_listeners() {
        let native = Arc::new(ScriptedNative::new());
        let service = DialogService::from_native(native.clone());
        let log = Log::default();

        let completion = service.confirm("T", Some("M"), buttons(&log, &["No", "Yes"]));
        let listener = log.clone();
        completion.on_success(move |index| listener.lock().push(("listener".into(), index)));
        native.answer(Some(1));

        assert_eq!(fired(&log), vec![entry("Yes", 0), entry("listener", 0)]);
    }

    #[test]
    fn it_prefers_the_native_host_over_browser_dialogs() {
        let native = Arc::new(ScriptedNative::new());
        let host = Arc::new(ScriptedHost::accepting());
        let service = DialogService::new(Some(native.clone()), Some(host.clone()));

        let _completion = service.confirm("T", Some("M"), ());

        assert_eq!(service.capability(), DialogCapability::Native);
        assert_eq!(native.unanswered(), 1);
        assert!(host.shown().is_empty());
    }

    #[test]
    fn it_resolves_a_browser_alert_with_the_first_button() {
        let host = Arc::new(ScriptedHost::accepting());
        let service = DialogService::from_host(host.clone());
        let log = Log::default();

        let completion = service.alert("Title", Some(""), buttons(&log, &["Ok", "Other"]));

        assert_eq!(service.capability(), DialogCapability::Host);
        assert_eq!(host.shown(), vec![(DialogKind::Alert, "Title".to_string())]);
        assert_eq!(completion.outcome(), Some(Ok(0)));
        assert_eq!(fired(&log), vec![entry("Ok", 0)]);
    }

    #[test]
    fn it_resolves_an_accepted_browser_confirm_with_the_second_button() {
        let host = ScriptedHost::accepting();
        let service = DialogService::from_host(&host);
        let log = Log::default();

        let completion = service.confirm("T", Some("Sure?"), buttons(&log, &["Cancel", "Ok"]));

        assert_eq!(host.shown(), vec![(DialogKind::Confirm, "Sure?".to_string())]);
        assert_eq!(completion.outcome(), Some(Ok(1)));
        assert_eq!(fired(&log), vec![entry("Ok", 1)]);
    }

    #[test]
    fn it_rejects_a_declined_browser_confirm_with_the_first_button() {
        let host = ScriptedHost::declining();
        let service = DialogService::from_host(&host);
        let log = Log::default();

        let completion = service.confirm("T", Some("Sure?"), buttons(&log, &["Cancel", "Ok"]));

        assert_eq!(completion.outcome(), Some(Err(DialogRejection::Cancelled { index: 0 })));
        assert_eq!(fired(&log), vec![entry("Cancel", 0)]);
    }

    #[test]
    fn it_joins_labels_with_the_configured_separator() {
        let native = Arc::new(ScriptedNative::new());
        let service = DialogService::from_native(native.clone()).with_settings(DialogSettings {
            label_separator: "|".into(),
            ..DialogSettings::default()
        });

        let _completion = service.confirm(
            "T",
            Some("M"),
            vec![Button::new("Back"), Button::new("Save"), Button::new("Discard")],
        );

        assert_eq!(
            native.last_invocation().map(|shown| shown.button_labels),
            Some("Save|Discard|Back".to_string())
        );
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), tokio::test)]
    async fn it_can_await_the_chosen_button() -> anyhow::Result<()> {
        let native = Arc::new(ScriptedNative::new());
        let service = DialogService::from_native(native.clone());

        let completion = service.confirm("T", Some("M"), vec![Button::new("No"), Button::new("Yes")]);
        native.answer(Some(1));

        assert_eq!(completion.await, Ok(0));
        Ok(())
    }
}
